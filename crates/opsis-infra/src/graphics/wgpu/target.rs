// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The live-surface render target.

use opsis_core::renderer::{PipelineContext, RenderError, RenderTarget};

use super::device::WgpuDevice;

/// [`RenderTarget`] over the visible display surface.
///
/// Binding acquires the next swapchain frame and clears it to the sky
/// color; presenting flips it. Capture is unsupported on this variant;
/// headless operation swaps in a buffer-backed target instead.
pub struct ScreenOutput {
    device: WgpuDevice,
    frame: Option<wgpu::SurfaceTexture>,
}

impl ScreenOutput {
    /// Creates a screen target over the shared device handle.
    pub fn new(device: WgpuDevice) -> Self {
        Self {
            device,
            frame: None,
        }
    }
}

impl RenderTarget for ScreenOutput {
    fn bind(&mut self, context: &PipelineContext<'_>) -> Result<(), RenderError> {
        let frame = self.device.acquire_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let device = self.device.raw_device();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("opsis-screen-clear"),
        });
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("opsis-screen-clear-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: context.sky_color.r as f64,
                        g: context.sky_color.g as f64,
                        b: context.sky_color.b as f64,
                        a: context.sky_color.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.device.raw_queue().submit(std::iter::once(encoder.finish()));

        self.frame = Some(frame);
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        match self.frame.take() {
            Some(frame) => {
                frame.present();
                Ok(())
            }
            None => Err(RenderError::RenderingFailed(
                "present called with no bound frame".to_string(),
            )),
        }
    }
}
