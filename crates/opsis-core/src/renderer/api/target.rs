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

//! Defines the render-target capability interface and its buffer-backed variant.

use std::sync::Arc;

use crate::renderer::api::context::PipelineContext;
use crate::renderer::api::texture::RawImage;
use crate::renderer::error::{CaptureError, RenderError};
use crate::renderer::traits::OffscreenBuffer;

/// Destination for rasterized output.
///
/// A target is one of a small closed set of variants (the visible
/// display surface or an off-screen buffer) behind one capability
/// interface. The pipeline binds it before running its steps and
/// presents it afterwards; only the buffer-backed variant supports
/// reading the result back.
pub trait RenderTarget: Send {
    /// Activates the target for the coming run, clearing it to the
    /// frame's sky color and sizing it to the frame's screen size.
    fn bind(&mut self, context: &PipelineContext<'_>) -> Result<(), RenderError>;

    /// Completes the frame on this target. The live variant flips the
    /// swapchain; an off-screen buffer has nothing to flip.
    fn present(&mut self) -> Result<(), RenderError>;

    /// Reads the bound texture slot back into a tightly-packed image.
    ///
    /// Only valid after a run has completed on this target. The default
    /// implementation reports that the target has no readable storage.
    fn read_back(&self) -> Result<RawImage, RenderError> {
        Err(CaptureError::Unsupported.into())
    }
}

/// The buffer-backed [`RenderTarget`] variant.
///
/// A stack-scoped wrapper binding a retained [`OffscreenBuffer`] at one
/// texture slot for the duration of a single frame. Creating and
/// dropping the wrapper is cheap; the heavyweight GPU storage stays
/// with the buffer it wraps.
pub struct TextureBufferOutput {
    buffer: Arc<dyn OffscreenBuffer>,
    slot: u32,
}

impl TextureBufferOutput {
    /// Wraps `buffer` at the given texture slot.
    pub fn new(buffer: Arc<dyn OffscreenBuffer>, slot: u32) -> Self {
        Self { buffer, slot }
    }

    /// The texture slot this wrapper is bound to.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl RenderTarget for TextureBufferOutput {
    fn bind(&mut self, context: &PipelineContext<'_>) -> Result<(), RenderError> {
        self.buffer.prepare(context.screen_size, context.sky_color)
    }

    fn present(&mut self) -> Result<(), RenderError> {
        // Off-screen output has no swapchain; the run's result stays in
        // the buffer until it is read back or overwritten.
        Ok(())
    }

    fn read_back(&self) -> Result<RawImage, RenderError> {
        self.buffer.read_texture(self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Extent2D, LinearRgba};
    use crate::renderer::api::texture::TextureFormat;
    use crate::renderer::traits::{ClientHandle, GraphicsDevice, HudOverlay, ShadowPass};
    use std::sync::Mutex;

    struct StubBuffer {
        prepared: Mutex<Option<(Extent2D, LinearRgba)>>,
        reads: Mutex<Vec<u32>>,
    }
    impl StubBuffer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                prepared: Mutex::new(None),
                reads: Mutex::new(Vec::new()),
            })
        }
    }
    impl OffscreenBuffer for StubBuffer {
        fn prepare(&self, size: Extent2D, clear_color: LinearRgba) -> Result<(), RenderError> {
            *self.prepared.lock().unwrap() = Some((size, clear_color));
            Ok(())
        }
        fn read_texture(&self, slot: u32) -> Result<RawImage, RenderError> {
            self.reads.lock().unwrap().push(slot);
            Ok(RawImage::new(
                TextureFormat::Rgba8Unorm,
                Extent2D::new(1, 1),
                vec![1, 2, 3, 4],
            )?)
        }
    }

    struct StubDevice;
    impl GraphicsDevice for StubDevice {
        fn screen_size(&self) -> Extent2D {
            Extent2D::new(16, 9)
        }
        fn adapter_name(&self) -> String {
            "stub".into()
        }
    }
    struct StubClient;
    impl ClientHandle for StubClient {
        fn is_headless(&self) -> bool {
            true
        }
        fn draw_world(&self, _device: &dyn GraphicsDevice) -> Result<(), RenderError> {
            Ok(())
        }
    }
    struct StubHud;
    impl HudOverlay for StubHud {
        fn draw_elements(&self, _device: &dyn GraphicsDevice) {}
        fn draw_crosshair(&self, _device: &dyn GraphicsDevice) {}
        fn draw_wielded_tool(&self, _device: &dyn GraphicsDevice) {}
    }
    struct StubShadow;
    impl ShadowPass for StubShadow {
        fn enabled(&self) -> bool {
            false
        }
        fn update(&mut self, _device: &dyn GraphicsDevice) -> Result<(), RenderError> {
            Ok(())
        }
    }

    #[test]
    fn test_bind_prepares_buffer_at_frame_size_and_color() {
        let buffer = StubBuffer::new();
        let mut output = TextureBufferOutput::new(Arc::clone(&buffer) as Arc<dyn OffscreenBuffer>, 0);

        let device = StubDevice;
        let client = StubClient;
        let hud = StubHud;
        let mut shadow = StubShadow;
        let context = PipelineContext {
            device: &device,
            client: &client,
            hud: &hud,
            shadow: &mut shadow,
            sky_color: LinearRgba::WHITE,
            screen_size: Extent2D::new(16, 9),
            show_hud: false,
            draw_wield_tool: false,
            draw_crosshair: false,
        };
        output.bind(&context).unwrap();
        assert_eq!(
            *buffer.prepared.lock().unwrap(),
            Some((Extent2D::new(16, 9), LinearRgba::WHITE))
        );
        output.present().unwrap();
    }

    #[test]
    fn test_read_back_goes_to_the_bound_slot() {
        let buffer = StubBuffer::new();
        let output = TextureBufferOutput::new(Arc::clone(&buffer) as Arc<dyn OffscreenBuffer>, 2);
        assert_eq!(output.slot(), 2);
        let raw = output.read_back().unwrap();
        assert_eq!(raw.size(), Extent2D::new(1, 1));
        assert_eq!(*buffer.reads.lock().unwrap(), vec![2]);
    }
}
