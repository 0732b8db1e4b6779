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

//! The retained off-screen texture buffer and its synchronous readback.

use std::sync::Mutex;

use opsis_core::math::{Extent2D, LinearRgba};
use opsis_core::renderer::{
    CaptureError, OffscreenBuffer, RawImage, RenderError, ResourceError, TextureFormat,
};

use super::device::WgpuDevice;

/// One allocated color slot.
struct SlotTexture {
    texture: wgpu::Texture,
    size: Extent2D,
}

/// A retained set of off-screen color attachments with indexed slots.
///
/// Slot textures are allocated lazily and only reallocated when the
/// requested extent changes, so a capture every frame reuses the same
/// GPU storage. Readback copies through a staging buffer and strips the
/// driver-mandated 256-byte row alignment into a tight pixel block.
pub struct WgpuTextureBuffer {
    device: WgpuDevice,
    label: String,
    format: wgpu::TextureFormat,
    slots: Mutex<Vec<Option<SlotTexture>>>,
}

impl WgpuTextureBuffer {
    /// Default color format for off-screen attachments.
    pub const DEFAULT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Creates a buffer with `slot_count` empty slots in the default format.
    pub fn new(device: WgpuDevice, label: impl Into<String>, slot_count: u32) -> Self {
        Self::with_format(device, label, slot_count, Self::DEFAULT_FORMAT)
    }

    /// Creates a buffer with an explicit attachment format.
    pub fn with_format(
        device: WgpuDevice,
        label: impl Into<String>,
        slot_count: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let mut slots = Vec::with_capacity(slot_count as usize);
        slots.resize_with(slot_count as usize, || None);
        Self {
            device,
            label: label.into(),
            format,
            slots: Mutex::new(slots),
        }
    }

    /// Returns a handle to the texture at `slot`, if allocated.
    pub fn texture(&self, slot: u32) -> Option<wgpu::Texture> {
        let slots = self.slots.lock().unwrap();
        slots
            .get(slot as usize)
            .and_then(|s| s.as_ref())
            .map(|s| s.texture.clone())
    }

    fn create_slot_texture(&self, slot: usize, size: Extent2D) -> wgpu::Texture {
        log::debug!(
            "WgpuTextureBuffer '{}': allocating slot {} at {}x{} ({:?})",
            self.label,
            slot,
            size.width,
            size.height,
            self.format
        );
        self.device.raw_device().create_texture(&wgpu::TextureDescriptor {
            label: Some(&format!("{}-slot-{}", self.label, slot)),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        })
    }
}

impl OffscreenBuffer for WgpuTextureBuffer {
    fn prepare(&self, size: Extent2D, clear_color: LinearRgba) -> Result<(), RenderError> {
        if size.is_empty() {
            return Err(ResourceError::TextureCreationFailed(format!(
                "off-screen buffer cannot be sized to {}x{}",
                size.width, size.height
            ))
            .into());
        }

        let mut slots = self.slots.lock().unwrap();
        for (index, slot) in slots.iter_mut().enumerate() {
            let needs_alloc = match slot {
                Some(existing) => existing.size != size,
                None => true,
            };
            if needs_alloc {
                *slot = Some(SlotTexture {
                    texture: self.create_slot_texture(index, size),
                    size,
                });
            }
        }

        // Clear every slot to the frame's sky color in one submission.
        let device = self.device.raw_device();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("opsis-buffer-clear"),
        });
        let clear = wgpu::Color {
            r: clear_color.r as f64,
            g: clear_color.g as f64,
            b: clear_color.b as f64,
            a: clear_color.a as f64,
        };
        for slot in slots.iter().flatten() {
            let view = slot
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("opsis-buffer-clear-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }
        self.device.raw_queue().submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    fn read_texture(&self, slot: u32) -> Result<RawImage, RenderError> {
        let slots = self.slots.lock().unwrap();
        let entry = slots
            .get(slot as usize)
            .and_then(|s| s.as_ref())
            .ok_or(ResourceError::InvalidHandle)?;

        let format = map_texture_format(self.format).ok_or_else(|| {
            CaptureError::FormatUnsupported(format!("{:?}", self.format))
        })?;
        let size = entry.size;

        let tight_bpr = size.width as usize * format.bytes_per_pixel() as usize;
        let padded_bpr = align_bytes_per_row(tight_bpr);
        let staging_size = (padded_bpr * size.height as usize) as wgpu::BufferAddress;

        let device = self.device.raw_device();
        let staging = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("opsis-readback-staging"),
            size: staging_size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("opsis-readback-encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &entry.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &staging,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bpr as u32),
                    rows_per_image: Some(size.height),
                },
            },
            wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
        );
        self.device.raw_queue().submit(std::iter::once(encoder.finish()));

        // Synchronous, bounded-latency wait: map the staging buffer and
        // block until the driver signals completion.
        let (sender, receiver) = std::sync::mpsc::channel();
        let buffer_slice = staging.slice(..);
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        self.device.poll_blocking();

        receiver
            .recv()
            .map_err(|e| ResourceError::BufferMapFailed(format!("map callback lost: {e}")))?
            .map_err(|e| ResourceError::BufferMapFailed(format!("{e:?}")))?;

        let mapped = buffer_slice.get_mapped_range();
        let tight = strip_row_padding(&mapped, tight_bpr, padded_bpr, size.height as usize);
        drop(mapped);
        staging.unmap();

        RawImage::new(format, size, tight).map_err(RenderError::from)
    }
}

/// Aligns a tight row length up to WebGPU's copy row alignment (256 bytes).
pub(crate) fn align_bytes_per_row(tight: usize) -> usize {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize;
    tight.div_ceil(align) * align
}

/// Copies `rows` rows of `tight_bpr` bytes out of a buffer whose rows
/// are `padded_bpr` bytes apart.
pub(crate) fn strip_row_padding(
    padded: &[u8],
    tight_bpr: usize,
    padded_bpr: usize,
    rows: usize,
) -> Vec<u8> {
    let mut tight = vec![0u8; tight_bpr * rows];
    for row in 0..rows {
        let src = row * padded_bpr;
        let dst = row * tight_bpr;
        tight[dst..dst + tight_bpr].copy_from_slice(&padded[src..src + tight_bpr]);
    }
    tight
}

/// Maps a wgpu color format onto the backend-agnostic format enum.
pub(crate) fn map_texture_format(format: wgpu::TextureFormat) -> Option<TextureFormat> {
    match format {
        wgpu::TextureFormat::Rgba8Unorm => Some(TextureFormat::Rgba8Unorm),
        wgpu::TextureFormat::Rgba8UnormSrgb => Some(TextureFormat::Rgba8UnormSrgb),
        wgpu::TextureFormat::Bgra8Unorm => Some(TextureFormat::Bgra8Unorm),
        wgpu::TextureFormat::Bgra8UnormSrgb => Some(TextureFormat::Bgra8UnormSrgb),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_bytes_per_row() {
        assert_eq!(align_bytes_per_row(1), 256);
        assert_eq!(align_bytes_per_row(256), 256);
        assert_eq!(align_bytes_per_row(257), 512);
        // 300px RGBA rows are 1200 bytes, padded to 1280.
        assert_eq!(align_bytes_per_row(1200), 1280);
    }

    #[test]
    fn test_strip_row_padding() {
        // Two rows of three bytes, padded to a stride of five.
        let padded = [1u8, 2, 3, 0xAA, 0xAA, 4, 5, 6, 0xBB, 0xBB];
        let tight = strip_row_padding(&padded, 3, 5, 2);
        assert_eq!(tight, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_strip_row_padding_noop_when_tight() {
        let padded = [7u8, 8, 9, 10];
        assert_eq!(strip_row_padding(&padded, 2, 2, 2), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_map_texture_format() {
        assert_eq!(
            map_texture_format(wgpu::TextureFormat::Bgra8UnormSrgb),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(map_texture_format(wgpu::TextureFormat::Rgba16Float), None);
    }
}
