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

//! Defines texture formats and the raw pixel block produced by readback.

use crate::math::Extent2D;
use crate::renderer::error::CaptureError;

/// The subset of color texture formats an off-screen buffer may use.
///
/// These are the four-byte formats a swapchain or capture attachment is
/// allocated with; which one is native depends on the platform surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit per channel RGBA, linear.
    Rgba8Unorm,
    /// 8-bit per channel RGBA, sRGB-encoded.
    Rgba8UnormSrgb,
    /// 8-bit per channel BGRA, linear.
    Bgra8Unorm,
    /// 8-bit per channel BGRA, sRGB-encoded.
    Bgra8UnormSrgb,
}

impl TextureFormat {
    /// Size of one pixel in bytes.
    pub const fn bytes_per_pixel(&self) -> u32 {
        4
    }

    /// Whether the red and blue channels are stored swapped (BGRA order).
    pub const fn is_bgra(&self) -> bool {
        matches!(self, TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb)
    }

    /// Whether the channel values are sRGB-encoded.
    pub const fn is_srgb(&self) -> bool {
        matches!(
            self,
            TextureFormat::Rgba8UnormSrgb | TextureFormat::Bgra8UnormSrgb
        )
    }
}

/// An owned, tightly-packed block of pixels read back from a texture.
///
/// This is the host-side view of a framebuffer after a run completes:
/// the texture's native format, the real screen size, and one row after
/// another with no padding between rows.
#[derive(Debug, Clone)]
pub struct RawImage {
    format: TextureFormat,
    size: Extent2D,
    data: Vec<u8>,
}

impl RawImage {
    /// Wraps a pixel block, validating that `data` matches the declared
    /// dimensions and format exactly.
    pub fn new(format: TextureFormat, size: Extent2D, data: Vec<u8>) -> Result<Self, CaptureError> {
        if size.is_empty() {
            return Err(CaptureError::ZeroSized(size));
        }
        let expected = size.area() as usize * format.bytes_per_pixel() as usize;
        if data.len() != expected {
            return Err(CaptureError::LayoutMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { format, size, data })
    }

    /// The native format of the source texture.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// The dimensions of the pixel block.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// The tightly-packed pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_image_validates_length() {
        let size = Extent2D::new(2, 2);
        let ok = RawImage::new(TextureFormat::Rgba8Unorm, size, vec![0u8; 16]);
        assert!(ok.is_ok());

        let err = RawImage::new(TextureFormat::Rgba8Unorm, size, vec![0u8; 15]);
        assert!(matches!(
            err,
            Err(CaptureError::LayoutMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_raw_image_rejects_zero_size() {
        let err = RawImage::new(TextureFormat::Bgra8Unorm, Extent2D::new(0, 4), vec![]);
        assert!(matches!(err, Err(CaptureError::ZeroSized(_))));
    }

    #[test]
    fn test_format_queries() {
        assert!(TextureFormat::Bgra8UnormSrgb.is_bgra());
        assert!(TextureFormat::Bgra8UnormSrgb.is_srgb());
        assert!(!TextureFormat::Rgba8Unorm.is_bgra());
        assert!(!TextureFormat::Rgba8Unorm.is_srgb());
        assert_eq!(TextureFormat::Rgba8Unorm.bytes_per_pixel(), 4);
    }
}
