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

//! Conversion of raw framebuffer readback into the fixed capture format.

use image::RgbImage;
use opsis_core::renderer::{CaptureError, RawImage};

/// Copy-converts a raw readback block into the fixed 8-bit RGB capture
/// format, whatever the source texture's native channel order.
///
/// Channel bytes pass through unchanged (only the order changes and
/// alpha is dropped), so an sRGB-encoded source stays display-referred
/// in the output.
pub fn raw_to_rgb8(raw: &RawImage) -> Result<RgbImage, CaptureError> {
    let size = raw.size();
    let bpp = raw.format().bytes_per_pixel() as usize;
    // Red and blue positions inside one source pixel.
    let (red, blue) = if raw.format().is_bgra() { (2, 0) } else { (0, 2) };

    let mut rgb = Vec::with_capacity(size.area() as usize * 3);
    for pixel in raw.data().chunks_exact(bpp) {
        rgb.push(pixel[red]);
        rgb.push(pixel[1]);
        rgb.push(pixel[blue]);
    }

    RgbImage::from_raw(size.width, size.height, rgb).ok_or(CaptureError::LayoutMismatch {
        expected: size.area() as usize * 3,
        actual: raw.data().len() / bpp * 3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsis_core::math::Extent2D;
    use opsis_core::renderer::TextureFormat;

    #[test]
    fn test_bgra_source_is_swizzled() {
        let raw = RawImage::new(
            TextureFormat::Bgra8UnormSrgb,
            Extent2D::new(2, 1),
            vec![
                0x01, 0x02, 0x03, 0xFF, // pixel 0: B G R A
                0x04, 0x05, 0x06, 0x80, // pixel 1
            ],
        )
        .unwrap();
        let rgb = raw_to_rgb8(&raw).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [0x03, 0x02, 0x01]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0x06, 0x05, 0x04]);
    }

    #[test]
    fn test_rgba_source_keeps_channel_order() {
        let raw = RawImage::new(
            TextureFormat::Rgba8Unorm,
            Extent2D::new(1, 2),
            vec![
                0x10, 0x20, 0x30, 0xFF, // row 0
                0x40, 0x50, 0x60, 0x00, // row 1, alpha dropped
            ],
        )
        .unwrap();
        let rgb = raw_to_rgb8(&raw).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [0x10, 0x20, 0x30]);
        assert_eq!(rgb.get_pixel(0, 1).0, [0x40, 0x50, 0x60]);
    }

    #[test]
    fn test_dimensions_match_source() {
        let size = Extent2D::new(7, 5);
        let raw = RawImage::new(
            TextureFormat::Rgba8UnormSrgb,
            size,
            vec![0xAB; size.area() as usize * 4],
        )
        .unwrap();
        let rgb = raw_to_rgb8(&raw).unwrap();
        assert_eq!((rgb.width(), rgb.height()), (7, 5));
    }
}
