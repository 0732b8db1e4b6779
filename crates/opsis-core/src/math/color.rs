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

//! Defines the `LinearRgba` color type and associated operations.

/// Converts a single sRGB-encoded channel value to linear space.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a single linear channel value to sRGB encoding.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// Using a linear color space is crucial for correct lighting, shading,
/// and blending. `#[repr(C)]` ensures a consistent memory layout when
/// passing color data to graphics APIs.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a `LinearRgba` from 8-bit sRGB components (opaque).
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
        )
    }

    /// Converts the color to packed 8-bit sRGB components, discarding alpha.
    pub fn to_srgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl Default for LinearRgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_srgb_linear_round_trip() {
        for c in [0.0, 0.02, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(linear_to_srgb(srgb_to_linear(c)), c));
        }
    }

    #[test]
    fn test_from_srgb8_to_srgb8_round_trip() {
        let color = LinearRgba::from_srgb8(0x87, 0xCE, 0xEB);
        assert_eq!(color.to_srgb8(), [0x87, 0xCE, 0xEB]);
    }

    #[test]
    fn test_to_srgb8_clamps_out_of_range() {
        let hdr = LinearRgba::rgb(2.0, -0.5, 1.0);
        assert_eq!(hdr.to_srgb8(), [255, 0, 255]);
    }
}
