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

use crate::math::{Extent2D, LinearRgba};
use crate::renderer::api::texture::RawImage;
use crate::renderer::error::RenderError;

/// A retained off-screen color buffer with indexed texture slots.
///
/// The buffer outlives individual frames so its GPU storage is not
/// reallocated every capture; a [`TextureBufferOutput`] wrapper binds
/// it to the pipeline for the duration of one frame. Implementations
/// use interior mutability so a shared handle suffices.
///
/// [`TextureBufferOutput`]: crate::renderer::api::target::TextureBufferOutput
pub trait OffscreenBuffer: Send + Sync {
    /// Ensures the backing storage matches `size`, (re)allocating on
    /// change, and clears every slot to `clear_color`.
    fn prepare(&self, size: Extent2D, clear_color: LinearRgba) -> Result<(), RenderError>;

    /// Reads the texture at `slot` back into a tightly-packed image in
    /// the texture's native format. Only meaningful after a run has
    /// completed against this buffer.
    fn read_texture(&self, slot: u32) -> Result<RawImage, RenderError>;
}
