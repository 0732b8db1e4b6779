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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the "common language" for driving a frame: the
//! per-frame [`PipelineContext`], the [`RenderPipeline`] and its
//! [`PipelineStep`]s, the [`RenderTarget`] capability interface over
//! on-screen and off-screen output, and the collaborator traits
//! ([`GraphicsDevice`], [`ClientHandle`], [`HudOverlay`], [`ShadowPass`],
//! [`OffscreenBuffer`]) that the graphics backend and the embedding
//! client implement. The 'how' lives in the `opsis-infra` crate, which
//! implements these traits over wgpu.

pub mod api;
pub mod error;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::context::PipelineContext;
pub use self::api::pipeline::RenderPipeline;
pub use self::api::target::{RenderTarget, TextureBufferOutput};
pub use self::api::texture::{RawImage, TextureFormat};
pub use self::error::{CaptureError, RenderError, ResourceError};
pub use self::traits::{
    ClientHandle, GraphicsDevice, HudOverlay, OffscreenBuffer, PipelineStep, ShadowPass,
};
