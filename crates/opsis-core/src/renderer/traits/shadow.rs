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

use crate::renderer::error::RenderError;
use crate::renderer::traits::GraphicsDevice;

/// Trait representing the shadow-map producer.
///
/// The concrete shadow-mapping algorithm is opaque to the orchestration
/// layer: the rendering core owns the pass for its whole lifetime and
/// passes a reference along in the per-frame context, and a dedicated
/// pipeline step asks it to update. Later steps consume whatever shadow
/// data the update produced.
pub trait ShadowPass: Send {
    /// Whether shadow mapping is active. A disabled pass is skipped by
    /// the shadow step but stays owned by the core.
    fn enabled(&self) -> bool;

    /// Recomputes the shadow data for the current frame.
    fn update(&mut self, device: &dyn GraphicsDevice) -> Result<(), RenderError>;
}
