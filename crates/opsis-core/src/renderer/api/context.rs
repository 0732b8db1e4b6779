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

//! Defines the per-frame context shared by every pipeline step.

use crate::math::{Extent2D, LinearRgba};
use crate::renderer::traits::{ClientHandle, GraphicsDevice, HudOverlay, ShadowPass};

/// Everything a pipeline step needs for the current frame.
///
/// The context is built fresh at the top of each draw call and lives on
/// the stack for exactly that frame; the borrowed collaborators are
/// owned elsewhere and remain valid for the whole frame. It is never
/// persisted by the rendering core or by steps.
pub struct PipelineContext<'a> {
    /// The graphics device the frame is rendered with.
    pub device: &'a dyn GraphicsDevice,
    /// The client whose world is being drawn.
    pub client: &'a dyn ClientHandle,
    /// The HUD overlay collaborator.
    pub hud: &'a dyn HudOverlay,
    /// The shadow-map producer; steps may update it, the core itself
    /// only passes the reference along.
    pub shadow: &'a mut dyn ShadowPass,
    /// Color the output is cleared to before the steps run.
    pub sky_color: LinearRgba,
    /// Real screen size at the start of the frame.
    pub screen_size: Extent2D,
    /// Whether HUD elements are drawn this frame.
    pub show_hud: bool,
    /// Whether the wielded tool is drawn this frame.
    pub draw_wield_tool: bool,
    /// Whether the crosshair is drawn this frame.
    pub draw_crosshair: bool,
}
