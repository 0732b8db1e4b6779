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

/// Trait representing the game client whose world is drawn each frame.
///
/// Scene management is the client's own concern; the pipeline only asks
/// it to issue the world draw into whatever target is currently bound.
pub trait ClientHandle: Send + Sync {
    /// Whether the client operates without a visible display surface.
    fn is_headless(&self) -> bool;

    /// Issues the draw calls for the 3D world.
    fn draw_world(&self, device: &dyn GraphicsDevice) -> Result<(), RenderError>;
}

/// Trait representing the HUD overlay drawn on top of the world.
pub trait HudOverlay: Send + Sync {
    /// Draws the HUD elements (hotbar, health, chat, ...).
    fn draw_elements(&self, device: &dyn GraphicsDevice);

    /// Draws the crosshair at the screen center.
    fn draw_crosshair(&self, device: &dyn GraphicsDevice);

    /// Draws the currently wielded tool.
    fn draw_wielded_tool(&self, device: &dyn GraphicsDevice);
}
