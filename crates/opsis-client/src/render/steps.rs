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

//! The default pipeline steps.
//!
//! Each step delegates to a collaborator from the per-frame context;
//! the scene and HUD internals stay with the client.

use opsis_core::renderer::{PipelineContext, PipelineStep, RenderError};

/// Updates the shadow-map data before the world is drawn.
pub struct RenderShadowMap;

impl PipelineStep for RenderShadowMap {
    fn name(&self) -> &'static str {
        "shadow-map"
    }

    fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
        let PipelineContext { device, shadow, .. } = context;
        if shadow.enabled() {
            shadow.update(*device)?;
        }
        Ok(())
    }
}

/// Draws the 3D world.
pub struct Draw3d;

impl PipelineStep for Draw3d {
    fn name(&self) -> &'static str {
        "draw-3d"
    }

    fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
        context.client.draw_world(context.device)
    }
}

/// Draws the wielded tool when the frame requests it.
pub struct DrawWield;

impl PipelineStep for DrawWield {
    fn name(&self) -> &'static str {
        "draw-wield"
    }

    fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
        if context.draw_wield_tool {
            context.hud.draw_wielded_tool(context.device);
        }
        Ok(())
    }
}

/// Draws the crosshair and HUD elements when the frame requests them.
pub struct DrawHud;

impl PipelineStep for DrawHud {
    fn name(&self) -> &'static str {
        "draw-hud"
    }

    fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
        if context.show_hud {
            if context.draw_crosshair {
                context.hud.draw_crosshair(context.device);
            }
            context.hud.draw_elements(context.device);
        }
        Ok(())
    }
}
