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

//! Assembly of the default pipeline and the rendering core.

use std::sync::Arc;

use opsis_core::renderer::{
    ClientHandle, GraphicsDevice, HudOverlay, OffscreenBuffer, RenderPipeline, RenderTarget,
    ShadowPass,
};

use crate::config::RenderConfig;
use crate::render::core::RenderingCore;
use crate::render::steps::{Draw3d, DrawHud, DrawWield, RenderShadowMap};

/// Builds the default step sequence: shadow map (when enabled), world,
/// wielded tool, HUD.
pub fn build_pipeline(config: &RenderConfig) -> RenderPipeline {
    let mut pipeline = RenderPipeline::new();
    if config.enable_shadows {
        pipeline.add_step(Box::new(RenderShadowMap));
    }
    pipeline.add_step(Box::new(Draw3d));
    pipeline.add_step(Box::new(DrawWield));
    pipeline.add_step(Box::new(DrawHud));
    pipeline
}

/// Assembles a rendering core with the default pipeline.
///
/// `screen_target` is installed as the pipeline's output for live
/// operation; headless frames temporarily swap in the capture buffer
/// and restore it afterwards.
#[allow(clippy::too_many_arguments)]
pub fn create_core(
    device: Arc<dyn GraphicsDevice>,
    client: Arc<dyn ClientHandle>,
    hud: Arc<dyn HudOverlay>,
    shadow: Box<dyn ShadowPass>,
    capture_buffer: Arc<dyn OffscreenBuffer>,
    screen_target: Box<dyn RenderTarget>,
    config: &RenderConfig,
) -> RenderingCore {
    let mut pipeline = build_pipeline(config);
    pipeline.set_render_target(screen_target);
    RenderingCore::new(
        device,
        client,
        hud,
        pipeline,
        shadow,
        capture_buffer,
        config.scale(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_has_all_steps() {
        let pipeline = build_pipeline(&RenderConfig::default());
        assert_eq!(pipeline.step_count(), 4);
        assert!(!pipeline.has_render_target());
    }

    #[test]
    fn test_shadowless_pipeline_drops_the_shadow_step() {
        let config = RenderConfig {
            enable_shadows: false,
            ..RenderConfig::default()
        };
        assert_eq!(build_pipeline(&config).step_count(), 3);
    }
}
