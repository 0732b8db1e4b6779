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

//! The per-frame rendering core.

use std::sync::Arc;

use image::RgbImage;
use opsis_core::math::{Extent2D, LinearRgba, Vec2};
use opsis_core::renderer::{
    ClientHandle, GraphicsDevice, HudOverlay, OffscreenBuffer, PipelineContext, RenderError,
    RenderPipeline, ShadowPass, TextureBufferOutput,
};

use crate::render::capture;

/// Texture slot of the capture buffer the pipeline renders into when
/// operating headless.
const CAPTURE_SLOT: u32 = 0;

/// Owns the render pipeline and shadow pass and drives them once per
/// frame.
///
/// The core builds a fresh [`PipelineContext`] for every draw, selects
/// between the live display surface and the retained off-screen capture
/// buffer, and, in headless operation, keeps the most recent frame
/// available as an 8-bit RGB still image.
///
/// `draw` is invoked once per frame from the single rendering thread;
/// the core is not reentrant and needs no internal locking.
pub struct RenderingCore {
    device: Arc<dyn GraphicsDevice>,
    client: Arc<dyn ClientHandle>,
    hud: Arc<dyn HudOverlay>,
    // Declaration order is load-bearing: the pipeline drops before the
    // shadow pass, because steps may hold handles into shadow state
    // that must stay valid until the pipeline itself is gone.
    pipeline: RenderPipeline,
    shadow: Box<dyn ShadowPass>,
    capture_buffer: Arc<dyn OffscreenBuffer>,
    virtual_size_scale: Vec2,
    virtual_size: Extent2D,
    screenshot: Option<RgbImage>,
}

impl RenderingCore {
    /// Creates the core over its collaborators.
    ///
    /// The pipeline and shadow pass are owned exclusively for the
    /// core's whole lifetime; device, client, and HUD are shared
    /// handles into state owned by the application.
    pub fn new(
        device: Arc<dyn GraphicsDevice>,
        client: Arc<dyn ClientHandle>,
        hud: Arc<dyn HudOverlay>,
        pipeline: RenderPipeline,
        shadow: Box<dyn ShadowPass>,
        capture_buffer: Arc<dyn OffscreenBuffer>,
        virtual_size_scale: Vec2,
    ) -> Self {
        log::info!(
            "RenderingCore created on adapter \"{}\" ({} pipeline steps, headless: {})",
            device.adapter_name(),
            pipeline.step_count(),
            client.is_headless()
        );
        Self {
            device,
            client,
            hud,
            pipeline,
            shadow,
            capture_buffer,
            virtual_size_scale,
            virtual_size: Extent2D::default(),
            screenshot: None,
        }
    }

    /// Draws one frame.
    ///
    /// Recomputes the virtual size from the current screen size, builds
    /// the per-frame context, and runs the pipeline: against the live
    /// surface, or against the capture buffer when the client operates
    /// headless, in which case the finished frame replaces the retained
    /// screenshot.
    ///
    /// Resource failures from the graphics layer propagate unchanged; a
    /// half-configured pipeline cannot safely render a subsequent
    /// frame, so callers must treat an error as unrecoverable.
    pub fn draw(
        &mut self,
        sky_color: LinearRgba,
        show_hud: bool,
        draw_wield_tool: bool,
        draw_crosshair: bool,
    ) -> Result<(), RenderError> {
        let screen_size = self.device.screen_size();
        self.virtual_size = screen_size.scaled_floor(self.virtual_size_scale);

        let Self {
            device,
            client,
            hud,
            pipeline,
            shadow,
            capture_buffer,
            screenshot,
            ..
        } = self;

        let mut context = PipelineContext {
            device: device.as_ref(),
            client: client.as_ref(),
            hud: hud.as_ref(),
            shadow: shadow.as_mut(),
            sky_color,
            screen_size,
            show_hud,
            draw_wield_tool,
            draw_crosshair,
        };

        if context.client.is_headless() {
            // Temporarily redirect the pipeline into the retained
            // capture buffer for this frame.
            let previous = pipeline.clear_render_target();
            pipeline.set_render_target(Box::new(TextureBufferOutput::new(
                Arc::clone(capture_buffer),
                CAPTURE_SLOT,
            )));
            pipeline.reset(&context);
            pipeline.run(&mut context)?;

            // Uninstall the temporary wrapper and read the finished
            // frame back through it.
            let target = pipeline
                .clear_render_target()
                .ok_or(RenderError::NoRenderTarget)?;
            let raw = target.read_back()?;
            let image = capture::raw_to_rgb8(&raw)?;
            log::trace!(
                "RenderingCore: captured {}x{} frame",
                image.width(),
                image.height()
            );
            // Replacing the option releases the previous capture.
            *screenshot = Some(image);

            // The wrapper dies with this frame; restore the prior output.
            drop(target);
            if let Some(previous) = previous {
                pipeline.set_render_target(previous);
            }
        } else {
            pipeline.reset(&context);
            pipeline.run(&mut context)?;
        }
        Ok(())
    }

    /// Logical render size: the screen size scaled by the configured
    /// factor, floored component-wise. Recomputed by every draw.
    pub fn virtual_size(&self) -> Extent2D {
        self.virtual_size
    }

    /// Returns an independently-owned copy of the most recent headless
    /// capture, or `None` if no frame has been captured yet.
    ///
    /// The retained copy is unaffected and stays valid until the next
    /// headless frame overwrites it; live frames never touch it.
    pub fn screenshot(&self) -> Option<RgbImage> {
        self.screenshot.clone()
    }
}
