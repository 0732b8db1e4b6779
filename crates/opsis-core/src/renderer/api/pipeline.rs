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

//! Defines the render pipeline: an ordered sequence of steps executed
//! against a shared per-frame context.

use crate::renderer::api::context::PipelineContext;
use crate::renderer::api::target::RenderTarget;
use crate::renderer::error::RenderError;
use crate::renderer::traits::PipelineStep;

/// An ordered sequence of render steps with one installed output target.
///
/// The pipeline owns its steps; execution order is the order they were
/// added and is the pipeline's own responsibility, opaque to whoever
/// drives it. Within one frame, `reset` must be called before `run`.
#[derive(Default)]
pub struct RenderPipeline {
    steps: Vec<Box<dyn PipelineStep>>,
    target: Option<Box<dyn RenderTarget>>,
}

impl RenderPipeline {
    /// Creates an empty pipeline with no installed target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step; steps run in insertion order.
    pub fn add_step(&mut self, step: Box<dyn PipelineStep>) {
        log::debug!("RenderPipeline: adding step '{}'", step.name());
        self.steps.push(step);
    }

    /// Installs the output target for subsequent runs, replacing any
    /// previously installed one.
    pub fn set_render_target(&mut self, target: Box<dyn RenderTarget>) {
        self.target = Some(target);
    }

    /// Uninstalls and returns the current output target, if any.
    pub fn clear_render_target(&mut self) -> Option<Box<dyn RenderTarget>> {
        self.target.take()
    }

    /// Whether a target is currently installed.
    pub fn has_render_target(&self) -> bool {
        self.target.is_some()
    }

    /// Number of configured steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Clears per-frame accumulated state in every step.
    pub fn reset(&mut self, context: &PipelineContext<'_>) {
        for step in &mut self.steps {
            step.reset(context);
        }
    }

    /// Binds the installed target, executes each step in order, then
    /// presents the target.
    pub fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
        let target = self.target.as_mut().ok_or(RenderError::NoRenderTarget)?;
        target.bind(&*context)?;
        for step in &mut self.steps {
            log::trace!("RenderPipeline: running step '{}'", step.name());
            step.run(context)?;
        }
        target.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Extent2D, LinearRgba};
    use crate::renderer::error::CaptureError;
    use crate::renderer::traits::{ClientHandle, GraphicsDevice, HudOverlay, ShadowPass};
    use std::sync::{Arc, Mutex};

    type EventLog = Arc<Mutex<Vec<String>>>;

    struct NullDevice;
    impl GraphicsDevice for NullDevice {
        fn screen_size(&self) -> Extent2D {
            Extent2D::new(64, 48)
        }
        fn adapter_name(&self) -> String {
            "null".into()
        }
    }

    struct NullClient;
    impl ClientHandle for NullClient {
        fn is_headless(&self) -> bool {
            false
        }
        fn draw_world(&self, _device: &dyn GraphicsDevice) -> Result<(), RenderError> {
            Ok(())
        }
    }

    struct NullHud;
    impl HudOverlay for NullHud {
        fn draw_elements(&self, _device: &dyn GraphicsDevice) {}
        fn draw_crosshair(&self, _device: &dyn GraphicsDevice) {}
        fn draw_wielded_tool(&self, _device: &dyn GraphicsDevice) {}
    }

    struct NullShadow;
    impl ShadowPass for NullShadow {
        fn enabled(&self) -> bool {
            false
        }
        fn update(&mut self, _device: &dyn GraphicsDevice) -> Result<(), RenderError> {
            Ok(())
        }
    }

    struct RecordingStep {
        name: &'static str,
        log: EventLog,
    }
    impl PipelineStep for RecordingStep {
        fn name(&self) -> &'static str {
            self.name
        }
        fn reset(&mut self, _context: &PipelineContext<'_>) {
            self.log.lock().unwrap().push(format!("reset:{}", self.name));
        }
        fn run(&mut self, _context: &mut PipelineContext<'_>) -> Result<(), RenderError> {
            self.log.lock().unwrap().push(format!("run:{}", self.name));
            Ok(())
        }
    }

    struct RecordingTarget {
        log: EventLog,
    }
    impl RenderTarget for RecordingTarget {
        fn bind(&mut self, _context: &PipelineContext<'_>) -> Result<(), RenderError> {
            self.log.lock().unwrap().push("bind".into());
            Ok(())
        }
        fn present(&mut self) -> Result<(), RenderError> {
            self.log.lock().unwrap().push("present".into());
            Ok(())
        }
    }

    fn with_context<R>(f: impl FnOnce(&mut PipelineContext<'_>) -> R) -> R {
        let device = NullDevice;
        let client = NullClient;
        let hud = NullHud;
        let mut shadow = NullShadow;
        let mut context = PipelineContext {
            device: &device,
            client: &client,
            hud: &hud,
            shadow: &mut shadow,
            sky_color: LinearRgba::BLACK,
            screen_size: Extent2D::new(64, 48),
            show_hud: true,
            draw_wield_tool: true,
            draw_crosshair: true,
        };
        f(&mut context)
    }

    #[test]
    fn test_run_without_target_fails() {
        let mut pipeline = RenderPipeline::new();
        with_context(|context| {
            assert!(matches!(
                pipeline.run(context),
                Err(RenderError::NoRenderTarget)
            ));
        });
    }

    #[test]
    fn test_steps_run_in_insertion_order_between_bind_and_present() {
        let log: EventLog = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = RenderPipeline::new();
        for name in ["first", "second", "third"] {
            pipeline.add_step(Box::new(RecordingStep {
                name,
                log: Arc::clone(&log),
            }));
        }
        pipeline.set_render_target(Box::new(RecordingTarget {
            log: Arc::clone(&log),
        }));

        with_context(|context| {
            pipeline.reset(&*context);
            pipeline.run(context).unwrap();
        });

        let events = log.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "reset:first",
                "reset:second",
                "reset:third",
                "bind",
                "run:first",
                "run:second",
                "run:third",
                "present",
            ]
        );
    }

    #[test]
    fn test_clear_render_target_returns_installed_target() {
        let log: EventLog = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = RenderPipeline::new();
        assert!(pipeline.clear_render_target().is_none());
        pipeline.set_render_target(Box::new(RecordingTarget { log }));
        assert!(pipeline.has_render_target());
        assert!(pipeline.clear_render_target().is_some());
        assert!(!pipeline.has_render_target());
    }

    #[test]
    fn test_default_read_back_is_unsupported() {
        let log: EventLog = Arc::new(Mutex::new(Vec::new()));
        let target = RecordingTarget { log };
        assert!(matches!(
            target.read_back(),
            Err(RenderError::Capture(CaptureError::Unsupported))
        ));
    }
}
