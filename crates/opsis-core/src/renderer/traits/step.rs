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

use crate::renderer::api::context::PipelineContext;
use crate::renderer::error::RenderError;

/// A unit of work executed by the pipeline once per frame.
///
/// Steps are supplied by the consumer when the pipeline is assembled
/// and run in that order against the shared context.
pub trait PipelineStep: Send {
    /// Short stable name, used for tracing.
    fn name(&self) -> &'static str;

    /// Clears any per-frame accumulated state. Called once per frame
    /// before [`PipelineStep::run`]; stateless steps keep the default.
    fn reset(&mut self, _context: &PipelineContext<'_>) {}

    /// Executes the step against the bound render target.
    fn run(&mut self, context: &mut PipelineContext<'_>) -> Result<(), RenderError>;
}
