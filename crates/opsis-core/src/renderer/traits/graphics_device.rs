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

use crate::math::Extent2D;

/// Trait representing the graphics device a frame is rendered with.
///
/// The device is owned by the embedding application for the process
/// lifetime; consumers hold a shared handle and never assume a lifetime
/// beyond what the owner guarantees. In windowed operation the screen
/// size tracks the surface; in headless operation it is the off-screen
/// extent the backend was configured with.
pub trait GraphicsDevice: Send + Sync {
    /// Current real screen size in physical pixels.
    fn screen_size(&self) -> Extent2D;

    /// Human-readable adapter identification, for logs.
    fn adapter_name(&self) -> String;
}
