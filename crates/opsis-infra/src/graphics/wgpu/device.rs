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

use std::sync::{Arc, Mutex};

use opsis_core::math::Extent2D;
use opsis_core::renderer::{GraphicsDevice, RenderError};

use super::context::WgpuGraphicsContext;

/// Shared internal state of the device handle.
struct WgpuDeviceInternal {
    context: Mutex<WgpuGraphicsContext>,
}

/// A clonable, thread-safe handle to the WGPU graphics device.
///
/// This wraps the graphics context in shared ownership so the
/// rendering core, render targets, and off-screen buffers can all hold
/// the same device without lifetime coupling.
#[derive(Clone)]
pub struct WgpuDevice {
    internal: Arc<WgpuDeviceInternal>,
}

impl WgpuDevice {
    /// Wraps an initialized graphics context into a shared handle.
    pub fn new(context: WgpuGraphicsContext) -> Self {
        log::debug!(
            "WgpuDevice created over adapter \"{}\" ({:?})",
            context.adapter_name,
            context.adapter_backend
        );
        Self {
            internal: Arc::new(WgpuDeviceInternal {
                context: Mutex::new(context),
            }),
        }
    }

    /// Creates a headless device synchronously.
    ///
    /// Convenience for clients booting without a window: spins up an
    /// instance, selects an adapter, and blocks on device creation.
    pub fn new_headless(offscreen_size: Extent2D) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let context =
            pollster::block_on(WgpuGraphicsContext::new_headless(&instance, offscreen_size))?;
        Ok(Self::new(context))
    }

    /// Runs `f` with shared access to the graphics context.
    pub fn with_context<R>(&self, f: impl FnOnce(&WgpuGraphicsContext) -> R) -> R {
        let guard = self.internal.context.lock().unwrap();
        f(&guard)
    }

    /// Runs `f` with exclusive access to the graphics context.
    pub fn with_context_mut<R>(&self, f: impl FnOnce(&mut WgpuGraphicsContext) -> R) -> R {
        let mut guard = self.internal.context.lock().unwrap();
        f(&mut guard)
    }

    /// Returns a clone of the raw `wgpu::Device` handle.
    pub fn raw_device(&self) -> wgpu::Device {
        self.with_context(|c| c.device.clone())
    }

    /// Returns a clone of the raw `wgpu::Queue` handle.
    pub fn raw_queue(&self) -> wgpu::Queue {
        self.with_context(|c| c.queue.clone())
    }

    /// Reconfigures the output extent (and surface, when one exists).
    pub fn resize(&self, new_width: u32, new_height: u32) {
        self.with_context_mut(|c| c.resize(new_width, new_height));
    }

    /// Acquires the current surface texture for on-screen rendering.
    pub fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, RenderError> {
        self.with_context(|c| c.acquire_frame())
    }

    /// Polls the underlying `wgpu::Device` in a blocking manner.
    ///
    /// Used by synchronous readback to wait for pending `map_async`
    /// callbacks; also called at teardown so no mapped buffer is
    /// dropped mid-flight.
    pub fn poll_blocking(&self) {
        let guard = self.internal.context.lock().unwrap();
        if let Err(e) = guard.device.poll(wgpu::PollType::Wait) {
            log::warn!("Failed to poll device: {e:?}");
        }
    }
}

impl GraphicsDevice for WgpuDevice {
    fn screen_size(&self) -> Extent2D {
        self.with_context(|c| c.screen_size())
    }

    fn adapter_name(&self) -> String {
        self.with_context(|c| c.adapter_name.clone())
    }
}
