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

use anyhow::{anyhow, Result};
use opsis_core::math::Extent2D;
use opsis_core::renderer::RenderError;
use wgpu::{Adapter, Instance, RequestAdapterOptions};

/// Holds the core WGPU state objects required for rendering.
///
/// The context manages the connection to the graphics API. In windowed
/// operation it owns the surface and its swapchain configuration; in
/// headless operation no surface exists and the configured off-screen
/// extent is authoritative for the screen size.
#[derive(Debug)]
pub struct WgpuGraphicsContext {
    pub surface: Option<wgpu::Surface<'static>>,
    #[allow(dead_code)]
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,

    // Configuration for the surface's swapchain behavior; None when headless.
    pub surface_config: Option<wgpu::SurfaceConfiguration>,
    // Authoritative render extent when no surface exists.
    offscreen_size: Extent2D,

    // Store info for easy access
    pub adapter_name: String,
    pub adapter_backend: wgpu::Backend,
}

impl WgpuGraphicsContext {
    /// Asynchronously initializes the graphics context for a window surface.
    ///
    /// ## Arguments
    /// * `instance` - A reference to the shared `wgpu::Instance`.
    /// * `window` - Anything that converts into a surface target (e.g. a winit window).
    /// * `window_size` - The initial physical size of the window surface.
    pub async fn new(
        instance: &Instance,
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        window_size: Extent2D,
    ) -> Result<Self> {
        log::info!("Initializing WGPU graphics context (windowed)...");

        let surface = instance
            .create_surface(window)
            .map_err(|e| anyhow!("Failed to create surface: {e}"))?;
        log::debug!("WGPU surface created for the window.");

        let adapter = Self::request_adapter(instance, Some(&surface)).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        // --- Configure Surface ---
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: window_size.width.max(1),
            height: window_size.height.max(1),
            present_mode: surface_caps
                .present_modes
                .iter()
                .copied()
                .find(|m| *m == wgpu::PresentMode::Mailbox)
                .unwrap_or(wgpu::PresentMode::Fifo), // Fifo is guaranteed to be supported
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let adapter_info = adapter.get_info();
        Ok(WgpuGraphicsContext {
            surface: Some(surface),
            adapter,
            device,
            queue,
            surface_config: Some(surface_config),
            offscreen_size: window_size,
            adapter_name: adapter_info.name,
            adapter_backend: adapter_info.backend,
        })
    }

    /// Asynchronously initializes a headless graphics context.
    ///
    /// No surface is created; every frame renders into off-screen
    /// attachments sized to `offscreen_size`.
    pub async fn new_headless(instance: &Instance, offscreen_size: Extent2D) -> Result<Self> {
        log::info!(
            "Initializing WGPU graphics context (headless, {}x{})...",
            offscreen_size.width,
            offscreen_size.height
        );

        let adapter = Self::request_adapter(instance, None).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let adapter_info = adapter.get_info();
        Ok(WgpuGraphicsContext {
            surface: None,
            adapter,
            device,
            queue,
            surface_config: None,
            offscreen_size,
            adapter_name: adapter_info.name,
            adapter_backend: adapter_info.backend,
        })
    }

    async fn request_adapter(
        instance: &Instance,
        compatible_surface: Option<&wgpu::Surface<'static>>,
    ) -> Result<Adapter> {
        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find a suitable graphics adapter: {e}"))?;

        let info = adapter.get_info();
        log::info!(
            "Using graphics adapter: \"{}\" (Backend: {:?})",
            info.name,
            info.backend
        );
        Ok(adapter)
    }

    async fn request_device(adapter: &Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Opsis Logical Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::default(),
            })
            .await
            .map_err(|e| anyhow!("Failed to create logical device: {e}"))?;
        log::info!("Logical device and command queue created.");

        device.on_uncaptured_error(Box::new(|e| {
            log::error!("WGPU Uncaptured Error: {e:?}");
        }));

        Ok((device, queue))
    }

    /// Reconfigures the surface (swapchain) when the window is resized.
    /// In headless operation this updates the off-screen extent instead.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            log::warn!(
                "WgpuGraphicsContext: Ignoring resize request to zero dimensions: {new_width}x{new_height}"
            );
            return;
        }
        self.offscreen_size = Extent2D::new(new_width, new_height);
        if let (Some(surface), Some(config)) = (&self.surface, &mut self.surface_config) {
            log::info!(
                "WgpuGraphicsContext: Resizing surface configuration to {new_width}x{new_height}"
            );
            config.width = new_width;
            config.height = new_height;
            surface.configure(&self.device, config);
        }
    }

    /// Whether this context operates without a visible display surface.
    pub fn is_headless(&self) -> bool {
        self.surface.is_none()
    }

    /// Current screen size: the surface configuration when windowed,
    /// the configured off-screen extent when headless.
    pub fn screen_size(&self) -> Extent2D {
        match &self.surface_config {
            Some(config) => Extent2D::new(config.width, config.height),
            None => self.offscreen_size,
        }
    }

    /// Acquires the current surface texture for rendering.
    pub fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, RenderError> {
        let surface = self.surface.as_ref().ok_or_else(|| {
            RenderError::SurfaceAcquisitionFailed(
                "no display surface exists in headless operation".to_string(),
            )
        })?;
        surface
            .get_current_texture()
            .map_err(|e| RenderError::SurfaceAcquisitionFailed(format!("{e}")))
    }
}
