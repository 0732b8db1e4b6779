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

//! Defines the hierarchy of error types for the rendering subsystem.
//!
//! Driver and resource failures are fatal to the frame and propagate
//! unchanged; there is no retry logic anywhere in this layer. A missing
//! screenshot is not an error and is represented as `None` by the
//! accessor that owns it.

use crate::math::Extent2D;
use std::fmt;

/// An error related to the creation or use of a GPU resource.
#[derive(Debug)]
pub enum ResourceError {
    /// A texture could not be created by the graphics backend.
    TextureCreationFailed(String),
    /// A staging buffer could not be mapped for host access.
    BufferMapFailed(String),
    /// The handle or index used to reference a resource is invalid.
    InvalidHandle,
    /// An error originating from the specific graphics backend implementation.
    BackendError(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::TextureCreationFailed(msg) => {
                write!(f, "Texture creation failed: {msg}")
            }
            ResourceError::BufferMapFailed(msg) => {
                write!(f, "Staging buffer map failed: {msg}")
            }
            ResourceError::InvalidHandle => write!(f, "Invalid resource handle or index."),
            ResourceError::BackendError(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// An error related to capturing the framebuffer into a still image.
#[derive(Debug)]
pub enum CaptureError {
    /// The installed render target has no readable backing storage.
    Unsupported,
    /// The source texture format cannot be converted to the capture format.
    FormatUnsupported(String),
    /// The pixel data length does not match the declared dimensions.
    LayoutMismatch {
        /// Number of bytes the dimensions and format require.
        expected: usize,
        /// Number of bytes actually present.
        actual: usize,
    },
    /// A capture of a zero-sized surface was requested.
    ZeroSized(Extent2D),
    /// The readback from the off-screen buffer failed.
    ReadbackFailed(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unsupported => {
                write!(f, "The render target does not support framebuffer capture.")
            }
            CaptureError::FormatUnsupported(format) => {
                write!(f, "Unsupported source texture format for capture: {format}")
            }
            CaptureError::LayoutMismatch { expected, actual } => {
                write!(
                    f,
                    "Pixel data layout mismatch: expected {expected} bytes, got {actual}"
                )
            }
            CaptureError::ZeroSized(size) => {
                write!(
                    f,
                    "Cannot capture a zero-sized surface ({}x{})",
                    size.width, size.height
                )
            }
            CaptureError::ReadbackFailed(msg) => {
                write!(f, "Framebuffer readback failed: {msg}")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

/// The top-level error for driving a frame through the render pipeline.
#[derive(Debug)]
pub enum RenderError {
    /// A failure occurred during the initialization of the graphics backend.
    InitializationFailed(String),
    /// Failed to acquire the next frame from the swapchain/surface for rendering.
    SurfaceAcquisitionFailed(String),
    /// The pipeline was run without an installed render target.
    NoRenderTarget,
    /// A critical, unrecoverable rendering operation failed.
    RenderingFailed(String),
    /// An error occurred while managing a GPU resource.
    Resource(ResourceError),
    /// An error occurred while capturing the framebuffer.
    Capture(CaptureError),
    /// The graphics device was lost (e.g., GPU driver crashed or was updated).
    DeviceLost,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InitializationFailed(msg) => {
                write!(f, "Failed to initialize graphics backend: {msg}")
            }
            RenderError::SurfaceAcquisitionFailed(msg) => {
                write!(f, "Failed to acquire surface for rendering: {msg}")
            }
            RenderError::NoRenderTarget => {
                write!(f, "The pipeline has no installed render target.")
            }
            RenderError::RenderingFailed(msg) => {
                write!(f, "A critical rendering operation failed: {msg}")
            }
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
            RenderError::Capture(err) => {
                write!(f, "Framebuffer capture failed: {err}")
            }
            RenderError::DeviceLost => write!(
                f,
                "The graphics device was lost and needs to be reinitialized."
            ),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            RenderError::Capture(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}

impl From<CaptureError> for RenderError {
    fn from(err: CaptureError) -> Self {
        RenderError::Capture(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = RenderError::from(CaptureError::LayoutMismatch {
            expected: 12,
            actual: 8,
        });
        let msg = err.to_string();
        assert!(msg.contains("capture failed"));
        assert!(msg.contains("expected 12 bytes"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = RenderError::from(ResourceError::InvalidHandle);
        assert!(err.source().is_some());
        assert!(RenderError::NoRenderTarget.source().is_none());
    }
}
