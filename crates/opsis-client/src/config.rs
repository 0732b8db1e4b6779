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

//! Render configuration, loadable from RON.

use std::path::Path;

use opsis_core::math::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration of the rendering core and its collaborators.
///
/// Every field has a default, so a partial (or absent) config file is
/// valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Per-axis factor applied to the screen size to derive the
    /// logical (virtual) render size.
    pub virtual_size_scale: (f32, f32),
    /// Whether the shadow-map step is part of the pipeline.
    pub enable_shadows: bool,
    /// Address the observation recorder pushes records to, if any.
    pub observation_endpoint: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            virtual_size_scale: (1.0, 1.0),
            enable_shadows: true,
            observation_endpoint: None,
        }
    }
}

impl RenderConfig {
    /// The virtual-size scale factor as a vector.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.virtual_size_scale.0, self.virtual_size_scale.1)
    }

    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Loads a configuration from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&text)
    }
}

/// Errors raised while loading the render configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read render config from {path}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config text is not valid RON for this schema.
    #[error("malformed render config: {0}")]
    Parse(String),
}
