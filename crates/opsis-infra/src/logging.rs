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

//! Logger initialization for embedding applications.
//!
//! Libraries in this workspace only use the `log` facade; the binary
//! that boots the renderer installs the backend once via this helper.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once.
///
/// `filter` overrides the environment; otherwise `RUST_LOG` applies,
/// falling back to info level. Subsequent calls are ignored, so tests
/// and embedders can call this unconditionally.
pub fn init(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match filter {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }
        builder.init();
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(Some("debug"));
        init(None);
        log::debug!("logger survives repeat initialization");
    }
}
