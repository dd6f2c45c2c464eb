// s3smoke - smoke tests for S3 compatible object storage servers
// Copyright 2026 the s3smoke authors
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

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::ConfigError;

/// Conventional local object-storage test port; the endpoint built from a
/// config always targets it.
pub const OBJECT_STORE_PORT: u16 = 8000;

/// Environment variable naming an explicit config file location.
pub const CONFIG_PATH_ENV: &str = "S3SMOKE_CONFIG";

/// Fallback config location, relative to the test working directory.
pub const DEFAULT_CONFIG_PATH: &str = "../config.json";

/// When set, live cases skip instead of failing on a machine where no
/// config file exists at all.
pub const SKIP_IF_UNCONFIGURED_ENV: &str = "S3SMOKE_SKIP_IF_UNCONFIGURED";

/// Connection settings for the store under test, loaded once per process
/// from a shared JSON file and never mutated afterwards.
///
/// The file is a single object with camelCase keys:
///
/// ```json
/// {
///   "accessKey": "AK",
///   "secretKey": "SK",
///   "transport": "http",
///   "ipAddress": "127.0.0.1"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarnessConfig {
    pub access_key: String,
    pub secret_key: String,
    /// URL scheme, `"http"` or `"https"`.
    pub transport: String,
    /// Hostname or literal IP of the store under test.
    pub ip_address: String,
}

impl HarnessConfig {
    /// Reads and validates the config file at `path`.
    ///
    /// All four fields must be present and non-empty; anything less is a
    /// fatal setup error, not a per-test failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading object store config from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        for (field, value) in [
            ("accessKey", &self.access_key),
            ("secretKey", &self.secret_key),
            ("transport", &self.transport),
            ("ipAddress", &self.ip_address),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Field {
                    path: path.to_path_buf(),
                    field,
                });
            }
        }
        Ok(())
    }

    /// Locates and loads the config file: `S3SMOKE_CONFIG` when set,
    /// otherwise `../config.json`.
    ///
    /// A missing file is a fatal `ConfigError::Io`, like every other setup
    /// defect. The one exception: when `S3SMOKE_SKIP_IF_UNCONFIGURED` is set
    /// and the fallback file does not exist, this returns `Ok(None)` so live
    /// cases can skip on a machine with no store to talk to. A path named
    /// explicitly through the environment must always exist.
    pub fn discover() -> Result<Option<Self>, ConfigError> {
        Self::discover_from(
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            Path::new(DEFAULT_CONFIG_PATH),
            std::env::var_os(SKIP_IF_UNCONFIGURED_ENV).is_some(),
        )
    }

    fn discover_from(
        explicit: Option<PathBuf>,
        fallback: &Path,
        skip_if_unconfigured: bool,
    ) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path).map(Some);
        }
        if skip_if_unconfigured && !fallback.exists() {
            log::debug!("no object store config at {}", fallback.display());
            return Ok(None);
        }
        Self::load(fallback).map(Some)
    }

    /// One-time, process-wide discovery. Every test case sees the same
    /// loaded value regardless of case ordering.
    pub fn shared() -> Result<Option<&'static Self>, &'static ConfigError> {
        static SHARED: OnceCell<Result<Option<HarnessConfig>, ConfigError>> = OnceCell::new();
        SHARED.get_or_init(Self::discover).as_ref().map(Option::as_ref)
    }

    /// Base URL of the store under test, always
    /// `{transport}://{ipAddress}:8000`.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.transport, self.ip_address, OBJECT_STORE_PORT
        )
    }
}
