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

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;

use crate::config::HarnessConfig;

/// Region the client signs with. The stores this harness targets do not
/// route on it, but the SDK requires one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Per-case test fixture: the shared S3 client plus the endpoint and config
/// it was built from.
#[derive(Clone)]
pub struct TestContext {
    client: Client,
    endpoint: String,
    config: HarnessConfig,
}

impl TestContext {
    /// Builds the client for `config`: static credentials, fixed port 8000,
    /// path-style bucket addressing.
    ///
    /// Construction performs no network I/O; a malformed endpoint surfaces
    /// on first use as an SDK dispatch error.
    pub fn new(config: HarnessConfig) -> Self {
        let endpoint = config.endpoint_url();
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "s3smoke-config",
        );
        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(DEFAULT_REGION))
            .endpoint_url(endpoint.clone())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();
        Self {
            client: Client::from_conf(sdk_config),
            endpoint,
            config,
        }
    }

    /// Builds a context from the process-wide discovered config.
    ///
    /// Returns `None` only when `S3SMOKE_SKIP_IF_UNCONFIGURED` is set and no
    /// config file exists, so live cases can skip on a machine with no store
    /// to talk to. Any other config defect, including a missing file,
    /// panics: that is a fatal setup error and every live case fails with
    /// the same message before issuing a request.
    pub fn from_shared_config() -> Option<Self> {
        match HarnessConfig::shared() {
            Ok(Some(config)) => Some(Self::new(config.clone())),
            Ok(None) => None,
            Err(err) => panic!("fatal setup error: {err}"),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}
