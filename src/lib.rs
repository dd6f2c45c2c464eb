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

//! Test harness for exercising S3 compatible object stores over their public
//! API. The harness reads endpoint credentials from a shared JSON config
//! file, builds one `aws-sdk-s3` client per process, and hands it to the
//! integration test cases under `tests/` through the
//! `#[s3smoke_macros::test]` attribute.
//!
//! Request signing and transport are delegated entirely to the vendor SDK;
//! nothing in this crate talks to the wire directly.

pub mod cleanup_guard;
pub mod config;
pub mod context;
pub mod error;
pub mod utils;

pub use config::HarnessConfig;
pub use context::TestContext;
pub use error::{ConfigError, ServiceFailure};
