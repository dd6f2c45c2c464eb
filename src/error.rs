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

use std::path::PathBuf;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Setup-phase configuration failure. Surfacing one of these aborts the
/// live test cases before any request is issued.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path} is not a valid config document: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file {path}: field `{field}` must be a non-empty string")]
    Field { path: PathBuf, field: &'static str },
}

/// Coarse classification of a failed request against the store, so tests can
/// assert on a failure mode instead of string-matching debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    /// The bucket already exists (`BucketAlreadyOwnedByYou` or
    /// `BucketAlreadyExists`).
    Conflict,
    /// The store rejected the credentials or the operation.
    AccessDenied,
    /// The request never produced a service response (connection refused,
    /// DNS failure, timeout).
    Connection,
    /// Any other failure, carrying the service error code when present.
    Other(String),
}

impl ServiceFailure {
    pub fn classify<E, R>(err: &SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata,
    {
        match err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ServiceFailure::Connection,
            SdkError::ServiceError(context) => match context.err().code() {
                Some("BucketAlreadyOwnedByYou") | Some("BucketAlreadyExists") => {
                    ServiceFailure::Conflict
                }
                Some("AccessDenied") => ServiceFailure::AccessDenied,
                Some(code) => ServiceFailure::Other(code.to_string()),
                None => ServiceFailure::Other("unknown".to_string()),
            },
            other => ServiceFailure::Other(other.to_string()),
        }
    }
}
