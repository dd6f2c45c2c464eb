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

use s3smoke::config::OBJECT_STORE_PORT;
use s3smoke::{HarnessConfig, ServiceFailure, TestContext};

/// A request against an endpoint with no listener must fail as a connection
/// failure, promptly and without a service response.
///
/// Needs the fixed port to be closed on loopback; skips when something is
/// already listening there (e.g. a store under test).
#[tokio::test]
async fn create_against_unreachable_endpoint_is_connection_failure() {
    if tokio::net::TcpStream::connect(("127.0.0.1", OBJECT_STORE_PORT))
        .await
        .is_ok()
    {
        println!("skipping: a listener is present on 127.0.0.1:{OBJECT_STORE_PORT}");
        return;
    }

    let config = HarnessConfig {
        access_key: "AK".to_string(),
        secret_key: "SK".to_string(),
        transport: "http".to_string(),
        ip_address: "127.0.0.1".to_string(),
    };
    let ctx = TestContext::new(config);

    let err = ctx
        .client()
        .create_bucket()
        .bucket("somebucket")
        .send()
        .await
        .expect_err("create_bucket should fail against a closed port");
    assert_eq!(ServiceFailure::classify(&err), ServiceFailure::Connection);
}
