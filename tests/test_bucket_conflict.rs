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

use aws_sdk_s3::error::DisplayErrorContext;
use s3smoke::cleanup_guard::CleanupGuard;
use s3smoke::utils::rand_bucket_name;
use s3smoke::{ServiceFailure, TestContext};

/// Creating a bucket that already exists must surface as a service-level
/// conflict, not as success or a transport error.
#[s3smoke_macros::test]
async fn create_existing_bucket_is_conflict(ctx: TestContext) {
    let bucket_name = rand_bucket_name();

    ctx.client()
        .create_bucket()
        .bucket(&bucket_name)
        .send()
        .await
        .unwrap();
    let guard = CleanupGuard::new(ctx.client().clone(), &bucket_name);

    let resp = ctx
        .client()
        .create_bucket()
        .bucket(&bucket_name)
        .send()
        .await;
    match resp {
        Ok(_) => {
            guard.cleanup().await;
            panic!("bucket '{bucket_name}' already exists, but was created again");
        }
        Err(e) => {
            let failure = ServiceFailure::classify(&e);
            guard.cleanup().await;
            assert_eq!(
                failure,
                ServiceFailure::Conflict,
                "unexpected failure: {}",
                DisplayErrorContext(&e)
            );
        }
    }
}
