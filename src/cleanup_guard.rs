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

use aws_sdk_s3::Client;
use aws_sdk_s3::error::BoxError;

/// Deletes a bucket created by a supplementary test case, purging any
/// objects left in it, so the suite does not perturb the clean-namespace
/// assumption of the single-shot lifecycle case. Cleanup failures are
/// reported, never panicked on.
pub struct CleanupGuard {
    client: Client,
    bucket_name: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: Client, bucket_name: S) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.client.clone(), &self.bucket_name).await;
    }
}

pub async fn cleanup(client: Client, bucket_name: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing bucket {bucket_name}");
        },
        outcome = delete_and_purge(&client, bucket_name) => {
            if let Err(e) = outcome {
                eprintln!("Error removing bucket '{bucket_name}':\n{e}");
            }
        }
    );
}

// One listing page covers the handful of objects a smoke case writes.
async fn delete_and_purge(client: &Client, bucket_name: &str) -> Result<(), BoxError> {
    let listing = client.list_objects_v2().bucket(bucket_name).send().await?;
    for object in listing.contents() {
        if let Some(key) = object.key() {
            client.delete_object().bucket(bucket_name).key(key).send().await?;
        }
    }
    client.delete_bucket().bucket(bucket_name).send().await?;
    Ok(())
}
