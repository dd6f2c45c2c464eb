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

use aws_sdk_s3::primitives::ByteStream;
use s3smoke::TestContext;
use s3smoke::cleanup_guard::CleanupGuard;
use s3smoke::utils::rand_bucket_name;

const OBJECT_KEY: &str = "roundtrip.txt";
const PAYLOAD: &[u8] = b"hello from s3smoke";

/// An object written through the endpoint must read back intact, both in
/// full and through a ranged GET.
#[s3smoke_macros::test]
async fn object_roundtrip(ctx: TestContext) {
    let bucket_name = rand_bucket_name();
    ctx.client()
        .create_bucket()
        .bucket(&bucket_name)
        .send()
        .await
        .unwrap();
    let guard = CleanupGuard::new(ctx.client().clone(), &bucket_name);

    ctx.client()
        .put_object()
        .bucket(&bucket_name)
        .key(OBJECT_KEY)
        .body(ByteStream::from(PAYLOAD.to_vec()))
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client()
        .get_object()
        .bucket(&bucket_name)
        .key(OBJECT_KEY)
        .send()
        .await
        .unwrap();
    let body = resp.body.collect().await.unwrap().into_bytes();
    assert_eq!(body.as_ref(), PAYLOAD);

    // "bytes=6-9" covers the word "from"
    let resp = ctx
        .client()
        .get_object()
        .bucket(&bucket_name)
        .key(OBJECT_KEY)
        .range("bytes=6-9")
        .send()
        .await
        .unwrap();
    let body = resp.body.collect().await.unwrap().into_bytes();
    assert_eq!(body.as_ref(), &PAYLOAD[6..=9]);

    guard.cleanup().await;
}
