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

use uuid::Uuid;

/// Random S3-compliant bucket name, for cases that must not collide with
/// the fixed literal used by the lifecycle scenario.
pub fn rand_bucket_name() -> String {
    format!("smoke-{}", &Uuid::new_v4().to_string()[..8])
}
