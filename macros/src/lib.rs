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

mod test_attr;

use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use syn::ItemFn;
extern crate proc_macro;

/// A proc macro attribute for writing s3smoke live test cases.
///
/// This macro extends the `#[tokio::test]` attribute with the harness setup
/// phase: it installs the test logger, runs the one-time config discovery,
/// and hands the resulting `TestContext` fixture to the test function. A
/// config defect, including a missing file, fails every case with the same
/// setup error before any request is issued. Setting
/// `S3SMOKE_SKIP_IF_UNCONFIGURED` relaxes only the missing-file case: the
/// test then prints a notice and skips, so a machine with no store to talk
/// to stays green.
///
/// The test function must have exactly one parameter:
///
/// - `ctx: TestContext` - the fixture carrying the shared S3 client.
///
/// ```ignore
/// use s3smoke::TestContext;
/// #[s3smoke_macros::test]
/// async fn my_test(ctx: TestContext) {
///    // Your test code here
/// }
/// ```
///
/// The macro also supports additional arguments:
///
/// - `flavor`: Specifies the flavor of the Tokio test (e.g., "multi_thread").
/// - `worker_threads`: Specifies the number of worker threads for the Tokio test.
#[proc_macro_attribute]
pub fn test(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    // Parse the function
    let input_fn = match syn::parse::<ItemFn>(input.clone()) {
        Ok(input_fn) => input_fn,
        Err(err) => return err.to_compile_error().into(),
    };

    // Parse the macro arguments
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(v) => v,
        Err(e) => return Error::from(e).write_errors().into(),
    };

    let args = match test_attr::MacroArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    // Validate the function arguments
    if let Err(err) = args.validate(&input_fn) {
        return err;
    }

    // Expand the macro
    match test_attr::expand_test_macro(args, input_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.into(),
    }
}
