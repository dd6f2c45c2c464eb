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

use darling::FromMeta;
use darling_core::Error;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{FnArg, ItemFn, ReturnType};

#[derive(Debug, FromMeta)]
pub(crate) struct MacroArgs {
    flavor: Option<String>,
    worker_threads: Option<usize>,
}

impl MacroArgs {
    pub(crate) fn validate(&self, func: &ItemFn) -> Result<(), proc_macro::TokenStream> {
        // Validate that the function has exactly one argument: ctx
        if func.sig.inputs.len() != 1 {
            let error_msg =
                "An s3smoke test function must have exactly one argument: (ctx: TestContext)";
            return Err(proc_macro::TokenStream::from(
                Error::custom(error_msg)
                    .with_span(&func.sig.inputs.span())
                    .write_errors(),
            ));
        }

        // Check the argument type (ctx: TestContext)
        if let Some(FnArg::Typed(pat_type)) = func.sig.inputs.iter().next() {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("TestContext") {
                let error_msg = "The argument must be of type TestContext";
                return Err(proc_macro::TokenStream::from(
                    Error::custom(error_msg)
                        .with_span(&pat_type.span())
                        .write_errors(),
                ));
            }
        }

        Ok(())
    }
}

/// Expands the test macro into the final TokenStream
pub(crate) fn expand_test_macro(
    args: MacroArgs,
    mut func: ItemFn,
) -> Result<TokenStream, proc_macro::TokenStream> {
    let input_span = func.sig.paren_token.span.span();
    func.sig.output = ReturnType::Default;
    let old_inps = func.sig.inputs.clone();
    func.sig.inputs = Punctuated::default();
    let sig = func.sig.clone().into_token_stream();

    // Generate the tokio test attribute based on the provided arguments
    let header = generate_tokio_test_header(&args, sig);

    let test_function_block = func.block.clone().into_token_stream();

    let inner_inputs = quote_spanned!(input_span=> #old_inps);
    let inner_fn_name = create_inner_func_name(&func);
    let inner_header = quote_spanned!(func.sig.span()=> async fn #inner_fn_name(#inner_inputs));

    let test_name = func.sig.ident.to_string();

    // Setup phase: logger, one-time config discovery, fixture construction.
    // A config defect, including a missing file, panics so every live case
    // reports the same setup error; the skip arm is reachable only when
    // S3SMOKE_SKIP_IF_UNCONFIGURED opts into it.
    let outer_body = quote_spanned!(func.block.span()=> {
        let _ = ::env_logger::builder().is_test(true).try_init();
        let ctx = match ::s3smoke::TestContext::from_shared_config() {
            Some(ctx) => ctx,
            None => {
                ::std::println!(
                    "skipping {}: S3SMOKE_SKIP_IF_UNCONFIGURED is set and no config file is present",
                    #test_name
                );
                return;
            }
        };
        #inner_fn_name(ctx).await;
    });

    // Generate the inner function implementation
    let inner_impl = quote_spanned!(func.span()=>
        #inner_header
        #test_function_block
    );

    // Combine all parts into the final output
    let mut out = TokenStream::new();
    out.extend(header);
    out.extend(outer_body);
    out.extend(inner_impl);

    Ok(out)
}

fn generate_tokio_test_header(args: &MacroArgs, sig: TokenStream) -> TokenStream {
    let flavor = args
        .flavor
        .as_ref()
        .map(ToString::to_string)
        .or(std::env::var("S3SMOKE_TEST_TOKIO_RUNTIME_FLAVOR").ok());
    match (flavor, args.worker_threads) {
        (Some(flavor), None) => {
            quote!(#[::tokio::test(flavor = #flavor)]
            #sig
                )
        }
        (None, Some(worker_threads)) => {
            quote!(#[::tokio::test(worker_threads = #worker_threads)]
            #sig
                )
        }
        (None, None) => {
            quote!(#[::tokio::test]
            #sig
                )
        }
        (Some(flavor), Some(worker_threads)) => {
            quote!(#[::tokio::test(flavor = #flavor, worker_threads = #worker_threads)]
            #sig
                )
        }
    }
}

fn create_inner_func_name(func: &ItemFn) -> TokenStream {
    let inner_name = format!("{}_test_impl", func.sig.ident);
    let ident = proc_macro2::Ident::new(&inner_name, func.sig.span());
    quote! { #ident }
}
