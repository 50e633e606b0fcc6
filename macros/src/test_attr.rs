// RADOS Gateway Swift client library for Rust
// Copyright 2025 MinIO, Inc.
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
use uuid::Uuid;

#[derive(Debug, FromMeta)]
pub(crate) struct MacroArgs {
    flavor: Option<String>,
    worker_threads: Option<usize>,
    bucket_name: Option<String>,
    no_bucket: darling::util::Flag,
    no_cleanup: darling::util::Flag,
}

fn compile_error(msg: &str, span: proc_macro2::Span) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(Error::custom(msg).with_span(&span).write_errors())
}

impl MacroArgs {
    pub(crate) fn validate(&self, func: &ItemFn) -> Result<(), proc_macro::TokenStream> {
        if self.no_bucket.is_present() && self.bucket_name.is_some() {
            return Err(compile_error(
                "The `no_bucket` argument cannot be used with `bucket_name`",
                func.sig.span(),
            ));
        }
        if self.no_bucket.is_present() && self.no_cleanup.is_present() {
            return Err(compile_error(
                "The `no_cleanup` argument has no effect with `no_bucket`",
                func.sig.span(),
            ));
        }

        let expected = if self.no_bucket.is_present() { 1 } else { 2 };
        if func.sig.inputs.len() != expected {
            let msg = if self.no_bucket.is_present() {
                "When using `no_bucket`, the test function must have exactly one argument: (ctx: TestContext)"
            } else {
                "Swift test function must have exactly two arguments: (ctx: TestContext, bucket_name: String)"
            };
            return Err(compile_error(msg, func.sig.inputs.span()));
        }

        let mut iter = func.sig.inputs.iter();

        if let Some(FnArg::Typed(pat_type)) = iter.next() {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("TestContext") {
                return Err(compile_error(
                    "The first argument must be of type TestContext",
                    pat_type.span(),
                ));
            }
        }

        if !self.no_bucket.is_present()
            && let Some(FnArg::Typed(pat_type)) = iter.next()
        {
            let type_str = pat_type.ty.to_token_stream().to_string();
            if !type_str.contains("String") {
                return Err(compile_error(
                    "The second argument must be of type String",
                    pat_type.span(),
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

    let header = generate_tokio_test_header(&args, sig);

    let test_function_block = func.block.clone().into_token_stream();

    let inner_inputs = quote_spanned!(input_span=> #old_inps);
    let inner_fn_name = create_inner_func_name(&func);
    let inner_header = quote_spanned!(func.sig.span()=> async fn #inner_fn_name(#inner_inputs));

    let prelude = quote!(
            use ::futures_util::FutureExt;
            use ::std::panic::AssertUnwindSafe;
            use ::rgw_swift::swift::types::SwiftApi;
            use ::rgw_swift::swift::response_traits::HasBucket;

            let ctx = ::rgw_swift_common::test_context::TestContext::new_from_env().await;
    );

    let outer_body = if args.no_bucket.is_present() {
        quote_spanned!(func.block.span()=> {
            #prelude
            #inner_fn_name(ctx).await;
        })
    } else {
        generate_with_bucket_body(prelude, inner_fn_name, &args, func.block.span())
    };

    let inner_impl = quote_spanned!(func.span()=>
        #inner_header
        #test_function_block
    );

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
        .or(std::env::var("SWIFT_TEST_TOKIO_RUNTIME_FLAVOR").ok());
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

fn generate_with_bucket_body(
    prelude: TokenStream,
    inner_fn_name: TokenStream,
    args: &MacroArgs,
    span: proc_macro2::Span,
) -> TokenStream {
    let bucket_name = args
        .bucket_name
        .as_ref()
        .map(|b| b.to_token_stream())
        .unwrap_or_else(|| {
            let random_name = format!("test-bucket-{}", Uuid::new_v4());
            proc_macro2::Literal::string(&random_name).into_token_stream()
        });
    let maybe_cleanup = if args.no_cleanup.is_present() {
        quote! {}
    } else {
        quote! {
            ::rgw_swift_common::cleanup_guard::cleanup(ctx_clone.session.clone(), resp.bucket()).await;
        }
    };
    quote_spanned!(span=> {
        #prelude

        let ctx_clone = ctx.clone();
        let bucket_name = #bucket_name;
        let resp = ctx_clone.session.create_bucket(bucket_name).build().send().await.expect("Failed to create bucket");
        assert_eq!(resp.bucket(), bucket_name);
        let res = AssertUnwindSafe(#inner_fn_name(ctx, resp.bucket().to_string())).catch_unwind().await;
        #maybe_cleanup
        if let Err(e) = res {
            ::std::panic::resume_unwind(e);
        }
    })
}

fn create_inner_func_name(func: &ItemFn) -> TokenStream {
    let inner_name = format!("{}_test_impl", func.sig.ident);
    let ident = proc_macro2::Ident::new(&inner_name, func.sig.span());
    quote! { #ident }
}
