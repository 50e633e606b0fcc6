mod test_attr;

use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use syn::ItemFn;
extern crate proc_macro;

/// A proc macro attribute for writing RADOS Gateway Swift tests.
///
/// This macro extends the `#[tokio::test]` attribute. It builds a
/// `TestContext` holding an authenticated session, creates a container for
/// the test if needed and purges it once the test is done, whether the test
/// passed or panicked.
///
/// By default, the test function takes two parameters:
///
/// - `ctx: TestContext` - The test context, giving access to the session and, when no
///   gateway endpoint is configured, to the mock server.
/// - `bucket_name: String` - The name of the container created for the test.
///
/// ```no_run
/// use rgw_swift_common::test_context::TestContext;
/// #[rgw_swift_macros::test]
/// async fn my_test(ctx: TestContext, bucket_name: String) {
///    // Your test code here
/// }
/// ```
///
/// With `no_bucket` the test function takes only the context:
///
/// ```no_run
/// use rgw_swift_common::test_context::TestContext;
/// #[rgw_swift_macros::test(no_bucket)]
/// async fn my_test(ctx: TestContext) {
///    // Your test code here
/// }
///```
/// Further arguments:
///
/// - `flavor`: flavor of the Tokio runtime (e.g., "multi_thread"). Defaults to the value of
///   `SWIFT_TEST_TOKIO_RUNTIME_FLAVOR` at compile time, if set.
/// - `worker_threads`: number of worker threads of the Tokio runtime.
/// - `bucket_name`: name of the container to create. A random name is used otherwise.
/// - `no_cleanup`: leave the container in place after the test.
#[proc_macro_attribute]
pub fn test(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input_fn = match syn::parse::<ItemFn>(input.clone()) {
        Ok(input_fn) => input_fn,
        Err(err) => return err.to_compile_error().into(),
    };

    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(v) => v,
        Err(e) => return Error::from(e).write_errors().into(),
    };

    let args = match test_attr::MacroArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    if let Err(err) = args.validate(&input_fn) {
        return err;
    }

    match test_attr::expand_test_macro(args, input_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.into(),
    }
}
