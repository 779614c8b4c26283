//! Augment the development of primitives with procedural macros.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Ident, ItemFn, LitStr};

/// Run a test function with a `tracing` subscriber that writes to the test output.
///
/// The optional argument sets the maximum level captured (`"TRACE"`, `"DEBUG"`, `"INFO"`,
/// `"WARN"`, or `"ERROR"`) and defaults to `"DEBUG"`. The crate using this attribute must
/// depend on `tracing` and `tracing-subscriber` (usually as dev-dependencies).
///
/// # Example
/// ```rust,ignore
/// use peerwire_macros::test_traced;
///
/// #[test_traced("INFO")]
/// fn test_with_logs() {
///     tracing::info!("visible");
///     tracing::debug!("filtered");
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Parse the log level
    let level = if attr.is_empty() {
        String::from("DEBUG")
    } else {
        parse_macro_input!(attr as LitStr).value().to_uppercase()
    };
    if !matches!(
        level.as_str(),
        "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR"
    ) {
        return syn::Error::new(Span::call_site(), format!("invalid log level: {level}"))
            .to_compile_error()
            .into();
    }
    let level = Ident::new(&level, Span::call_site());

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;

    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis #sig {
            let subscriber = ::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(::tracing::Level::#level)
                .with_line_number(true)
                .finish();
            let dispatcher = ::tracing::Dispatch::new(subscriber);
            ::tracing::dispatcher::with_default(&dispatcher, || #body)
        }
    };
    TokenStream::from(expanded)
}
