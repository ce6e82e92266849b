extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Span, TokenStream as TokenStream2},
    proc_macro_crate::FoundCrate,
    quote::quote,
    syn::{parse_macro_input, DeriveInput, Ident, LitInt},
};

mod overload;
mod resolve;
mod tuples;
mod unary;

/// Build a single value which can be called with each of several argument types, one closure per
/// argument type.
///
/// Each arm is a closure taking exactly one argument with an explicit type annotation. The
/// resulting value implements `reshape::Call<T>` once for every annotated argument type `T`, which
/// makes it usable as the visitor or predicate of a heterogeneous traversal.
///
/// ```
/// use reshape::{overload, Call};
///
/// let mut describe = overload!(|n: &i32| format!("int {}", n), |c: &char| format!("char {}", c));
/// assert_eq!(describe.call(&3), "int 3");
/// assert_eq!(describe.call(&'x'), "char x");
/// ```
///
/// Arms must annotate their argument:
///
/// ```compile_fail
/// use reshape::overload;
///
/// let bad = overload!(|n| n + 1);
/// ```
///
/// # Limitations
///
/// The expansion defines a private struct inside a block and implements `Call` on it, so argument
/// types can only name items visible to an item declared there. Generic parameters of the
/// enclosing function are not; use a hand-written `Call` impl instead:
///
/// ```compile_fail
/// use reshape::{overload, Call};
///
/// fn describe<T: std::fmt::Debug>(value: &T) -> String {
///     let mut debug = overload!(|x: &T| format!("{:?}", x));
///     debug.call(value)
/// }
/// ```
///
/// Lifetimes elided inside a type path are not renamed. Write them as `'_`, as in
/// `|c: Cow<'_, str>|` rather than `|c: Cow<str>|`; elided reference lifetimes such as
/// `|s: &str|` are handled.
#[proc_macro]
pub fn overload(input: TokenStream) -> TokenStream {
    let arms = parse_macro_input!(input as overload::Overload);
    arms.expand(&crate_path()).into()
}

/// Derive `Resolve` for an owned type, so that it moves through `resolve_refs` unchanged.
///
/// Every owned slot of a record must implement `Resolve` for the record to be resolved; the
/// standard library's common owned types already do.
#[proc_macro_derive(Resolve)]
pub fn derive_resolve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    resolve::derive(input, &crate_path()).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => tuples::impl_tuples(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuple_resolve(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => tuples::impl_tuple_resolve(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => unary::generate_conversion_impls(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// The path under which the `reshape` crate is visible at the invocation site.
///
/// `reshape`'s own integration tests, doctests, benches and demos see the crate as the extern
/// crate `reshape`, which is what `FoundCrate::Itself` expands to. The library's own modules never
/// invoke these macros.
fn crate_path() -> TokenStream2 {
    match proc_macro_crate::crate_name("reshape") {
        Ok(FoundCrate::Name(name)) => {
            let name = Ident::new(&name, Span::call_site());
            quote!(::#name)
        }
        Ok(FoundCrate::Itself) | Err(_) => quote!(reshape),
    }
}
