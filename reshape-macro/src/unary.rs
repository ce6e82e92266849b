use {
    proc_macro2::{Literal, TokenStream},
    quote::quote,
};

/// Generate `ToUnary` and `ToConstant` impls linking `Number<N>` with its unary form, for every
/// `N` from zero up to and including `max`.
pub fn generate_conversion_impls(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    let mut unary = quote!(Z);
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls
}
