use {
    proc_macro2::TokenStream,
    quote::quote,
    syn::DeriveInput,
};

pub fn derive(input: DeriveInput, krate: &TokenStream) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #krate::Resolve for #name #ty_generics #where_clause {
            type Resolved = Self;

            fn resolve(self) -> Self {
                self
            }
        }
    }
}
