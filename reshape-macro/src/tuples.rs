//! Generation of the tuple/list correspondence, one pair of impls per arity.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote},
    syn::Ident,
};

/// Names for the type parameters and value bindings of a tuple of the given arity.
fn names(arity: usize) -> (Vec<Ident>, Vec<Ident>) {
    let types = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let values = (0..arity)
        .map(|i| Ident::new(&format!("t{}", i), Span::call_site()))
        .collect();
    (types, values)
}

/// Fold a sequence of element tokens into the nested-pair list `(a, (b, (c, ())))`.
fn nest(elements: impl DoubleEndedIterator<Item = TokenStream>) -> TokenStream {
    elements.rev().fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

/// Generate `Tuple` and `List` impls for every arity from zero up to and including `max`.
pub fn impl_tuples(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for arity in 0..=max {
        let (tys, vals) = names(arity);
        let list_ty = nest(tys.iter().map(|t| quote!(#t)));
        let refs_ty = nest(tys.iter().map(|t| quote!(&'a #t)));
        let muts_ty = nest(tys.iter().map(|t| quote!(&'a mut #t)));
        let list_val = nest(vals.iter().map(|v| quote!(#v)));

        impls.extend(quote! {
            impl<#(#tys),*> Tuple for (#(#tys,)*) {
                const ARITY: usize = #arity;
                type AsList = #list_ty;
                type Refs<'a> = #refs_ty where Self: 'a;
                type Muts<'a> = #muts_ty where Self: 'a;

                #[allow(clippy::unused_unit)]
                fn into_list(self) -> Self::AsList {
                    let (#(#vals,)*) = self;
                    #list_val
                }

                #[allow(clippy::unused_unit)]
                fn as_refs(&self) -> Self::Refs<'_> {
                    let (#(#vals,)*) = self;
                    #list_val
                }

                #[allow(clippy::unused_unit)]
                fn as_muts(&mut self) -> Self::Muts<'_> {
                    let (#(#vals,)*) = self;
                    #list_val
                }
            }

            impl<#(#tys),*> List for #list_ty {
                type AsTuple = (#(#tys,)*);

                #[allow(clippy::unused_unit)]
                fn into_tuple(self) -> Self::AsTuple {
                    let #list_val = self;
                    (#(#vals,)*)
                }
            }
        });
    }
    impls
}

/// Generate identity `Resolve` impls for owned tuples of every arity up to and including `max`.
///
/// A tuple held in a slot is an owned value, so it moves through resolution as it is.
pub fn impl_tuple_resolve(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for arity in 0..=max {
        let (tys, _) = names(arity);
        impls.extend(quote! {
            impl<#(#tys),*> Resolve for (#(#tys,)*) {
                type Resolved = Self;

                fn resolve(self) -> Self {
                    self
                }
            }
        });
    }
    impls
}
