//! The `overload!` macro: a set of single-argument closures presented as one `Call` value.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote},
    syn::{
        parse::{Parse, ParseStream},
        punctuated::Punctuated,
        spanned::Spanned,
        visit_mut::{self, VisitMut},
        Error, ExprClosure, Lifetime, Pat, Token, Type, TypeReference,
    },
};

/// One arm of an overload set: a closure and the type of its single argument.
struct Arm {
    closure: ExprClosure,
    arg: Type,
}

/// A parsed `overload!` invocation.
pub struct Overload {
    arms: Vec<Arm>,
}

impl Parse for Overload {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let closures = Punctuated::<ExprClosure, Token![,]>::parse_terminated(input)?;
        if closures.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "an overload set needs at least one closure",
            ));
        }
        let arms = closures
            .into_iter()
            .map(|closure| {
                if closure.inputs.len() != 1 {
                    return Err(Error::new(
                        closure.inputs.span(),
                        "each overloaded closure must take exactly one argument",
                    ));
                }
                let arg = match &closure.inputs[0] {
                    Pat::Type(typed) => (*typed.ty).clone(),
                    other => {
                        return Err(Error::new(
                            other.span(),
                            "the argument of an overloaded closure needs a type annotation",
                        ))
                    }
                };
                Ok(Arm { closure, arg })
            })
            .collect::<syn::Result<Vec<_>>>()?;
        Ok(Overload { arms })
    }
}

/// Replaces every elided or anonymous lifetime in a type with a fresh named one, remembering the
/// names it introduced so they can be declared on the surrounding impl.
struct NameLifetimes {
    arm: usize,
    introduced: Vec<Lifetime>,
}

impl NameLifetimes {
    fn fresh(&mut self) -> Lifetime {
        let name = format!("'__reshape_{}_{}", self.arm, self.introduced.len());
        let lifetime = Lifetime::new(&name, Span::call_site());
        self.introduced.push(lifetime.clone());
        lifetime
    }
}

impl VisitMut for NameLifetimes {
    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(self.fresh());
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = self.fresh();
        }
    }
}

impl Overload {
    /// Expand into a block which defines a private carrier struct, implements `Call` on it once
    /// per arm, and evaluates to an instance holding every closure.
    pub fn expand(self, krate: &TokenStream) -> TokenStream {
        let fields: Vec<_> = (0..self.arms.len())
            .map(|i| format_ident!("__F{}", i))
            .collect();

        let impls = self.arms.iter().enumerate().map(|(i, arm)| {
            let mut namer = NameLifetimes {
                arm: i,
                introduced: Vec::new(),
            };
            let mut arg = arm.arg.clone();
            namer.visit_type_mut(&mut arg);
            let lifetimes = &namer.introduced;
            let field = &fields[i];
            let index = syn::Index::from(i);
            quote! {
                impl<#(#lifetimes,)* #(#fields,)* __R> #krate::Call<#arg> for Overload<#(#fields),*>
                where
                    #field: ::core::ops::FnMut(#arg) -> __R,
                {
                    type Output = __R;

                    fn call(&mut self, arg: #arg) -> Self::Output {
                        (self.#index)(arg)
                    }
                }
            }
        });

        let closures = self.arms.iter().map(|arm| &arm.closure);

        quote! {
            {
                struct Overload<#(#fields),*>(#(#fields),*);

                #(#impls)*

                Overload(#(#closures),*)
            }
        }
    }
}
