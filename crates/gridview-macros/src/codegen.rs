//! Code generation for `#[derive(Identifiable)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::{FieldAccess, IdentityField};

/// Generate the `Identifiable` impl for the input type.
pub fn generate(input: &DeriveInput, field: &IdentityField) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let ty = &field.ty;

    let access = match &field.access {
        FieldAccess::Named(ident) => quote! { self.#ident },
        FieldAccess::Unnamed(index) => quote! { self.#index },
    };

    quote! {
        impl #impl_generics ::gridview::Identifiable for #name #ty_generics #where_clause {
            type Id = #ty;

            fn id(&self) -> Self::Id {
                ::core::clone::Clone::clone(&#access)
            }
        }
    }
}
