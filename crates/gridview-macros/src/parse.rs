//! Locating the identity field of a derive input.

use syn::{Data, DeriveInput, Fields, Ident, Index, Result, Type};

/// How the identity field is accessed on `self`.
#[derive(Debug)]
pub enum FieldAccess {
    Named(Ident),
    Unnamed(Index),
}

/// The field that carries an item's identity.
#[derive(Debug)]
pub struct IdentityField {
    pub access: FieldAccess,
    pub ty: Type,
}

impl IdentityField {
    /// Find the identity field of a struct.
    ///
    /// Resolution order: the single field marked `#[id]`, then a named field
    /// called `id`, then the only field of a single-field tuple struct.
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Identifiable can only be derived for structs",
                ));
            }
        };

        let marked: Vec<_> = fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.attrs.iter().any(|a| a.path().is_ident("id")))
            .collect();

        if marked.len() > 1 {
            return Err(syn::Error::new_spanned(
                &marked[1].1.ident,
                "only one field may be marked #[id]",
            ));
        }

        if let Some((index, field)) = marked.first() {
            let access = match &field.ident {
                Some(ident) => FieldAccess::Named(ident.clone()),
                None => FieldAccess::Unnamed(Index::from(*index)),
            };
            return Ok(Self {
                access,
                ty: field.ty.clone(),
            });
        }

        match fields {
            Fields::Named(named) => named
                .named
                .iter()
                .find_map(|f| {
                    f.ident.as_ref().filter(|i| *i == "id").map(|i| Self {
                        access: FieldAccess::Named(i.clone()),
                        ty: f.ty.clone(),
                    })
                })
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        &input.ident,
                        "no identity field: add a field named `id` or mark one with #[id]",
                    )
                }),
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => Ok(Self {
                access: FieldAccess::Unnamed(Index::from(0)),
                ty: unnamed.unnamed[0].ty.clone(),
            }),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "no identity field: mark one field with #[id]",
            )),
        }
    }
}
