//! Procedural macros for the gridview crate.
//!
//! This crate provides `#[derive(Identifiable)]`, which gives a struct the
//! stable identity the grid uses to key its cells.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;

/// Derive `gridview::Identifiable` for a struct.
///
/// The identity field is the one marked `#[id]`, or the field named `id`
/// when no field is marked. Its type becomes `Identifiable::Id` and must be
/// `Clone + Eq + Hash + Debug`.
///
/// # Example
///
/// ```ignore
/// use gridview::Identifiable;
///
/// #[derive(Identifiable)]
/// struct Photo {
///     #[id]
///     key: u64,
///     title: String,
/// }
///
/// #[derive(Identifiable)]
/// struct Tag {
///     id: String, // picked up by name
/// }
/// ```
#[proc_macro_derive(Identifiable, attributes(id))]
pub fn derive_identifiable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match parse::IdentityField::from_derive(&input) {
        Ok(field) => codegen::generate(&input, &field).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
