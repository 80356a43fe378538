//! NumericColumns derive macro implementation
//!
//! Generates a `crate::models::NumericRecord` implementation listing the
//! numeric columns of a struct and reading them as `f64` by name.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::is_numeric_type;

/// Receiver for the struct that derives NumericColumns
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(column), supports(struct_named))]
pub struct NumericColumnsReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// The struct data with parsed fields
    data: ast::Data<(), NumericColumnFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(column))]
pub struct NumericColumnFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// The field type
    ty: syn::Type,
    /// Column name override
    #[darling(default)]
    name: Option<String>,
    /// Exclude the field from the column set
    #[darling(default)]
    skip: bool,
}

/// Process the NumericColumns derive macro
pub fn process_derive_numeric_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match NumericColumnsReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    TokenStream::from(generate_numeric_columns_impl(&receiver.ident, fields))
}

/// Generate the `NumericRecord` implementation
fn generate_numeric_columns_impl(
    struct_name: &syn::Ident,
    fields: &ast::Fields<NumericColumnFieldReceiver>,
) -> proc_macro2::TokenStream {
    let columns = fields
        .iter()
        .filter(|field| !field.skip && is_numeric_type(&field.ty))
        .filter_map(|field| {
            let field_name = field.ident.as_ref()?;
            let column_name = field
                .name
                .clone()
                .unwrap_or_else(|| field_name.to_string());
            Some((field_name, column_name))
        })
        .collect::<Vec<_>>();

    let column_names = columns.iter().map(|(_, column)| column);
    let match_arms = columns.iter().map(|(field_name, column)| {
        quote! {
            #column => Some(self.#field_name as f64),
        }
    });

    quote! {
        impl crate::models::NumericRecord for #struct_name {
            const NUMERIC_COLUMNS: &'static [&'static str] = &[#(#column_names),*];

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless, trivial_numeric_casts)]
            fn numeric_value(&self, column: &str) -> Option<f64> {
                match column {
                    #(#match_arms)*
                    _ => None,
                }
            }
        }
    }
}
