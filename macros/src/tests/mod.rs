//! Tests for the NumericColumns derive macro

use darling::FromDeriveInput;

use crate::numeric_columns_impl::NumericColumnsReceiver;

#[test]
fn test_receiver_parses_column_attributes() {
    let input: syn::DeriveInput = syn::parse_quote! {
        struct Sample {
            #[column(skip)]
            id: u32,
            #[column(name = "population")]
            population_total: u64,
            name: String,
            gdp_per_capita: f64,
        }
    };

    assert!(NumericColumnsReceiver::from_derive_input(&input).is_ok());
}

#[test]
fn test_receiver_rejects_tuple_structs() {
    let input: syn::DeriveInput = syn::parse_quote! {
        struct Sample(u32, f64);
    };

    assert!(NumericColumnsReceiver::from_derive_input(&input).is_err());
}
