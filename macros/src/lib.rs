//! Procedural macros for the municipal-health crate
//!
//! This crate provides the column reflection derive used by the statistics
//! layer to address record fields by name.

use proc_macro::TokenStream;

mod numeric_columns_impl;
mod utils;

#[cfg(test)]
mod tests;

/// Derive macro for named numeric column access
///
/// Every numeric field (integer or float) becomes a column addressable by
/// name through `crate::models::NumericRecord`. Non-numeric fields are
/// ignored. A field can be renamed or excluded explicitly.
///
/// # Example
///
/// ```ignore
/// #[derive(NumericColumns)]
/// struct Municipality {
///     #[column(skip)]
///     id: u32,
///
///     name: String,
///
///     #[column(name = "population")]
///     population_total: u64,
///
///     gdp_per_capita: f64,
/// }
/// ```
#[proc_macro_derive(NumericColumns, attributes(column))]
pub fn derive_numeric_columns(input: TokenStream) -> TokenStream {
    numeric_columns_impl::process_derive_numeric_columns(input)
}
