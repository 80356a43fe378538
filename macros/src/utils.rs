//! Utility functions for procedural macros
//!
//! Type inspection helpers shared by the derive implementations.

use syn::Type;

/// Primitive numeric types that convert to `f64` with `as`
const NUMERIC_TYPES: &[&str] = &[
    "f64", "f32", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

/// Check if a type is one of the primitive numeric types
pub fn is_numeric_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => {
            let path = &type_path.path;
            if path.segments.len() == 1 {
                let ident = path.segments[0].ident.to_string();
                NUMERIC_TYPES.contains(&ident.as_str())
            } else {
                false
            }
        }
        _ => false,
    }
}
