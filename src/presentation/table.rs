//! Tabular form of the filtered view
//!
//! Rows are exposed as an Arrow `RecordBatch` (via `serde_arrow`) or as
//! JSON, so any renderer can consume them without knowing the Rust types.

use arrow::record_batch::RecordBatch;
use arrow_schema::{FieldRef, Schema};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;
use crate::models::Municipality;

/// Arrow fields of a municipality row
pub fn municipality_fields() -> Result<Vec<FieldRef>> {
    let fields = Vec::<FieldRef>::from_type::<Municipality>(
        TracingOptions::default().enums_without_data_as_strings(true),
    )?;
    Ok(fields)
}

/// Arrow schema of a municipality row
pub fn municipality_schema() -> Result<Schema> {
    Ok(Schema::new(municipality_fields()?))
}

/// Convert records to a record batch, one row per municipality
pub fn to_record_batch(records: &[Municipality]) -> Result<RecordBatch> {
    let fields = municipality_fields()?;
    Ok(serde_arrow::to_record_batch(&fields, &records)?)
}

/// Convert a record batch produced by [`to_record_batch`] back to records
pub fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Municipality>> {
    Ok(serde_arrow::from_record_batch(batch)?)
}

/// Records as a JSON array of objects
pub fn to_json_rows(records: &[Municipality]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
