//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use arrow::record_batch::RecordBatch;

use crate::algorithm::statistics::Metric;

/// Print summary information about the filtered table
pub fn print_batch_summary(batch: &RecordBatch) {
    println!(
        "Filtered table: {} rows x {} columns",
        batch.num_rows(),
        batch.num_columns()
    );
}

/// Print the schema of a record batch
pub fn print_schema_info(batch: &RecordBatch) {
    println!("Schema:");
    for field in batch.schema().fields() {
        println!("  - {} ({})", field.name(), field.data_type());
    }
}

/// Print a metric dictionary, one metric per line
pub fn print_metrics<'a>(metrics: impl IntoIterator<Item = (&'a String, &'a Metric)>) {
    println!("Metrics:");
    for (name, metric) in metrics {
        println!("  {name}: {metric:.4}");
    }
}
