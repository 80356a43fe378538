//! Synthetic municipal health statistics for PNAHP/PNAES dashboards.
//!
//! Generates a deterministic dataset of municipalities, filters it by region,
//! elderly share and GDP per capita, and computes the statistics behind the
//! dashboard charts: means, Pearson correlations, quartile cohorts and
//! grouped aggregates. Rendering is left to the consumer of
//! [`pipeline::DashboardView`].

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod presentation;
pub mod utils;

// Re-export the most common types for easier use
pub use config::DatasetConfig;
pub use error::{DashboardError, Result};
pub use filter::{FilterParams, ValueRange, filter_dataset};
pub use generator::{Dataset, DatasetCache, generate_dataset};
pub use models::{Municipality, NumericRecord, Region, SizeBucket};
pub use pipeline::{Dashboard, DashboardView};

// Statistics
pub use algorithm::statistics::{Metric, MetricsReport, UndefinedReason};

// Presentation
pub use presentation::{ChartKind, ChartSpec};
