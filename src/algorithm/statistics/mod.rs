//! Statistics over filtered municipality views
//!
//! Means, Pearson correlations, quartile cohorts and grouped aggregates.
//! Every statistic that can be undefined is returned as a [`Metric`].

pub mod cohort;
pub mod correlation;
pub mod descriptive;
pub mod grouping;
pub mod metric;
pub mod quantile;
pub mod report;

pub use cohort::{CohortComparison, IndicatorComparison};
pub use correlation::{CorrelationMatrix, CorrelationStrength, correlation, pearson};
pub use descriptive::{ColumnSummary, HeadlineMetrics, column_mean, column_values, mean};
pub use grouping::{GroupAggregate, grouped_box_summaries, grouped_means, size_bucket_counts};
pub use metric::{Metric, UndefinedReason};
pub use quantile::{BoxSummary, quantile};
pub use report::MetricsReport;
