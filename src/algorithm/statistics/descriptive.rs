//! Descriptive statistics over record columns

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::statistics::metric::{Metric, UndefinedReason};
use crate::error::{DashboardError, Result};
use crate::models::{NumericRecord, columns};

/// Collect the values of a numeric column
///
/// # Errors
/// Returns `UnknownColumn` if `R` has no numeric column named `column`.
pub fn column_values<'a, R, I>(records: I, column: &str) -> Result<Vec<f64>>
where
    R: NumericRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if !R::NUMERIC_COLUMNS.contains(&column) {
        return Err(DashboardError::UnknownColumn(column.to_string()));
    }

    Ok(records
        .into_iter()
        .filter_map(|record| record.numeric_value(column))
        .collect())
}

/// Arithmetic mean, undefined for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Metric {
    if values.is_empty() {
        return Metric::Undefined(UndefinedReason::EmptyInput);
    }
    Metric::from_value(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of a named column
pub fn column_mean<'a, R, I>(records: I, column: &str) -> Result<Metric>
where
    R: NumericRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    Ok(mean(&column_values(records, column)?))
}

/// Row count and per-column means of a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Number of rows
    pub count: usize,
    /// Mean of every numeric column
    pub means: BTreeMap<String, Metric>,
}

impl ColumnSummary {
    /// Summarize every numeric column of `records`
    #[must_use]
    pub fn from_records<R: NumericRecord>(records: &[R]) -> Self {
        let means = R::NUMERIC_COLUMNS
            .iter()
            .map(|&column| {
                let values: Vec<f64> = records
                    .iter()
                    .filter_map(|record| record.numeric_value(column))
                    .collect();
                (column.to_string(), mean(&values))
            })
            .collect();

        Self {
            count: records.len(),
            means,
        }
    }

    /// Mean of `column`
    pub fn mean(&self, column: &str) -> Result<Metric> {
        self.means
            .get(column)
            .copied()
            .ok_or_else(|| DashboardError::UnknownColumn(column.to_string()))
    }
}

/// Overview figures shown above the dashboards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineMetrics {
    /// Municipalities in the filtered view
    pub municipality_count: usize,
    /// Municipalities in the full dataset
    pub total_count: usize,
    /// `municipality_count - total_count`, only when the two differ
    pub count_delta: Option<i64>,
    pub mean_population: Metric,
    pub mean_pct_elderly: Metric,
    pub mean_gdp_per_capita: Metric,
}

impl HeadlineMetrics {
    /// Headline figures from a column summary of the filtered view
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(summary: &ColumnSummary, total_count: usize) -> Result<Self> {
        let count_delta = (summary.count != total_count)
            .then(|| summary.count as i64 - total_count as i64);

        Ok(Self {
            municipality_count: summary.count,
            total_count,
            count_delta,
            mean_population: summary.mean(columns::POPULATION_TOTAL)?,
            mean_pct_elderly: summary.mean(columns::PCT_ELDERLY)?,
            mean_gdp_per_capita: summary.mean(columns::GDP_PER_CAPITA)?,
        })
    }
}
