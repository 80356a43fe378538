//! Quartile cohort comparison
//!
//! Splits a record set by the quartiles of a ranking column and compares
//! indicator means between the top and bottom cohorts.

use serde::Serialize;

use crate::algorithm::statistics::descriptive::{column_values, mean};
use crate::algorithm::statistics::metric::Metric;
use crate::algorithm::statistics::quantile::quantile;
use crate::error::Result;
use crate::models::{NumericRecord, columns};

/// Indicators compared between elderly cohorts
pub const COHORT_INDICATORS: [&str; 3] = [
    columns::HOSPITALIZATIONS_PER_1000,
    columns::PROCEDURES_PER_1000,
    columns::HOSPITALIZATION_SPEND_PER_CAPITA,
];

/// One indicator compared between the two cohorts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorComparison {
    pub column: String,
    pub top_mean: Metric,
    pub bottom_mean: Metric,
    /// `top_mean / bottom_mean`
    pub ratio: Metric,
}

/// Top versus bottom quartile comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortComparison {
    /// Column the cohorts are ranked by
    pub rank_column: String,
    /// 75th percentile; the top cohort is at or above it
    pub top_threshold: Metric,
    /// 25th percentile; the bottom cohort is at or below it
    pub bottom_threshold: Metric,
    pub top_count: usize,
    pub bottom_count: usize,
    pub indicators: Vec<IndicatorComparison>,
}

impl CohortComparison {
    /// Compare `indicators` between the quartile cohorts of `rank_column`
    pub fn compute<R: NumericRecord>(
        records: &[R],
        rank_column: &str,
        indicators: &[&str],
    ) -> Result<Self> {
        let ranks = column_values(records, rank_column)?;
        let top_threshold = quantile(&ranks, 0.75);
        let bottom_threshold = quantile(&ranks, 0.25);

        let top: Vec<&R> = match top_threshold.value() {
            Some(threshold) => records
                .iter()
                .zip(&ranks)
                .filter(|&(_, &rank)| rank >= threshold)
                .map(|(record, _)| record)
                .collect(),
            None => Vec::new(),
        };
        let bottom: Vec<&R> = match bottom_threshold.value() {
            Some(threshold) => records
                .iter()
                .zip(&ranks)
                .filter(|&(_, &rank)| rank <= threshold)
                .map(|(record, _)| record)
                .collect(),
            None => Vec::new(),
        };

        let indicators = indicators
            .iter()
            .map(|&column| {
                let top_mean = mean(&column_values(top.iter().copied(), column)?);
                let bottom_mean = mean(&column_values(bottom.iter().copied(), column)?);
                Ok(IndicatorComparison {
                    column: column.to_string(),
                    top_mean,
                    bottom_mean,
                    ratio: Metric::ratio(top_mean, bottom_mean),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rank_column: rank_column.to_string(),
            top_threshold,
            bottom_threshold,
            top_count: top.len(),
            bottom_count: bottom.len(),
            indicators,
        })
    }

    /// High versus low elderly share, over the hospital and procedure indicators
    pub fn elderly<R: NumericRecord>(records: &[R]) -> Result<Self> {
        Self::compute(records, columns::PCT_ELDERLY, &COHORT_INDICATORS)
    }

    /// Comparison for one indicator column
    #[must_use]
    pub fn indicator(&self, column: &str) -> Option<&IndicatorComparison> {
        self.indicators.iter().find(|c| c.column == column)
    }
}
