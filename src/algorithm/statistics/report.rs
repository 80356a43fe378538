//! Every statistic of one dashboard view
//!
//! Computed from the filtered records of a single interaction and handed
//! to the presentation layer as-is.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::algorithm::statistics::cohort::CohortComparison;
use crate::algorithm::statistics::correlation::{CorrelationMatrix, correlation};
use crate::algorithm::statistics::descriptive::{ColumnSummary, HeadlineMetrics};
use crate::algorithm::statistics::grouping::{
    GROUPED_INDICATORS, GroupAggregate, grouped_box_summaries, grouped_means, size_bucket_counts,
};
use crate::algorithm::statistics::metric::Metric;
use crate::algorithm::statistics::quantile::BoxSummary;
use crate::error::Result;
use crate::models::{Municipality, Region, SizeBucket, columns};

/// Named column pairs whose correlation is reported
pub const KEY_CORRELATIONS: [(&str, &str, &str); 4] = [
    (
        "corr_pct_elderly_hospitalizations",
        columns::PCT_ELDERLY,
        columns::HOSPITALIZATIONS_PER_1000,
    ),
    (
        "corr_gdp_procedures",
        columns::GDP_PER_CAPITA,
        columns::PROCEDURES_PER_1000,
    ),
    (
        "corr_pct_elderly_high_complexity",
        columns::PCT_ELDERLY,
        columns::HIGH_COMPLEXITY_PROCEDURES,
    ),
    (
        "corr_gdp_hospitalization_spend",
        columns::GDP_PER_CAPITA,
        columns::HOSPITALIZATION_SPEND_PER_CAPITA,
    ),
];

/// Statistics of a filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub headline: HeadlineMetrics,
    pub summary: ColumnSummary,
    /// Key correlations by metric name
    pub correlations: BTreeMap<String, Metric>,
    /// PNAHP heatmap
    pub correlation_matrix: CorrelationMatrix,
    pub elderly_cohorts: CohortComparison,
    pub size_buckets: BTreeMap<SizeBucket, usize>,
    pub grouped: Vec<GroupAggregate>,
    /// Hospitalizations per region
    pub hospitalizations_by_region: BTreeMap<Region, BoxSummary>,
    /// Procedures per size bucket
    pub procedures_by_size: BTreeMap<SizeBucket, BoxSummary>,
}

impl MetricsReport {
    /// Compute every statistic over `records`
    ///
    /// `total_count` is the size of the unfiltered dataset. An empty
    /// `records` slice is valid and yields undefined metrics.
    pub fn compute(records: &[Municipality], total_count: usize) -> Result<Self> {
        let summary = ColumnSummary::from_records(records);
        let headline = HeadlineMetrics::new(&summary, total_count)?;

        let correlations = KEY_CORRELATIONS
            .iter()
            .map(|&(name, x, y)| Ok((name.to_string(), correlation(records, x, y)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        let report = Self {
            headline,
            summary,
            correlations,
            correlation_matrix: CorrelationMatrix::compute(records, &columns::PNAHP_CORRELATION)?,
            elderly_cohorts: CohortComparison::elderly(records)?,
            size_buckets: size_bucket_counts(records),
            grouped: grouped_means(records, &GROUPED_INDICATORS)?,
            hospitalizations_by_region: grouped_box_summaries(
                records,
                |m| m.region,
                columns::HOSPITALIZATIONS_PER_1000,
            )?,
            procedures_by_size: grouped_box_summaries(
                records,
                Municipality::size_bucket,
                columns::PROCEDURES_PER_1000,
            )?,
        };

        for (name, metric) in report.metric_map() {
            if !metric.is_defined() {
                debug!("Metric {name} is undefined for {} rows", records.len());
            }
        }

        Ok(report)
    }

    /// Correlation by its reported name
    #[must_use]
    pub fn correlation(&self, name: &str) -> Option<Metric> {
        self.correlations.get(name).copied()
    }

    /// Flat metric name → value dictionary
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn metric_map(&self) -> BTreeMap<String, Metric> {
        let mut map = BTreeMap::new();
        map.insert(
            "count".to_string(),
            Metric::Defined(self.headline.municipality_count as f64),
        );
        for (column, mean) in &self.summary.means {
            map.insert(format!("mean_{column}"), *mean);
        }
        for (name, r) in &self.correlations {
            map.insert(name.clone(), *r);
        }

        let cohorts = &self.elderly_cohorts;
        map.insert("cohort_top_threshold".to_string(), cohorts.top_threshold);
        map.insert("cohort_bottom_threshold".to_string(), cohorts.bottom_threshold);
        for comparison in &cohorts.indicators {
            map.insert(format!("cohort_top_mean_{}", comparison.column), comparison.top_mean);
            map.insert(
                format!("cohort_bottom_mean_{}", comparison.column),
                comparison.bottom_mean,
            );
            map.insert(format!("cohort_ratio_{}", comparison.column), comparison.ratio);
        }
        map
    }
}
