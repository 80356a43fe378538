//! Dashboard pipeline
//!
//! One interaction runs generate-or-reuse → filter → metrics, sequentially,
//! and yields a [`DashboardView`] for the presentation layer. The dataset
//! is the only state kept between interactions.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::algorithm::statistics::{Metric, MetricsReport};
use crate::config::DatasetConfig;
use crate::error::Result;
use crate::filter::{FilterParams, filter_dataset};
use crate::generator::{Dataset, DatasetCache};
use crate::models::Municipality;
use crate::presentation::{self, ChartKind, ChartSpec};
use crate::utils::logging::log_operation_complete;

/// Interactive dashboard session
#[derive(Debug, Default)]
pub struct Dashboard {
    cache: DatasetCache,
    config: DatasetConfig,
}

impl Dashboard {
    /// Create a session for `config`
    #[must_use]
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            cache: DatasetCache::new(),
            config,
        }
    }

    /// Active dataset configuration
    #[must_use]
    pub const fn config(&self) -> DatasetConfig {
        self.config
    }

    /// Switch to another dataset configuration
    ///
    /// The previous dataset is dropped from the cache. Returns whether the
    /// configuration changed.
    pub fn set_config(&mut self, config: DatasetConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.cache.invalidate(&self.config);
        self.config = config;
        true
    }

    /// The dataset of the active configuration, generated on first use
    pub fn dataset(&mut self) -> Result<Arc<Dataset>> {
        self.cache.get_or_generate(self.config)
    }

    /// Run one interaction with the given filter selection
    pub fn interact(&mut self, params: &FilterParams) -> Result<DashboardView> {
        let start = Instant::now();
        let dataset = self.dataset()?;
        let records = filter_dataset(&dataset, params);
        let metrics = MetricsReport::compute(&records, dataset.len())?;

        log_operation_complete(
            "filtered",
            &format!("from {}", dataset.len()),
            records.len(),
            Some(start.elapsed()),
        );

        Ok(DashboardView {
            config: self.config,
            params: params.clone(),
            records,
            metrics,
        })
    }
}

/// Output of one interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub config: DatasetConfig,
    pub params: FilterParams,
    /// Filtered records in dataset order
    pub records: Vec<Municipality>,
    pub metrics: MetricsReport,
}

impl DashboardView {
    /// Data of one chart
    pub fn chart(&self, kind: ChartKind) -> Result<ChartSpec> {
        presentation::chart_spec(kind, &self.records, &self.metrics)
    }

    /// Data of every chart, in dashboard order
    pub fn charts(&self) -> Result<Vec<ChartSpec>> {
        ChartKind::ALL.into_iter().map(|kind| self.chart(kind)).collect()
    }

    /// Metric name → value dictionary
    #[must_use]
    pub fn metric_map(&self) -> BTreeMap<String, Metric> {
        self.metrics.metric_map()
    }

    /// Filtered rows as a record batch
    pub fn record_batch(&self) -> Result<RecordBatch> {
        presentation::to_record_batch(&self.records)
    }

    /// Text report
    #[must_use]
    pub fn report(&self) -> String {
        presentation::render_report(&self.config, &self.params, &self.metrics)
    }

    /// Whole view as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
