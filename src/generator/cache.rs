//! Memoized datasets keyed by generation parameters
//!
//! A dataset is generated at most once per distinct [`DatasetConfig`] and
//! shared as an immutable snapshot afterwards. Entries are only dropped on
//! an explicit `invalidate` or `clear`.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::generator::{Dataset, generate_dataset};

/// Cache of generated datasets
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: FxHashMap<DatasetConfig, Arc<Dataset>>,
}

impl DatasetCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `config`, generating it on first use
    pub fn get_or_generate(&mut self, config: DatasetConfig) -> Result<Arc<Dataset>> {
        if let Some(dataset) = self.entries.get(&config) {
            debug!("Dataset cache hit for seed {} ({} records)", config.seed, config.record_count);
            return Ok(Arc::clone(dataset));
        }

        debug!("Dataset cache miss for seed {} ({} records)", config.seed, config.record_count);
        let dataset = Arc::new(generate_dataset(config)?);
        self.entries.insert(config, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Cached dataset for `config`, without generating
    #[must_use]
    pub fn get(&self, config: &DatasetConfig) -> Option<Arc<Dataset>> {
        self.entries.get(config).cloned()
    }

    /// Whether a dataset for `config` is cached
    #[must_use]
    pub fn contains(&self, config: &DatasetConfig) -> bool {
        self.entries.contains_key(config)
    }

    /// Drop the entry for `config`, returning whether one existed
    pub fn invalidate(&mut self, config: &DatasetConfig) -> bool {
        self.entries.remove(config).is_some()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached datasets
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
