//! Configuration for dataset generation.
//!
//! Filter parameters live in [`crate::filter::FilterParams`]; this module
//! holds what determines the dataset itself.

use std::fmt;

use serde::Serialize;

/// Seed used by the dashboard
pub const DEFAULT_SEED: u64 = 42;

/// Number of municipalities generated by the dashboard
pub const DEFAULT_RECORD_COUNT: usize = 200;

/// Configuration for synthetic dataset generation
///
/// Two configurations that compare equal produce identical datasets, which
/// is what the dataset cache keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DatasetConfig {
    /// Seed of the pseudo-random generator
    pub seed: u64,
    /// Number of municipality records
    pub record_count: usize,
}

impl DatasetConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(seed: u64, record_count: usize) -> Self {
        Self { seed, record_count }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            record_count: DEFAULT_RECORD_COUNT,
        }
    }
}

impl fmt::Display for DatasetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Configuration:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Municipalities: {}", self.record_count)
    }
}
