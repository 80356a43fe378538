//! Municipality record model
//!
//! One row of the synthetic dataset: base demographic and economic
//! attributes plus the health indicators derived from them.

use macros::NumericColumns;
use serde::{Deserialize, Serialize};

use crate::models::types::{Region, SizeBucket};

/// A municipality with its demographic attributes and PNAHP/PNAES indicators
///
/// Records are immutable once generated. Derived fields are computed by the
/// generator from the base fields and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, NumericColumns)]
pub struct Municipality {
    /// Synthetic IBGE-style code
    #[column(skip)]
    pub id: u32,
    /// Synthetic label
    pub name: String,
    pub population_total: u64,
    /// Residents aged 60 or over, never above `population_total`
    pub population_elderly: u64,
    pub gdp_per_capita: f64,
    /// Human development index in (0, 1)
    pub hdi: f64,
    pub region: Region,
    pub population_density: f64,
    /// Share of elderly residents in percent
    pub pct_elderly: f64,
    /// PNAHP: hospital admissions per 1000 inhabitants
    pub hospitalizations_per_1000: f64,
    /// PNAES: ambulatory procedures per 1000 inhabitants
    pub procedures_per_1000: f64,
    /// PNAHP: hospitalization spend per inhabitant
    pub hospitalization_spend_per_capita: f64,
    /// PNAES: high-complexity procedures
    pub high_complexity_procedures: f64,
}

impl Municipality {
    /// Size bucket of this municipality
    #[must_use]
    pub const fn size_bucket(&self) -> SizeBucket {
        SizeBucket::from_population(self.population_total)
    }
}

/// Percentage of elderly residents
///
/// Returns 0 for an empty population rather than dividing by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elderly_percentage(population_elderly: u64, population_total: u64) -> f64 {
    if population_total == 0 {
        return 0.0;
    }
    population_elderly as f64 / population_total as f64 * 100.0
}
