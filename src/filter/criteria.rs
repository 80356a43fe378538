//! Municipality filtering criteria
//!
//! Predicates over municipality records. Filtering never mutates the
//! source; it returns the matching records in source order.

use std::collections::BTreeSet;

use log::debug;

use crate::filter::params::ValueRange;
use crate::models::{Municipality, Region};
use crate::utils::logging::log_warning;

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a municipality
#[derive(Debug, Clone, PartialEq)]
pub enum MunicipalityFilter {
    /// Region membership
    Regions(BTreeSet<Region>),
    /// Share of elderly residents within an inclusive range
    ElderlyRange(ValueRange),
    /// GDP per capita within an inclusive range
    GdpRange(ValueRange),
    /// Combined filter that requires all criteria to be met
    All(Vec<MunicipalityFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<MunicipalityFilter>),
}

impl FilterCriteria<Municipality> for MunicipalityFilter {
    fn meets_criteria(&self, municipality: &Municipality) -> bool {
        match self {
            Self::Regions(regions) => regions.contains(&municipality.region),
            Self::ElderlyRange(range) => range.contains(municipality.pct_elderly),
            Self::GdpRange(range) => range.contains(municipality.gdp_per_capita),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(municipality)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(municipality)),
        }
    }
}

/// Apply a filter to a slice of records
///
/// Returns a new vector holding the matching records in their original
/// order. An empty result is valid.
pub fn apply_filter<F>(records: &[Municipality], filter: &F) -> Vec<Municipality>
where
    F: FilterCriteria<Municipality>,
{
    let filtered: Vec<Municipality> = records
        .iter()
        .filter(|m| filter.meets_criteria(m))
        .cloned()
        .collect();

    if filtered.is_empty() && !records.is_empty() {
        log_warning("No municipality matched the active filters", None);
    } else {
        debug!("Filter kept {} of {} municipalities", filtered.len(), records.len());
    }

    filtered
}
