//! Filter stage
//!
//! Turns a validated [`FilterParams`] selection into a view over the
//! generated dataset.

pub mod criteria;
pub mod params;

pub use criteria::{FilterCriteria, MunicipalityFilter, apply_filter};
pub use params::{FilterParams, ValueRange};

use crate::generator::Dataset;
use crate::models::Municipality;

/// Records of `dataset` matching every criterion of `params`, in source order
#[must_use]
pub fn filter_dataset(dataset: &Dataset, params: &FilterParams) -> Vec<Municipality> {
    apply_filter(dataset.records(), &params.to_filter())
}
