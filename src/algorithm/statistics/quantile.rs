//! Quantiles and five-number summaries

use serde::Serialize;

use crate::algorithm::statistics::metric::{Metric, UndefinedReason};

/// Sort a copy of `values` in ascending order
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of already sorted values, linear interpolation between ranks
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sorted_quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// The `q`-th quantile (0 ≤ q ≤ 1) of `values`
///
/// Uses linear interpolation between the closest ranks. Undefined for an
/// empty slice.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> Metric {
    if values.is_empty() {
        return Metric::Undefined(UndefinedReason::EmptyInput);
    }
    Metric::from_value(sorted_quantile(&sorted(values), q))
}

/// Five-number summary of a non-empty sample (box plot data)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    /// Summarize `values`, `None` when empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted(values);

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1: sorted_quantile(&sorted, 0.25),
            median: sorted_quantile(&sorted, 0.5),
            q3: sorted_quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
