//! Pearson correlation between record columns

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::statistics::descriptive::column_values;
use crate::algorithm::statistics::metric::{Metric, UndefinedReason};
use crate::error::Result;
use crate::models::NumericRecord;

/// Pearson correlation coefficient of two equally long samples
///
/// Undefined with fewer than two pairs or when either sample has zero
/// variance. The result is clamped to [-1, 1] against rounding drift.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Metric {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    match n {
        0 => return Metric::Undefined(UndefinedReason::EmptyInput),
        1 => return Metric::Undefined(UndefinedReason::InsufficientRows),
        _ => {}
    }

    let (xs, ys) = (&xs[..n], &ys[..n]);
    if is_constant(xs) || is_constant(ys) {
        return Metric::Undefined(UndefinedReason::ZeroVariance);
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Metric::Undefined(UndefinedReason::ZeroVariance);
    }

    Metric::from_value(cov / (var_x.sqrt() * var_y.sqrt())).map(|r| r.clamp(-1.0, 1.0))
}

/// Whether every value equals the first
///
/// The centred sums of a constant column are not always exactly zero.
fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Correlation between two named columns of `records`
pub fn correlation<R: NumericRecord>(records: &[R], x: &str, y: &str) -> Result<Metric> {
    let xs = column_values(records, x)?;
    let ys = column_values(records, y)?;
    Ok(pearson(&xs, &ys))
}

/// Symmetric matrix of pairwise correlations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, in row/column order
    pub columns: Vec<String>,
    /// `cells[i][j]` is the correlation of `columns[i]` with `columns[j]`
    pub cells: Vec<Vec<Metric>>,
}

impl CorrelationMatrix {
    /// Compute the matrix for `columns` of `records`
    pub fn compute<R: NumericRecord>(records: &[R], columns: &[&str]) -> Result<Self> {
        let values = columns
            .iter()
            .map(|&column| column_values(records, column))
            .collect::<Result<Vec<_>>>()?;

        let k = columns.len();
        let mut cells = vec![vec![Metric::Undefined(UndefinedReason::EmptyInput); k]; k];
        for i in 0..k {
            cells[i][i] = pearson(&values[i], &values[i]);
        }
        for (i, j) in (0..k).tuple_combinations() {
            let r = pearson(&values[i], &values[j]);
            cells[i][j] = r;
            cells[j][i] = r;
        }

        Ok(Self {
            columns: columns.iter().map(ToString::to_string).collect(),
            cells,
        })
    }

    /// Correlation between two columns of the matrix
    #[must_use]
    pub fn get(&self, x: &str, y: &str) -> Option<Metric> {
        let i = self.columns.iter().position(|c| c == x)?;
        let j = self.columns.iter().position(|c| c == y)?;
        Some(self.cells[i][j])
    }
}

/// Verbal strength of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CorrelationStrength {
    /// r > 0.5
    Strong,
    /// 0.3 < r <= 0.5
    Moderate,
    /// r <= 0.3
    Weak,
    /// Correlation undefined
    Undetermined,
}

impl CorrelationStrength {
    /// Classify a correlation coefficient
    #[must_use]
    pub fn classify(metric: Metric) -> Self {
        match metric.value() {
            Some(r) if r > 0.5 => Self::Strong,
            Some(r) if r > 0.3 => Self::Moderate,
            Some(_) => Self::Weak,
            None => Self::Undetermined,
        }
    }
}
