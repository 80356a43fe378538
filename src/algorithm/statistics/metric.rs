//! Metric values that may be undefined
//!
//! Statistics over a filtered view can be undefined (no rows, no variance,
//! a zero denominator). Those cases are carried as explicit values instead
//! of NaN so they cannot leak into further arithmetic.

use std::fmt;

use serde::{Serialize, Serializer};

/// Why a metric has no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UndefinedReason {
    /// No rows to compute over
    EmptyInput,
    /// Fewer rows than the statistic needs
    InsufficientRows,
    /// A column has zero variance
    ZeroVariance,
    /// The denominator of a ratio is zero
    ZeroDenominator,
    /// The computation produced a non-finite number
    NonFinite,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyInput => "no data",
            Self::InsufficientRows => "too few rows",
            Self::ZeroVariance => "zero variance",
            Self::ZeroDenominator => "zero denominator",
            Self::NonFinite => "non-finite result",
        };
        f.write_str(text)
    }
}

/// A statistic that is either a finite number or undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// A finite value
    Defined(f64),
    /// Not applicable for the current input
    Undefined(UndefinedReason),
}

impl Metric {
    /// Wrap a computed value, treating non-finite results as undefined
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Defined(value)
        } else {
            Self::Undefined(UndefinedReason::NonFinite)
        }
    }

    /// The value, if defined
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the metric has a value
    #[must_use]
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Apply `f` to a defined value
    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Defined(value) => Self::from_value(f(value)),
            undefined @ Self::Undefined(_) => undefined,
        }
    }

    /// `numerator / denominator`, undefined when either side is undefined
    /// or the denominator is zero
    #[must_use]
    pub fn ratio(numerator: Self, denominator: Self) -> Self {
        match (numerator, denominator) {
            (Self::Undefined(reason), _) | (_, Self::Undefined(reason)) => Self::Undefined(reason),
            (Self::Defined(_), Self::Defined(d)) if d == 0.0 => {
                Self::Undefined(UndefinedReason::ZeroDenominator)
            }
            (Self::Defined(n), Self::Defined(d)) => Self::from_value(n / d),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => match f.precision() {
                Some(precision) => write!(f, "{value:.precision$}"),
                None => write!(f, "{value}"),
            },
            Self::Undefined(_) => f.write_str("n/a"),
        }
    }
}

/// Defined metrics serialize as numbers, undefined ones as `null`
impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Defined(value) => serializer.serialize_f64(*value),
            Self::Undefined(_) => serializer.serialize_none(),
        }
    }
}
