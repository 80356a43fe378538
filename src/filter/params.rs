//! User-selected filter parameters
//!
//! Ranges are validated here, at the boundary, so that the filter stage can
//! assume `lo <= hi`.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::filter::criteria::MunicipalityFilter;
use crate::generator::Dataset;
use crate::models::{Region, columns};

/// Default elderly share slider range
pub const DEFAULT_ELDERLY_RANGE: (f64, f64) = (5.0, 25.0);

/// Default GDP per capita slider range
pub const DEFAULT_GDP_RANGE: (f64, f64) = (10_000.0, 40_000.0);

/// A validated inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    lo: f64,
    hi: f64,
}

impl ValueRange {
    /// Create a range for `field`, rejecting `lo > hi` and non-finite bounds
    pub fn new(field: &'static str, lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(DashboardError::InvalidRange { field, lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound
    #[must_use]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound
    #[must_use]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// Whether `value` lies within the range, bounds included
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.lo, self.hi)
    }
}

/// Filter selection of one dashboard interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterParams {
    /// Selected regions
    pub regions: BTreeSet<Region>,
    /// Inclusive `pct_elderly` range
    pub elderly_range: ValueRange,
    /// Inclusive `gdp_per_capita` range
    pub gdp_range: ValueRange,
}

impl FilterParams {
    /// Build and validate filter parameters
    pub fn new(
        regions: impl IntoIterator<Item = Region>,
        elderly_range: (f64, f64),
        gdp_range: (f64, f64),
    ) -> Result<Self> {
        Ok(Self {
            regions: regions.into_iter().collect(),
            elderly_range: ValueRange::new(columns::PCT_ELDERLY, elderly_range.0, elderly_range.1)?,
            gdp_range: ValueRange::new(columns::GDP_PER_CAPITA, gdp_range.0, gdp_range.1)?,
        })
    }

    /// The dashboard's initial selection: every region, default slider ranges
    #[must_use]
    pub fn dashboard_default() -> Self {
        Self {
            regions: Region::ALL.into_iter().collect(),
            elderly_range: ValueRange {
                lo: DEFAULT_ELDERLY_RANGE.0,
                hi: DEFAULT_ELDERLY_RANGE.1,
            },
            gdp_range: ValueRange {
                lo: DEFAULT_GDP_RANGE.0,
                hi: DEFAULT_GDP_RANGE.1,
            },
        }
    }

    /// A selection that keeps every record of `dataset`
    #[must_use]
    pub fn full(dataset: &Dataset) -> Self {
        let (elderly, gdp) = dataset
            .bounds()
            .map_or(((0.0, 100.0), (0.0, f64::MAX)), |b| (b.pct_elderly, b.gdp_per_capita));

        Self {
            regions: Region::ALL.into_iter().collect(),
            elderly_range: ValueRange {
                lo: elderly.0,
                hi: elderly.1,
            },
            gdp_range: ValueRange { lo: gdp.0, hi: gdp.1 },
        }
    }

    /// Combined filter: region AND elderly range AND GDP range
    #[must_use]
    pub fn to_filter(&self) -> MunicipalityFilter {
        MunicipalityFilter::All(vec![
            MunicipalityFilter::Regions(self.regions.clone()),
            MunicipalityFilter::ElderlyRange(self.elderly_range),
            MunicipalityFilter::GdpRange(self.gdp_range),
        ])
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::dashboard_default()
    }
}

impl fmt::Display for FilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filters:")?;
        let regions: Vec<&str> = self.regions.iter().map(|r| r.label()).collect();
        writeln!(f, "  Regions: {}", regions.join(", "))?;
        writeln!(f, "  % Elderly: {}", self.elderly_range)?;
        writeln!(f, "  GDP per Capita: {}", self.gdp_range)
    }
}
