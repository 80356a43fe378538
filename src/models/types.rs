//! Common domain type definitions
//!
//! This module contains the categorical types attached to municipality
//! records: the macro-region and the population size bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Brazilian macro-region of a municipality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Norte
    North,
    /// Nordeste
    Northeast,
    /// Sudeste
    Southeast,
    /// Sul
    South,
    /// Centro-Oeste
    #[serde(rename = "Central-West")]
    CentralWest,
}

impl Region {
    /// All regions in sampling order
    pub const ALL: [Self; 5] = [
        Self::North,
        Self::Northeast,
        Self::Southeast,
        Self::South,
        Self::CentralWest,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Northeast => "Northeast",
            Self::Southeast => "Southeast",
            Self::South => "South",
            Self::CentralWest => "Central-West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Region {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "north" | "norte" => Ok(Self::North),
            "northeast" | "nordeste" => Ok(Self::Northeast),
            "southeast" | "sudeste" => Ok(Self::Southeast),
            "south" | "sul" => Ok(Self::South),
            "central-west" | "centro-oeste" => Ok(Self::CentralWest),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

/// Municipality size classification by total population
///
/// Breakpoints are right-inclusive: a municipality with exactly 20 000
/// inhabitants is `Small`, one with 20 001 is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeBucket {
    /// Up to 20 000 inhabitants
    Small,
    /// 20 001 to 100 000 inhabitants
    Medium,
    /// 100 001 to 500 000 inhabitants
    Large,
    /// Above 500 000 inhabitants
    Metropolis,
}

impl SizeBucket {
    /// Upper (inclusive) population breakpoint of `Small`
    pub const SMALL_MAX: u64 = 20_000;
    /// Upper (inclusive) population breakpoint of `Medium`
    pub const MEDIUM_MAX: u64 = 100_000;
    /// Upper (inclusive) population breakpoint of `Large`
    pub const LARGE_MAX: u64 = 500_000;

    /// All buckets in ascending order
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Metropolis];

    /// Classify a population count
    #[must_use]
    pub const fn from_population(population_total: u64) -> Self {
        if population_total <= Self::SMALL_MAX {
            Self::Small
        } else if population_total <= Self::MEDIUM_MAX {
            Self::Medium
        } else if population_total <= Self::LARGE_MAX {
            Self::Large
        } else {
            Self::Metropolis
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Metropolis => "Metropolis",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
