//! Domain models for the municipal health dataset
//!
//! This module contains the municipality record, its categorical types and
//! the column reflection trait used by the statistics layer.

pub mod municipality;
pub mod types;

pub use municipality::{Municipality, elderly_percentage};
pub use types::{Region, SizeBucket};

/// Named numeric column access for tabular records
///
/// Implemented through `#[derive(NumericColumns)]`.
pub trait NumericRecord {
    /// Names of every numeric column, in declaration order
    const NUMERIC_COLUMNS: &'static [&'static str];

    /// Read a numeric column as `f64`, `None` if the column is unknown
    fn numeric_value(&self, column: &str) -> Option<f64>;
}

/// Column names of [`Municipality`]
pub mod columns {
    pub const POPULATION_TOTAL: &str = "population_total";
    pub const POPULATION_ELDERLY: &str = "population_elderly";
    pub const GDP_PER_CAPITA: &str = "gdp_per_capita";
    pub const HDI: &str = "hdi";
    pub const POPULATION_DENSITY: &str = "population_density";
    pub const PCT_ELDERLY: &str = "pct_elderly";
    pub const HOSPITALIZATIONS_PER_1000: &str = "hospitalizations_per_1000";
    pub const PROCEDURES_PER_1000: &str = "procedures_per_1000";
    pub const HOSPITALIZATION_SPEND_PER_CAPITA: &str = "hospitalization_spend_per_capita";
    pub const HIGH_COMPLEXITY_PROCEDURES: &str = "high_complexity_procedures";

    /// Health indicator columns (PNAHP and PNAES)
    pub const INDICATORS: [&str; 4] = [
        HOSPITALIZATIONS_PER_1000,
        PROCEDURES_PER_1000,
        HOSPITALIZATION_SPEND_PER_CAPITA,
        HIGH_COMPLEXITY_PROCEDURES,
    ];

    /// Variables of the PNAHP correlation heatmap
    pub const PNAHP_CORRELATION: [&str; 6] = [
        PCT_ELDERLY,
        GDP_PER_CAPITA,
        HDI,
        POPULATION_DENSITY,
        HOSPITALIZATIONS_PER_1000,
        HOSPITALIZATION_SPEND_PER_CAPITA,
    ];
}
