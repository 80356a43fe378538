//! Synthetic municipality dataset generation
//!
//! Produces a deterministic table of municipalities from a seed. Each column
//! is sampled for all rows before the next column starts, so the order of
//! the columns below fixes how the random stream is consumed:
//! population_total, population_elderly, gdp_per_capita, hdi, region,
//! population_density, then the noise of hospitalizations, procedures and
//! hospitalization spend. Changing that order changes every dataset.

pub mod cache;

pub use cache::DatasetCache;

use std::ops::Range;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::config::DatasetConfig;
use crate::error::{DashboardError, Result};
use crate::models::{Municipality, Region, elderly_percentage};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// First synthetic municipality code
pub const FIRST_ID: u32 = 100_000;

const POPULATION_TOTAL: Range<u64> = 10_000..800_000;
const POPULATION_ELDERLY: Range<u64> = 1_000..150_000;
const GDP_PER_CAPITA: Range<f64> = 8_000.0..45_000.0;
const HDI: Range<f64> = 0.5..0.9;
const POPULATION_DENSITY: Range<f64> = 10.0..500.0;

const HOSPITALIZATION_NOISE_SD: f64 = 10.0;
const PROCEDURE_NOISE_SD: f64 = 20.0;
const SPEND_NOISE_SD: f64 = 100.0;

/// Gaussian noise sources of the derived indicators
#[derive(Debug, Clone, Copy)]
struct NoiseModel {
    hospitalizations: Normal<f64>,
    procedures: Normal<f64>,
    spend: Normal<f64>,
}

impl NoiseModel {
    fn new() -> Result<Self> {
        Ok(Self {
            hospitalizations: Normal::new(0.0, HOSPITALIZATION_NOISE_SD)?,
            procedures: Normal::new(0.0, PROCEDURE_NOISE_SD)?,
            spend: Normal::new(0.0, SPEND_NOISE_SD)?,
        })
    }
}

/// PNAHP: admissions grow with the elderly share and with wealth
#[must_use]
pub fn hospitalizations_per_1000(pct_elderly: f64, gdp_per_capita: f64, noise: f64) -> f64 {
    pct_elderly * 2.0 + noise + gdp_per_capita / 1000.0
}

/// PNAES: ambulatory procedures driven mostly by wealth
#[must_use]
pub fn procedures_per_1000(gdp_per_capita: f64, pct_elderly: f64, noise: f64) -> f64 {
    gdp_per_capita / 200.0 + noise + pct_elderly * 1.5
}

/// PNAHP: spend follows admissions
#[must_use]
pub fn hospitalization_spend_per_capita(hospitalizations_per_1000: f64, noise: f64) -> f64 {
    hospitalizations_per_1000 * 50.0 + noise
}

/// PNAES: high-complexity procedures, noise free
#[must_use]
pub fn high_complexity_procedures(gdp_per_capita: f64, pct_elderly: f64) -> f64 {
    gdp_per_capita / 300.0 + pct_elderly * 2.0
}

/// An immutable generated dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    config: DatasetConfig,
    records: Vec<Municipality>,
}

/// Observed ranges of the two filterable numeric columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetBounds {
    /// (min, max) of `pct_elderly`
    pub pct_elderly: (f64, f64),
    /// (min, max) of `gdp_per_capita`
    pub gdp_per_capita: (f64, f64),
}

impl Dataset {
    /// Generate a dataset from a configuration
    pub fn generate(config: DatasetConfig) -> Result<Self> {
        generate_dataset(config)
    }

    /// Configuration that produced this dataset
    #[must_use]
    pub const fn config(&self) -> DatasetConfig {
        self.config
    }

    /// All records in generation order
    #[must_use]
    pub fn records(&self) -> &[Municipality] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed min/max of the filterable columns, `None` when empty
    #[must_use]
    pub fn bounds(&self) -> Option<DatasetBounds> {
        let pct_elderly = self
            .records
            .iter()
            .map(|m| m.pct_elderly)
            .minmax()
            .into_option()?;
        let gdp_per_capita = self
            .records
            .iter()
            .map(|m| m.gdp_per_capita)
            .minmax()
            .into_option()?;

        Some(DatasetBounds {
            pct_elderly,
            gdp_per_capita,
        })
    }
}

/// Generate `config.record_count` municipalities from `config.seed`
pub fn generate_dataset(config: DatasetConfig) -> Result<Dataset> {
    log_operation_start("Generating", "synthetic municipality dataset");
    let n = config.record_count;
    // Every row needs a code in FIRST_ID..=u32::MAX
    u32::try_from(n)
        .ok()
        .and_then(|count| FIRST_ID.checked_add(count))
        .ok_or(DashboardError::RecordCount(n))?;
    let noise = NoiseModel::new()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let population_total: Vec<u64> = (0..n)
        .map(|_| rng.random_range(POPULATION_TOTAL))
        .collect();
    // Capped so the elderly population never exceeds the total
    let population_elderly: Vec<u64> = population_total
        .iter()
        .map(|&total| rng.random_range(POPULATION_ELDERLY.start..POPULATION_ELDERLY.end.min(total + 1)))
        .collect();
    let gdp_per_capita: Vec<f64> = (0..n).map(|_| rng.random_range(GDP_PER_CAPITA)).collect();
    let hdi: Vec<f64> = (0..n).map(|_| rng.random_range(HDI)).collect();
    let region: Vec<Region> = (0..n)
        .map(|_| Region::ALL[rng.random_range(0..Region::ALL.len())])
        .collect();
    let population_density: Vec<f64> = (0..n)
        .map(|_| rng.random_range(POPULATION_DENSITY))
        .collect();

    let pct_elderly: Vec<f64> = population_elderly
        .iter()
        .zip(&population_total)
        .map(|(&elderly, &total)| elderly_percentage(elderly, total))
        .collect();

    let hospitalizations: Vec<f64> = (0..n)
        .map(|i| {
            hospitalizations_per_1000(
                pct_elderly[i],
                gdp_per_capita[i],
                noise.hospitalizations.sample(&mut rng),
            )
        })
        .collect();
    let procedures: Vec<f64> = (0..n)
        .map(|i| {
            procedures_per_1000(
                gdp_per_capita[i],
                pct_elderly[i],
                noise.procedures.sample(&mut rng),
            )
        })
        .collect();
    let spend: Vec<f64> = (0..n)
        .map(|i| hospitalization_spend_per_capita(hospitalizations[i], noise.spend.sample(&mut rng)))
        .collect();

    let records: Vec<Municipality> = (0..n)
        .zip(FIRST_ID..)
        .map(|(i, id)| Municipality {
            id,
            name: format!("Municipality {}", i + 1),
            population_total: population_total[i],
            population_elderly: population_elderly[i],
            gdp_per_capita: gdp_per_capita[i],
            hdi: hdi[i],
            region: region[i],
            population_density: population_density[i],
            pct_elderly: pct_elderly[i],
            hospitalizations_per_1000: hospitalizations[i],
            procedures_per_1000: procedures[i],
            hospitalization_spend_per_capita: spend[i],
            high_complexity_procedures: high_complexity_procedures(gdp_per_capita[i], pct_elderly[i]),
        })
        .collect();

    log_operation_complete(
        "generated",
        &format!("seed {}", config.seed),
        records.len(),
        None,
    );

    Ok(Dataset { config, records })
}
