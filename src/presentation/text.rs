//! Plain-text dashboard report
//!
//! Undefined metrics are written as `n/a`, never as a number.

use std::fmt::Write;

use serde::Serialize;

use crate::algorithm::statistics::{CorrelationStrength, Metric, MetricsReport, UndefinedReason};
use crate::config::DatasetConfig;
use crate::filter::FilterParams;
use crate::models::columns;

/// Whether richer municipalities see more specialized care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WealthAccess {
    /// GDP-procedures correlation above 0.3
    MoreAccess,
    /// GDP-procedures correlation at or below 0.3
    LittleRelation,
    /// Correlation undefined
    Undetermined,
}

impl WealthAccess {
    /// Classify the GDP-procedures correlation
    #[must_use]
    pub fn classify(metric: Metric) -> Self {
        match metric.value() {
            Some(r) if r > 0.3 => Self::MoreAccess,
            Some(_) => Self::LittleRelation,
            None => Self::Undetermined,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::MoreAccess => "Wealthier municipalities have more access",
            Self::LittleRelation => "Little relation with wealth",
            Self::Undetermined => "Not enough data",
        }
    }
}

/// Verbal findings derived from the key correlations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insights {
    /// Influence of the elderly share on hospitalizations
    pub hospital_influence: CorrelationStrength,
    pub wealth_access: WealthAccess,
}

impl Insights {
    /// Derive the findings of a report
    #[must_use]
    pub fn from_report(report: &MetricsReport) -> Self {
        Self {
            hospital_influence: CorrelationStrength::classify(correlation_of(
                report,
                "corr_pct_elderly_hospitalizations",
            )),
            wealth_access: WealthAccess::classify(correlation_of(report, "corr_gdp_procedures")),
        }
    }
}

const fn influence_message(strength: CorrelationStrength) -> &'static str {
    match strength {
        CorrelationStrength::Strong => "Strong positive influence",
        CorrelationStrength::Moderate => "Moderate influence",
        CorrelationStrength::Weak => "Weak influence",
        CorrelationStrength::Undetermined => "Not enough data",
    }
}

/// Render the full text report of one dashboard view
#[must_use]
pub fn render_report(
    config: &DatasetConfig,
    params: &FilterParams,
    report: &MetricsReport,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, config, params, report);
    out
}

fn write_report(
    out: &mut String,
    config: &DatasetConfig,
    params: &FilterParams,
    report: &MetricsReport,
) -> std::fmt::Result {
    let headline = &report.headline;

    writeln!(out, "Municipal Health Analysis - PNAHP & PNAES")?;
    write!(out, "{config}")?;
    write!(out, "{params}")?;

    writeln!(out, "\nOverview:")?;
    match headline.count_delta {
        Some(delta) => writeln!(
            out,
            "  Municipalities Analysed: {} ({delta:+})",
            headline.municipality_count
        )?,
        None => writeln!(
            out,
            "  Municipalities Analysed: {}",
            headline.municipality_count
        )?,
    }
    writeln!(out, "  Mean Population: {:.0}", headline.mean_population)?;
    writeln!(out, "  Mean % Elderly: {:.1}", headline.mean_pct_elderly)?;
    writeln!(out, "  Mean GDP per Capita: {:.0}", headline.mean_gdp_per_capita)?;

    let elderly_hosp = correlation_of(report, "corr_pct_elderly_hospitalizations");
    let gdp_proc = correlation_of(report, "corr_gdp_procedures");
    let elderly_complex = correlation_of(report, "corr_pct_elderly_high_complexity");
    let insights = Insights::from_report(report);

    writeln!(out, "\nPNAHP (Hospital Care):")?;
    writeln!(out, "  Correlation % Elderly x Hospitalizations: {elderly_hosp:.3}")?;
    writeln!(out, "  {}", influence_message(insights.hospital_influence))?;

    writeln!(out, "\nPNAES (Specialized Care):")?;
    writeln!(out, "  Correlation GDP x Procedures: {gdp_proc:.3}")?;
    writeln!(out, "  {}", insights.wealth_access.message())?;
    writeln!(
        out,
        "  Correlation % Elderly x High Complexity: {elderly_complex:.3}"
    )?;

    let cohorts = &report.elderly_cohorts;
    writeln!(out, "\nHigh vs Low % Elderly:")?;
    writeln!(
        out,
        "  Top quartile (>= {:.1}%): {} municipalities",
        cohorts.top_threshold, cohorts.top_count
    )?;
    writeln!(
        out,
        "  Bottom quartile (<= {:.1}%): {} municipalities",
        cohorts.bottom_threshold, cohorts.bottom_count
    )?;
    for comparison in &cohorts.indicators {
        writeln!(
            out,
            "  {}: {:.1} vs {:.1} ({:.1}x)",
            comparison.column, comparison.top_mean, comparison.bottom_mean, comparison.ratio
        )?;
    }

    writeln!(out, "\nMunicipalities by Size:")?;
    for (bucket, count) in &report.size_buckets {
        writeln!(out, "  {bucket}: {count}")?;
    }

    writeln!(out, "\nMean Procedures by Size and Region:")?;
    for group in &report.grouped {
        let procedures = group
            .means
            .get(columns::PROCEDURES_PER_1000)
            .copied()
            .unwrap_or(Metric::Undefined(UndefinedReason::EmptyInput));
        writeln!(
            out,
            "  {} / {}: {:.1} (n = {})",
            group.size_bucket, group.region, procedures, group.count
        )?;
    }

    Ok(())
}

/// A reported correlation, undefined when it was not computed
fn correlation_of(report: &MetricsReport, name: &str) -> Metric {
    report
        .correlation(name)
        .unwrap_or(Metric::Undefined(UndefinedReason::EmptyInput))
}
