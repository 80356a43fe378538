//! Chart-ready data series
//!
//! Each dashboard chart is described as plain data: which columns map to
//! which visual channel and the values to draw. Rendering is left to the
//! consumer.

use serde::Serialize;

use crate::algorithm::statistics::{
    BoxSummary, CorrelationMatrix, Metric, MetricsReport, UndefinedReason,
};
use crate::error::{DashboardError, Result};
use crate::models::{Municipality, NumericRecord, Region, SizeBucket, columns};

/// Dashboard a chart belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DashboardSection {
    /// PNAHP, hospital care
    Hospital,
    /// PNAES, specialized care
    Specialized,
    /// Comparative analysis and insights
    Comparative,
}

/// Chart selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    ElderlyVsHospitalizations,
    GdpVsHospitalizationSpend,
    HospitalizationsByRegion,
    HospitalCorrelationHeatmap,
    GdpVsProcedures,
    ElderlyVsHighComplexity,
    ProceduresBySize,
    ProceduresBySizeAndRegion,
    ElderlyCohortComparison,
}

impl ChartKind {
    /// Every chart in dashboard order
    pub const ALL: [Self; 9] = [
        Self::ElderlyVsHospitalizations,
        Self::GdpVsHospitalizationSpend,
        Self::HospitalizationsByRegion,
        Self::HospitalCorrelationHeatmap,
        Self::GdpVsProcedures,
        Self::ElderlyVsHighComplexity,
        Self::ProceduresBySize,
        Self::ProceduresBySizeAndRegion,
        Self::ElderlyCohortComparison,
    ];

    /// Chart title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ElderlyVsHospitalizations => "% Elderly vs Hospitalizations",
            Self::GdpVsHospitalizationSpend => "GDP vs Hospitalization Spend",
            Self::HospitalizationsByRegion => "Hospitalizations by Region",
            Self::HospitalCorrelationHeatmap => "Correlation Matrix - PNAHP",
            Self::GdpVsProcedures => "GDP vs Ambulatory Procedures",
            Self::ElderlyVsHighComplexity => "% Elderly vs High-Complexity Procedures",
            Self::ProceduresBySize => "Ambulatory Procedures by Municipality Size",
            Self::ProceduresBySizeAndRegion => "Procedures by Size and Region",
            Self::ElderlyCohortComparison => "Health Indicators: High vs Low % Elderly",
        }
    }

    /// Dashboard section
    #[must_use]
    pub const fn section(self) -> DashboardSection {
        match self {
            Self::ElderlyVsHospitalizations
            | Self::GdpVsHospitalizationSpend
            | Self::HospitalizationsByRegion
            | Self::HospitalCorrelationHeatmap => DashboardSection::Hospital,
            Self::GdpVsProcedures
            | Self::ElderlyVsHighComplexity
            | Self::ProceduresBySize
            | Self::ProceduresBySizeAndRegion => DashboardSection::Specialized,
            Self::ElderlyCohortComparison => DashboardSection::Comparative,
        }
    }
}

/// Fit the renderer should overlay on a scatter plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trendline {
    Lowess,
    Ols,
}

/// Color channel of a scatter point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Numeric(f64),
    Category(String),
}

/// What the color channel encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorBy {
    Column(&'static str),
    Region,
}

/// One point of a scatter plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Hover label
    pub label: String,
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: ColorValue,
}

/// Scatter plot data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub x_column: String,
    pub y_column: String,
    pub size_column: String,
    pub color_column: String,
    pub trendline: Option<Trendline>,
    pub points: Vec<ScatterPoint>,
}

/// One box of a box plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub label: String,
    pub summary: BoxSummary,
}

/// Box plot data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxChart {
    pub value_column: String,
    pub groups: Vec<BoxGroup>,
}

/// One series of a grouped bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    /// One value per category; undefined where the group is empty
    pub values: Vec<Metric>,
}

/// Grouped bar chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

/// Chart body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ChartData {
    Scatter(ScatterChart),
    Box(BoxChart),
    Heatmap(CorrelationMatrix),
    GroupedBar(BarChart),
}

/// A renderable chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub section: DashboardSection,
    pub data: ChartData,
}

/// Build the data of chart `kind` from the filtered records and their metrics
pub fn chart_spec(
    kind: ChartKind,
    records: &[Municipality],
    report: &MetricsReport,
) -> Result<ChartSpec> {
    let data = match kind {
        ChartKind::ElderlyVsHospitalizations => scatter(
            records,
            columns::PCT_ELDERLY,
            columns::HOSPITALIZATIONS_PER_1000,
            columns::POPULATION_TOTAL,
            ColorBy::Column(columns::GDP_PER_CAPITA),
            Some(Trendline::Lowess),
        )?,
        ChartKind::GdpVsHospitalizationSpend => scatter(
            records,
            columns::GDP_PER_CAPITA,
            columns::HOSPITALIZATION_SPEND_PER_CAPITA,
            columns::POPULATION_TOTAL,
            ColorBy::Column(columns::PCT_ELDERLY),
            Some(Trendline::Ols),
        )?,
        ChartKind::GdpVsProcedures => scatter(
            records,
            columns::GDP_PER_CAPITA,
            columns::PROCEDURES_PER_1000,
            columns::POPULATION_TOTAL,
            ColorBy::Column(columns::PCT_ELDERLY),
            Some(Trendline::Lowess),
        )?,
        ChartKind::ElderlyVsHighComplexity => scatter(
            records,
            columns::PCT_ELDERLY,
            columns::HIGH_COMPLEXITY_PROCEDURES,
            columns::GDP_PER_CAPITA,
            ColorBy::Region,
            None,
        )?,
        ChartKind::HospitalizationsByRegion => ChartData::Box(BoxChart {
            value_column: columns::HOSPITALIZATIONS_PER_1000.to_string(),
            groups: report
                .hospitalizations_by_region
                .iter()
                .map(|(region, summary)| BoxGroup {
                    label: region.to_string(),
                    summary: *summary,
                })
                .collect(),
        }),
        ChartKind::ProceduresBySize => ChartData::Box(BoxChart {
            value_column: columns::PROCEDURES_PER_1000.to_string(),
            groups: report
                .procedures_by_size
                .iter()
                .map(|(bucket, summary)| BoxGroup {
                    label: bucket.to_string(),
                    summary: *summary,
                })
                .collect(),
        }),
        ChartKind::HospitalCorrelationHeatmap => {
            ChartData::Heatmap(report.correlation_matrix.clone())
        }
        ChartKind::ProceduresBySizeAndRegion => procedures_by_size_and_region(report),
        ChartKind::ElderlyCohortComparison => cohort_bars(report),
    };

    Ok(ChartSpec {
        kind,
        title: kind.title().to_string(),
        section: kind.section(),
        data,
    })
}

fn numeric(record: &Municipality, column: &str) -> Result<f64> {
    record
        .numeric_value(column)
        .ok_or_else(|| DashboardError::UnknownColumn(column.to_string()))
}

fn scatter(
    records: &[Municipality],
    x: &str,
    y: &str,
    size: &str,
    color: ColorBy,
    trendline: Option<Trendline>,
) -> Result<ChartData> {
    let points = records
        .iter()
        .map(|record| {
            let color_value = match color {
                ColorBy::Column(column) => ColorValue::Numeric(numeric(record, column)?),
                ColorBy::Region => ColorValue::Category(record.region.to_string()),
            };
            Ok(ScatterPoint {
                label: record.name.clone(),
                region: record.region,
                x: numeric(record, x)?,
                y: numeric(record, y)?,
                size: numeric(record, size)?,
                color: color_value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let color_column = match color {
        ColorBy::Column(column) => column,
        ColorBy::Region => "region",
    };

    Ok(ChartData::Scatter(ScatterChart {
        x_column: x.to_string(),
        y_column: y.to_string(),
        size_column: size.to_string(),
        color_column: color_column.to_string(),
        trendline,
        points,
    }))
}

/// Mean procedures per size bucket (categories) and region (series)
fn procedures_by_size_and_region(report: &MetricsReport) -> ChartData {
    let buckets: Vec<SizeBucket> = SizeBucket::ALL
        .into_iter()
        .filter(|bucket| report.grouped.iter().any(|g| g.size_bucket == *bucket))
        .collect();

    let series = Region::ALL
        .into_iter()
        .filter(|region| report.grouped.iter().any(|g| g.region == *region))
        .map(|region| BarSeries {
            name: region.to_string(),
            values: buckets
                .iter()
                .map(|bucket| {
                    report
                        .grouped
                        .iter()
                        .find(|g| g.size_bucket == *bucket && g.region == region)
                        .and_then(|g| g.means.get(columns::PROCEDURES_PER_1000).copied())
                        .unwrap_or(Metric::Undefined(UndefinedReason::EmptyInput))
                })
                .collect(),
        })
        .collect();

    ChartData::GroupedBar(BarChart {
        categories: buckets.iter().map(ToString::to_string).collect(),
        series,
    })
}

/// Indicator means of the high and low elderly cohorts
fn cohort_bars(report: &MetricsReport) -> ChartData {
    let series = report
        .elderly_cohorts
        .indicators
        .iter()
        .map(|comparison| BarSeries {
            name: comparison.column.clone(),
            values: vec![comparison.top_mean, comparison.bottom_mean],
        })
        .collect();

    ChartData::GroupedBar(BarChart {
        categories: vec!["High % elderly".to_string(), "Low % elderly".to_string()],
        series,
    })
}
