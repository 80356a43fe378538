use municipal_health::algorithm::statistics::{CorrelationStrength, MetricsReport};
use municipal_health::presentation::charts::ChartData;
use municipal_health::presentation::table::{from_record_batch, municipality_schema};
use municipal_health::presentation::{
    ChartKind, Insights, WealthAccess, chart_spec, render_report, to_json_rows, to_record_batch,
};
use municipal_health::{DatasetConfig, FilterParams, Municipality};

use crate::utils::{quartet, test_dataset};

#[test]
fn test_record_batch_has_one_row_per_municipality() {
    let dataset = test_dataset();
    let batch = to_record_batch(dataset.records()).unwrap();

    assert_eq!(batch.num_rows(), dataset.len());
    assert_eq!(batch.num_columns(), 13);
    let schema = batch.schema();
    assert!(schema.field_with_name("pct_elderly").is_ok());
    assert!(schema.field_with_name("region").is_ok());
}

#[test]
fn test_record_batch_reads_back() {
    let records = quartet();
    let batch = to_record_batch(&records).unwrap();
    let decoded: Vec<Municipality> = from_record_batch(&batch).unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn test_schema_lists_every_field() {
    let schema = municipality_schema().unwrap();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names[0], "id");
    assert!(names.contains(&"high_complexity_procedures"));
}

#[test]
fn test_empty_table() {
    let batch = to_record_batch(&[]).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(to_json_rows(&[]).unwrap(), "[]");
}

#[test]
fn test_scatter_has_a_point_per_record() {
    let dataset = test_dataset();
    let report = MetricsReport::compute(dataset.records(), dataset.len()).unwrap();
    let spec = chart_spec(ChartKind::ElderlyVsHospitalizations, dataset.records(), &report).unwrap();

    let ChartData::Scatter(scatter) = spec.data else {
        panic!("expected scatter data");
    };
    assert_eq!(scatter.points.len(), dataset.len());
    assert_eq!(scatter.x_column, "pct_elderly");
    assert!(scatter.trendline.is_some());
}

#[test]
fn test_heatmap_and_bars() {
    let dataset = test_dataset();
    let report = MetricsReport::compute(dataset.records(), dataset.len()).unwrap();

    let heatmap = chart_spec(ChartKind::HospitalCorrelationHeatmap, dataset.records(), &report).unwrap();
    let ChartData::Heatmap(matrix) = heatmap.data else {
        panic!("expected heatmap data");
    };
    assert_eq!(matrix.cells.len(), 6);

    let bars = chart_spec(ChartKind::ProceduresBySizeAndRegion, dataset.records(), &report).unwrap();
    let ChartData::GroupedBar(chart) = bars.data else {
        panic!("expected bar data");
    };
    for series in &chart.series {
        assert_eq!(series.values.len(), chart.categories.len());
    }

    let cohorts = chart_spec(ChartKind::ElderlyCohortComparison, dataset.records(), &report).unwrap();
    let ChartData::GroupedBar(chart) = cohorts.data else {
        panic!("expected bar data");
    };
    assert_eq!(chart.categories.len(), 2);
    assert_eq!(chart.series.len(), 3);
}

#[test]
fn test_every_chart_renders_on_empty_view() {
    let report = MetricsReport::compute(&[], 200).unwrap();
    for kind in ChartKind::ALL {
        assert!(chart_spec(kind, &[], &report).is_ok(), "{kind:?}");
    }
}

#[test]
fn test_report_marks_undefined_metrics() {
    let report = MetricsReport::compute(&[], 200).unwrap();
    let text = render_report(
        &DatasetConfig::default(),
        &FilterParams::dashboard_default(),
        &report,
    );

    assert!(text.contains("Municipalities Analysed: 0 (-200)"));
    assert!(text.contains("Correlation % Elderly x Hospitalizations: n/a"));
    assert!(!text.contains("NaN"));

    let insights = Insights::from_report(&report);
    assert_eq!(insights.hospital_influence, CorrelationStrength::Undetermined);
    assert_eq!(insights.wealth_access, WealthAccess::Undetermined);
}

#[test]
fn test_report_on_full_dataset() {
    let dataset = test_dataset();
    let report = MetricsReport::compute(dataset.records(), dataset.len()).unwrap();
    let text = render_report(&dataset.config(), &FilterParams::full(&dataset), &report);

    assert!(text.contains("Municipalities Analysed: 200\n"));
    assert!(text.contains("Municipalities by Size:"));
}
