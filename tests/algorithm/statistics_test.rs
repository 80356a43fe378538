use municipal_health::algorithm::statistics::{
    CohortComparison, ColumnSummary, CorrelationMatrix, MetricsReport, column_mean, correlation,
    grouped_means, size_bucket_counts,
};
use municipal_health::models::{NumericRecord, columns};
use municipal_health::{DashboardError, Metric, Municipality, Region, SizeBucket, UndefinedReason};

use crate::utils::{EPSILON, municipality, quartet, test_dataset, with_indicators};

#[test]
fn test_empty_view_yields_undefined_metrics() {
    let empty: Vec<Municipality> = Vec::new();

    assert_eq!(
        column_mean(&empty, columns::PCT_ELDERLY).unwrap(),
        Metric::Undefined(UndefinedReason::EmptyInput)
    );
    assert!(
        !correlation(&empty, columns::PCT_ELDERLY, columns::HOSPITALIZATIONS_PER_1000)
            .unwrap()
            .is_defined()
    );

    let report = MetricsReport::compute(&empty, 200).unwrap();
    assert_eq!(report.headline.municipality_count, 0);
    assert_eq!(report.headline.count_delta, Some(-200));
    assert!(!report.headline.mean_population.is_defined());
    assert!(report.correlations.values().all(|r| !r.is_defined()));
    assert!(report.elderly_cohorts.indicators.iter().all(|c| !c.ratio.is_defined()));
    assert!(report.grouped.is_empty());
    assert!(report.size_buckets.values().all(|&count| count == 0));
}

#[test]
fn test_single_row_correlation_is_undefined() {
    let records = vec![municipality(1, Region::North, 50_000, 10_000, 20_000.0)];
    assert_eq!(
        correlation(&records, columns::PCT_ELDERLY, columns::GDP_PER_CAPITA).unwrap(),
        Metric::Undefined(UndefinedReason::InsufficientRows)
    );
}

#[test]
fn test_zero_variance_correlation_is_undefined() {
    let records = vec![
        municipality(1, Region::North, 50_000, 10_000, 10_000.0),
        municipality(2, Region::South, 80_000, 16_000, 30_000.0),
    ];
    // Both have 20% elderly
    assert_eq!(
        correlation(&records, columns::PCT_ELDERLY, columns::GDP_PER_CAPITA).unwrap(),
        Metric::Undefined(UndefinedReason::ZeroVariance)
    );
}

#[test]
fn test_repeating_fraction_column_is_zero_variance() {
    // 10000 / 30000 elderly is 33.333...% in every row
    let records: Vec<Municipality> = (0..11u32)
        .map(|i| {
            let region = Region::ALL[i as usize % Region::ALL.len()];
            municipality(i, region, 30_000, 10_000, 10_000.0 + f64::from(i) * 1_500.0)
        })
        .collect();

    for n in 2..=records.len() {
        let view = &records[..n];
        assert_eq!(
            correlation(view, columns::PCT_ELDERLY, columns::GDP_PER_CAPITA).unwrap(),
            Metric::Undefined(UndefinedReason::ZeroVariance),
            "{n} rows"
        );
        assert_eq!(
            correlation(view, columns::PCT_ELDERLY, columns::PCT_ELDERLY).unwrap(),
            Metric::Undefined(UndefinedReason::ZeroVariance),
            "{n} rows"
        );
    }
}

#[test]
fn test_self_correlation_is_one() {
    let dataset = test_dataset();
    for column in Municipality::NUMERIC_COLUMNS {
        let r = correlation(dataset.records(), column, column)
            .unwrap()
            .value()
            .unwrap();
        assert!((r - 1.0).abs() < EPSILON, "{column}: {r}");
    }
}

#[test]
fn test_generated_relationships_are_positive() {
    let dataset = test_dataset();
    let r = correlation(
        dataset.records(),
        columns::HOSPITALIZATIONS_PER_1000,
        columns::HOSPITALIZATION_SPEND_PER_CAPITA,
    )
    .unwrap()
    .value()
    .unwrap();
    assert!(r > 0.9);
}

#[test]
fn test_unknown_column_is_an_error() {
    let dataset = test_dataset();
    let err = correlation(dataset.records(), "beds", columns::PCT_ELDERLY).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownColumn(column) if column == "beds"));
}

#[test]
fn test_correlation_matrix_is_symmetric() {
    let dataset = test_dataset();
    let matrix = CorrelationMatrix::compute(dataset.records(), &columns::PNAHP_CORRELATION).unwrap();

    assert_eq!(matrix.columns.len(), 6);
    for i in 0..6 {
        let diagonal = matrix.cells[i][i].value().unwrap();
        assert!((diagonal - 1.0).abs() < EPSILON);
        for j in 0..6 {
            assert_eq!(matrix.cells[i][j], matrix.cells[j][i]);
        }
    }
    assert_eq!(
        matrix.get(columns::PCT_ELDERLY, columns::HDI),
        Some(matrix.cells[0][2])
    );
}

#[test]
fn test_cohort_ratio_is_one_when_means_match() {
    let records: Vec<Municipality> = quartet()
        .into_iter()
        .map(|m| with_indicators(m, 80.0, 150.0, 4_000.0))
        .collect();

    let cohorts = CohortComparison::elderly(&records).unwrap();
    for comparison in &cohorts.indicators {
        assert_eq!(comparison.ratio, Metric::Defined(1.0));
    }
}

#[test]
fn test_cohorts_split_by_quartiles() {
    let records = quartet();
    let cohorts = CohortComparison::elderly(&records).unwrap();

    // pct_elderly is 10, 15, 20, 25
    assert_eq!(cohorts.top_count, 1);
    assert_eq!(cohorts.bottom_count, 1);
    let hosp = cohorts
        .indicator(columns::HOSPITALIZATIONS_PER_1000)
        .unwrap();
    assert_eq!(hosp.top_mean, Metric::Defined(records[3].hospitalizations_per_1000));
    assert_eq!(hosp.bottom_mean, Metric::Defined(records[0].hospitalizations_per_1000));
}

#[test]
fn test_cohort_ratio_undefined_on_zero_bottom_mean() {
    let mut records = quartet();
    records[0] = with_indicators(records[0].clone(), 0.0, 0.0, 0.0);

    let cohorts = CohortComparison::elderly(&records).unwrap();
    for comparison in &cohorts.indicators {
        assert_eq!(
            comparison.ratio,
            Metric::Undefined(UndefinedReason::ZeroDenominator)
        );
    }
}

#[test]
fn test_size_buckets_are_total_and_exclusive() {
    let dataset = test_dataset();
    let counts = size_bucket_counts(dataset.records());

    assert_eq!(counts.len(), 4);
    assert_eq!(counts.values().sum::<usize>(), dataset.len());
}

#[test]
fn test_size_bucket_boundaries() {
    let small = municipality(1, Region::North, 20_000, 2_000, 10_000.0);
    let medium = municipality(2, Region::North, 20_001, 2_000, 10_000.0);
    let large = municipality(3, Region::North, 500_000, 2_000, 10_000.0);
    let metropolis = municipality(4, Region::North, 500_001, 2_000, 10_000.0);

    assert_eq!(small.size_bucket(), SizeBucket::Small);
    assert_eq!(medium.size_bucket(), SizeBucket::Medium);
    assert_eq!(large.size_bucket(), SizeBucket::Large);
    assert_eq!(metropolis.size_bucket(), SizeBucket::Metropolis);
}

#[test]
fn test_grouped_means() {
    let records = vec![
        with_indicators(municipality(1, Region::North, 50_000, 5_000, 10_000.0), 10.0, 100.0, 500.0),
        with_indicators(municipality(2, Region::North, 60_000, 6_000, 10_000.0), 20.0, 200.0, 1_000.0),
        with_indicators(municipality(3, Region::South, 60_000, 6_000, 10_000.0), 30.0, 300.0, 1_500.0),
        with_indicators(municipality(4, Region::North, 700_000, 6_000, 10_000.0), 40.0, 400.0, 2_000.0),
    ];

    let groups = grouped_means(&records, &[columns::PROCEDURES_PER_1000]).unwrap();
    assert_eq!(groups.len(), 3);

    let first = &groups[0];
    assert_eq!((first.size_bucket, first.region), (SizeBucket::Medium, Region::North));
    assert_eq!(first.count, 2);
    assert_eq!(first.means[columns::PROCEDURES_PER_1000], Metric::Defined(150.0));

    assert_eq!((groups[1].size_bucket, groups[1].region), (SizeBucket::Medium, Region::South));
    assert_eq!((groups[2].size_bucket, groups[2].region), (SizeBucket::Metropolis, Region::North));
    assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), records.len());
}

#[test]
fn test_summary_means() {
    let records = quartet();
    let summary = ColumnSummary::from_records(&records);

    assert_eq!(summary.count, 4);
    let mean_pct = summary.mean(columns::PCT_ELDERLY).unwrap().value().unwrap();
    assert!((mean_pct - 17.5).abs() < EPSILON);
    assert!(matches!(
        summary.mean("region"),
        Err(DashboardError::UnknownColumn(column)) if column == "region"
    ));
}

#[test]
fn test_metric_map_has_named_entries() {
    let dataset = test_dataset();
    let report = MetricsReport::compute(dataset.records(), dataset.len()).unwrap();
    let map = report.metric_map();

    assert_eq!(map["count"], Metric::Defined(200.0));
    assert!(map.contains_key("mean_pct_elderly"));
    assert!(map.contains_key("corr_pct_elderly_hospitalizations"));
    assert!(map.contains_key("cohort_ratio_hospitalizations_per_1000"));
    assert_eq!(report.headline.count_delta, None);
}
