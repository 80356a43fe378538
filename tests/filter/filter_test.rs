use std::collections::BTreeSet;

use municipal_health::filter::{FilterCriteria, MunicipalityFilter, apply_filter};
use municipal_health::{DashboardError, FilterParams, Region, filter_dataset};

use crate::utils::{municipality, test_dataset};

#[test]
fn test_filter_is_idempotent() {
    let dataset = test_dataset();
    let params = FilterParams::dashboard_default();

    let once = filter_dataset(&dataset, &params);
    let twice = apply_filter(&once, &params.to_filter());

    assert_eq!(once, twice);
}

#[test]
fn test_full_selection_is_identity() {
    let dataset = test_dataset();
    let params = FilterParams::full(&dataset);

    let filtered = filter_dataset(&dataset, &params);
    assert_eq!(filtered, dataset.records());
}

#[test]
fn test_filter_preserves_order() {
    let dataset = test_dataset();
    let filtered = filter_dataset(&dataset, &FilterParams::dashboard_default());

    assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_all_predicates_hold() {
    let dataset = test_dataset();
    let params = FilterParams::new(
        [Region::North, Region::South],
        (8.0, 30.0),
        (15_000.0, 35_000.0),
    )
    .unwrap();

    let filtered = filter_dataset(&dataset, &params);
    for m in &filtered {
        assert!(matches!(m.region, Region::North | Region::South));
        assert!((8.0..=30.0).contains(&m.pct_elderly));
        assert!((15_000.0..=35_000.0).contains(&m.gdp_per_capita));
    }

    let expected = dataset
        .records()
        .iter()
        .filter(|m| params.to_filter().meets_criteria(m))
        .count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn test_no_region_selected_gives_empty_view() {
    let dataset = test_dataset();
    let params = FilterParams::new(BTreeSet::new(), (0.0, 100.0), (0.0, 100_000.0)).unwrap();

    assert!(filter_dataset(&dataset, &params).is_empty());
}

#[test]
fn test_disjoint_range_gives_empty_view() {
    let dataset = test_dataset();
    let params = FilterParams::new(Region::ALL, (0.0, 100.0), (50_000.0, 60_000.0)).unwrap();

    assert!(filter_dataset(&dataset, &params).is_empty());
}

#[test]
fn test_bounds_are_inclusive() {
    let records = vec![
        municipality(1, Region::North, 50_000, 10_000, 10_000.0),
        municipality(2, Region::North, 50_000, 10_000, 40_000.0),
        municipality(3, Region::North, 50_000, 10_000, 40_000.5),
    ];
    let filter = MunicipalityFilter::GdpRange(
        FilterParams::dashboard_default().gdp_range,
    );

    let ids: Vec<u32> = apply_filter(&records, &filter).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = FilterParams::new(Region::ALL, (25.0, 5.0), (10_000.0, 40_000.0)).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidRange { .. }));
}

#[test]
fn test_filter_does_not_mutate_source() {
    let dataset = test_dataset();
    let before = dataset.records().to_vec();
    let _ = filter_dataset(&dataset, &FilterParams::dashboard_default());
    assert_eq!(before, dataset.records());
}
