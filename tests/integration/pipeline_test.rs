use std::sync::Arc;

use municipal_health::{Dashboard, DatasetConfig, FilterParams, Region};

#[test]
fn test_interaction_reuses_cached_dataset() {
    let mut dashboard = Dashboard::new(DatasetConfig::default());

    let first = dashboard.dataset().unwrap();
    let _ = dashboard.interact(&FilterParams::dashboard_default()).unwrap();
    let second = dashboard.dataset().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_config_change_regenerates() {
    let mut dashboard = Dashboard::new(DatasetConfig::new(42, 50));
    let before = dashboard.dataset().unwrap();

    assert!(!dashboard.set_config(DatasetConfig::new(42, 50)));
    assert!(dashboard.set_config(DatasetConfig::new(7, 50)));

    let after = dashboard.dataset().unwrap();
    assert_eq!(after.config(), DatasetConfig::new(7, 50));
    assert_ne!(before.records(), after.records());
}

#[test]
fn test_default_view() {
    let mut dashboard = Dashboard::default();
    let params = FilterParams::dashboard_default();
    let view = dashboard.interact(&params).unwrap();

    assert!(view.records.len() <= 200);
    assert_eq!(view.metrics.headline.municipality_count, view.records.len());
    assert_eq!(view.params, params);
    assert_eq!(view.charts().unwrap().len(), 9);
    assert_eq!(view.record_batch().unwrap().num_rows(), view.records.len());
}

#[test]
fn test_same_interaction_same_view() {
    let mut dashboard = Dashboard::default();
    let params = FilterParams::new([Region::Northeast], (0.0, 50.0), (8_000.0, 45_000.0)).unwrap();

    let first = dashboard.interact(&params).unwrap();
    let second = dashboard.interact(&params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_view_serializes_undefined_as_null() {
    let mut dashboard = Dashboard::default();
    let params = FilterParams::new(Vec::<Region>::new(), (0.0, 100.0), (0.0, 100_000.0)).unwrap();
    let view = dashboard.interact(&params).unwrap();

    assert!(view.records.is_empty());
    let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
    assert!(json["metrics"]["headline"]["mean_population"].is_null());
    assert!(view.report().contains("n/a"));
}
