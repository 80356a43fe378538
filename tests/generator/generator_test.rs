use municipal_health::{Dataset, DatasetConfig, Region, SizeBucket};

use crate::utils::{EPSILON, municipality, test_config, test_dataset};

#[test]
fn test_same_seed_is_deterministic() {
    let first = test_dataset();
    let second = Dataset::generate(test_config()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(first.records()).unwrap(),
        serde_json::to_string(second.records()).unwrap()
    );
}

#[test]
fn test_different_seed_differs() {
    let first = Dataset::generate(DatasetConfig::new(1, 50)).unwrap();
    let second = Dataset::generate(DatasetConfig::new(2, 50)).unwrap();
    assert_ne!(first.records(), second.records());
}

#[test]
fn test_population_invariants() {
    let dataset = test_dataset();
    assert_eq!(dataset.len(), 200);

    for m in dataset.records() {
        assert!(m.population_total > 0);
        assert!(m.population_elderly <= m.population_total);
        assert!((0.0..=100.0).contains(&m.pct_elderly));
        assert!(m.gdp_per_capita > 0.0);
        assert!(m.population_density > 0.0);
    }
}

#[test]
fn test_pct_elderly_is_derived() {
    for m in test_dataset().records() {
        #[allow(clippy::cast_precision_loss)]
        let expected = m.population_elderly as f64 / m.population_total as f64 * 100.0;
        assert!((m.pct_elderly - expected).abs() < EPSILON);
    }
}

#[test]
fn test_ids_are_unique_and_sequential() {
    let dataset = test_dataset();
    for (i, m) in dataset.records().iter().enumerate() {
        assert_eq!(m.id as usize, 100_000 + i);
    }
}

#[test]
fn test_all_regions_sampled() {
    let dataset = test_dataset();
    for region in Region::ALL {
        assert!(dataset.records().iter().any(|m| m.region == region));
    }
}

#[test]
fn test_population_total_is_drawn_first() {
    // Every row's population_total comes off the stream before any other
    // column, so it does not depend on the record count.
    let short = Dataset::generate(DatasetConfig::new(42, 10)).unwrap();
    let long = Dataset::generate(DatasetConfig::new(42, 20)).unwrap();
    for (a, b) in short.records().iter().zip(long.records()) {
        assert_eq!(a.population_total, b.population_total);
    }
}

#[test]
fn test_single_record_example() {
    let m = municipality(1, Region::Southeast, 50_000, 10_000, 20_000.0);
    assert!((m.pct_elderly - 20.0).abs() < EPSILON);
    assert_eq!(m.size_bucket(), SizeBucket::Medium);
}

#[test]
fn test_bounds_cover_every_record() {
    let dataset = test_dataset();
    let bounds = dataset.bounds().unwrap();
    for m in dataset.records() {
        assert!(m.pct_elderly >= bounds.pct_elderly.0 && m.pct_elderly <= bounds.pct_elderly.1);
        assert!(
            m.gdp_per_capita >= bounds.gdp_per_capita.0
                && m.gdp_per_capita <= bounds.gdp_per_capita.1
        );
    }
}
