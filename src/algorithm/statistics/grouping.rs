//! Size bucket classification and grouped aggregation

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::statistics::descriptive::{column_values, mean};
use crate::algorithm::statistics::metric::Metric;
use crate::algorithm::statistics::quantile::BoxSummary;
use crate::error::Result;
use crate::models::{Municipality, Region, SizeBucket, columns};

/// Indicators aggregated per (size bucket, region)
pub const GROUPED_INDICATORS: [&str; 4] = [
    columns::PROCEDURES_PER_1000,
    columns::HIGH_COMPLEXITY_PROCEDURES,
    columns::HOSPITALIZATIONS_PER_1000,
    columns::HOSPITALIZATION_SPEND_PER_CAPITA,
];

/// Number of municipalities per size bucket, every bucket present
#[must_use]
pub fn size_bucket_counts(records: &[Municipality]) -> BTreeMap<SizeBucket, usize> {
    let mut counts: BTreeMap<SizeBucket, usize> =
        SizeBucket::ALL.into_iter().map(|bucket| (bucket, 0)).collect();
    for record in records {
        *counts.entry(record.size_bucket()).or_insert(0) += 1;
    }
    counts
}

/// Aggregate of one (size bucket, region) group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub size_bucket: SizeBucket,
    pub region: Region,
    pub count: usize,
    /// Mean of each aggregated indicator
    pub means: BTreeMap<String, Metric>,
}

/// Mean of `indicators` per observed (size bucket, region) pair
///
/// Groups are ordered by bucket, then region. Pairs with no municipality
/// are omitted.
pub fn grouped_means(
    records: &[Municipality],
    indicators: &[&str],
) -> Result<Vec<GroupAggregate>> {
    let groups = records
        .iter()
        .into_group_map_by(|m| (m.size_bucket(), m.region));

    groups
        .into_iter()
        .sorted_by_key(|(key, _)| *key)
        .map(|((size_bucket, region), members)| {
            let means = indicators
                .iter()
                .map(|&column| {
                    let values = column_values(members.iter().copied(), column)?;
                    Ok((column.to_string(), mean(&values)))
                })
                .collect::<Result<BTreeMap<_, _>>>()?;

            Ok(GroupAggregate {
                size_bucket,
                region,
                count: members.len(),
                means,
            })
        })
        .collect()
}

/// Five-number summaries of `column` per group key, empty groups omitted
pub fn grouped_box_summaries<K, F>(
    records: &[Municipality],
    key: F,
    column: &str,
) -> Result<BTreeMap<K, BoxSummary>>
where
    K: Ord + std::hash::Hash + Eq,
    F: Fn(&Municipality) -> K,
{
    records
        .iter()
        .into_group_map_by(|m| key(*m))
        .into_iter()
        .filter_map(|(group, members)| match column_values(members, column) {
            Ok(values) => BoxSummary::from_values(&values).map(|summary| Ok((group, summary))),
            Err(e) => Some(Err(e)),
        })
        .collect()
}
