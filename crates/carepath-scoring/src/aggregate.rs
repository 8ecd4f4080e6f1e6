use std::collections::BTreeMap;

use carepath_core::models::domain::DomainId;

use crate::config::{DomainDefinition, ScoringConfig};
use crate::reverse::ScoredItems;

/// Sum, count and mean of one domain's answered items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainAggregate {
    pub raw_sum: f64,
    pub present_count: u32,
    /// `None` when nothing was answered or the sum overflowed; never a
    /// synthetic zero.
    pub mean: Option<f64>,
}

pub fn aggregate(items: &ScoredItems, domain: &DomainDefinition) -> DomainAggregate {
    let values: Vec<f64> = domain
        .items
        .iter()
        .filter_map(|key| items.get(key).copied().flatten())
        .collect();

    let raw_sum: f64 = values.iter().sum();
    let present_count = values.len() as u32;
    let mean = (present_count > 0)
        .then(|| raw_sum / f64::from(present_count))
        .filter(|m| m.is_finite());

    DomainAggregate {
        raw_sum,
        present_count,
        mean,
    }
}

/// Aggregate every domain defined in `config`.
pub fn aggregate_all(
    items: &ScoredItems,
    config: &ScoringConfig,
) -> BTreeMap<DomainId, DomainAggregate> {
    let out_of_range = items
        .values()
        .flatten()
        .filter(|v| !config.likert.contains(**v))
        .count();
    if out_of_range > 0 {
        tracing::debug!(out_of_range, "answers outside the Likert scale scored as given");
    }

    config
        .domains
        .iter()
        .map(|domain| (domain.id, aggregate(items, domain)))
        .collect()
}
