use std::collections::BTreeMap;

use serde::Serialize;

use carepath_core::models::domain::DomainId;
use carepath_core::models::result::{ScoringResult, UNCLASSIFIED};
use carepath_scoring::badge::{dashboard_badge, BadgeLevel};
use carepath_scoring::percentile::percentile;

/// What the binary prints: the scoring output plus optional display extras.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub result: ScoringResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<BTreeMap<DomainId, String>>,
    /// Outer `None` = not requested; inner `None` = nothing to average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Option<BadgeLevel>>,
}

pub fn build_report(result: ScoringResult, with_percentiles: bool, with_badge: bool) -> Report {
    let percentiles: Option<BTreeMap<DomainId, String>> = with_percentiles.then(|| {
        result
            .domains
            .iter()
            .map(|(id, d)| (*id, percentile_label(d.standardized)))
            .collect()
    });
    let badge = with_badge.then(|| dashboard_badge(&result));

    Report {
        result,
        percentiles,
        badge,
    }
}

/// Percentile of a standardized score for display, `"-"` when unscored.
pub fn percentile_label(standardized: Option<i32>) -> String {
    percentile(standardized.map(f64::from))
        .map(|p| p.to_string())
        .unwrap_or_else(|| UNCLASSIFIED.to_string())
}
