//! Dashboard badge level.
//!
//! The case dashboard labels respondents from the average of their
//! standardized domain scores with fixed cut points. This is a display aid
//! only: it can disagree with the overall risk tier, which is classified from
//! the overall mean against its own reference norm and remains the
//! authoritative value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carepath_core::models::result::ScoringResult;

/// Average standardized score below which the badge is high.
pub const HIGH_BELOW: f64 = 40.0;
/// Average standardized score below which the badge is medium.
pub const MEDIUM_BELOW: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BadgeLevel {
    High,
    Medium,
    Low,
}

/// Badge for a scored result; `None` when no domain has a standardized score.
pub fn dashboard_badge(result: &ScoringResult) -> Option<BadgeLevel> {
    let scores: Vec<f64> = result
        .domains
        .values()
        .filter_map(|d| d.standardized)
        .map(f64::from)
        .collect();
    if scores.is_empty() {
        return None;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let level = if average < HIGH_BELOW {
        BadgeLevel::High
    } else if average < MEDIUM_BELOW {
        BadgeLevel::Medium
    } else {
        BadgeLevel::Low
    };
    Some(level)
}
