use carepath_core::models::result::RiskTier;

use crate::config::ReferenceStats;

/// Bucket a mean into a risk tier against `reference`.
///
/// Thresholds are inclusive at the upper end of each band:
/// `mean <= mean_ref - sd` is high, `mean <= mean_ref` is caution, above is
/// low. A missing or non-finite mean stays unclassified.
pub fn classify(mean: Option<f64>, reference: &ReferenceStats) -> Option<RiskTier> {
    let mean = mean.filter(|m| m.is_finite())?;
    let tier = if mean <= reference.cutoff() {
        RiskTier::High
    } else if mean <= reference.mean {
        RiskTier::Caution
    } else {
        RiskTier::Low
    };
    Some(tier)
}
