use carepath_core::models::result::OverallSummary;

use crate::classify::classify;
use crate::config::ScoringConfig;

/// Combine domain means into the overall mean, tier and comment.
///
/// Unscored domains are left out of the average rather than counted as zero.
pub fn summarize<I>(domain_means: I, config: &ScoringConfig) -> OverallSummary
where
    I: IntoIterator<Item = Option<f64>>,
{
    let present: Vec<f64> = domain_means
        .into_iter()
        .flatten()
        .filter(|m| m.is_finite())
        .collect();
    let mean = (!present.is_empty())
        .then(|| present.iter().sum::<f64>() / present.len() as f64)
        .filter(|m| m.is_finite());
    let risk = classify(mean, &config.overall);

    OverallSummary {
        mean,
        risk,
        comment: config.comments.for_tier(risk).to_string(),
    }
}
