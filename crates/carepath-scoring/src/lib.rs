//! carepath-scoring
//!
//! Survey scoring and risk classification. Pure computation, no I/O apart
//! from the explicit config loader. The pipeline runs strictly in order:
//! reverse-coding, domain aggregation, standardization and classification per
//! domain, the overall summary, then the feedback rules.

pub mod aggregate;
pub mod badge;
pub mod classify;
pub mod config;
pub mod error;
pub mod feedback;
pub mod percentile;
pub mod reference;
pub mod reverse;
pub mod rules;
pub mod standardize;
pub mod summary;

use std::collections::BTreeMap;

use carepath_core::models::answer::AnswerSet;
use carepath_core::models::domain::DomainId;
use carepath_core::models::result::{DomainScore, RiskTier, ScoringResult};

use config::ScoringConfig;
use feedback::RuleContext;

/// Score `answers` against the built-in instrument.
pub fn score(answers: &AnswerSet) -> ScoringResult {
    score_with(answers, ScoringConfig::builtin())
}

/// Score `answers` against `config`.
///
/// Never fails: unanswered items, empty domains and an empty answer set all
/// produce unscored values rather than errors. Every domain appears in the
/// output whether or not it could be scored.
pub fn score_with(answers: &AnswerSet, config: &ScoringConfig) -> ScoringResult {
    let items = reverse::reverse_score(answers, config);
    let aggregates = aggregate::aggregate_all(&items, config);

    let mut domains = BTreeMap::new();
    for id in DomainId::ALL {
        let score = match (config.domain(id), aggregates.get(&id)) {
            (Some(definition), Some(agg)) => DomainScore {
                raw_sum: agg.raw_sum,
                present_count: agg.present_count,
                mean: agg.mean,
                standardized: standardize::standardize(agg.mean, &definition.reference),
                risk: classify::classify(agg.mean, &definition.reference),
            },
            _ => DomainScore::unscored(),
        };
        domains.insert(id, score);
    }

    let means: BTreeMap<DomainId, Option<f64>> =
        domains.iter().map(|(id, d)| (*id, d.mean)).collect();
    let tiers: BTreeMap<DomainId, Option<RiskTier>> =
        domains.iter().map(|(id, d)| (*id, d.risk)).collect();

    let overall = summary::summarize(means.values().copied(), config);

    let ctx = RuleContext {
        answers,
        means: &means,
        tiers: &tiers,
    };
    let feedback = feedback::evaluate(rules::RULES, &ctx);

    tracing::debug!(
        items = items.len(),
        answered = items.values().filter(|v| v.is_some()).count(),
        scored_domains = means.values().filter(|m| m.is_some()).count(),
        overall_tier = carepath_core::models::result::tier_label(overall.risk),
        feedback = feedback.len(),
        "survey scored"
    );

    ScoringResult {
        domains,
        overall,
        feedback,
    }
}
