use std::collections::BTreeMap;

use carepath_core::models::answer::AnswerSet;

use crate::config::ScoringConfig;

/// Coerced, reverse-coded item values keyed by item key.
///
/// `None` marks an item that is present but unanswered (blank, non-numeric,
/// a list), which is not the same as a score of zero.
pub type ScoredItems = BTreeMap<String, Option<f64>>;

/// Coerce every Likert item of `answers` to a number and reverse-code the
/// items listed in the config. Keys outside the item grammar are skipped.
pub fn reverse_score(answers: &AnswerSet, config: &ScoringConfig) -> ScoredItems {
    answers
        .items()
        .map(|(item, key, value)| {
            let scored = value.as_number().map(|v| {
                if config.is_reverse_coded(&item) {
                    config.likert.reverse(v)
                } else {
                    v
                }
            });
            (key.to_string(), scored)
        })
        .collect()
}
