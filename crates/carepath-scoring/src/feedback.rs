use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use carepath_core::models::answer::{AnswerSet, AnswerValue};
use carepath_core::models::domain::DomainId;
use carepath_core::models::result::{FeedbackItem, RiskTier, Severity};

use crate::error::RuleError;

/// A rule predicate. Must be pure; an `Err` or a panic is treated as "no match".
pub type Predicate = fn(&RuleContext<'_>) -> Result<bool, RuleError>;

/// One entry of the feedback rule table.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRule {
    pub id: &'static str,
    pub predicate: Predicate,
    pub message: &'static str,
    pub severity: Severity,
}

impl FeedbackRule {
    pub fn item(&self) -> FeedbackItem {
        FeedbackItem {
            text: self.message.to_string(),
            style: self.severity,
        }
    }
}

/// Everything a rule may look at: the raw answers and the scored domains.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub answers: &'a AnswerSet,
    pub means: &'a BTreeMap<DomainId, Option<f64>>,
    pub tiers: &'a BTreeMap<DomainId, Option<RiskTier>>,
}

impl<'a> RuleContext<'a> {
    /// Raw (not reverse-coded) Likert value of `key`.
    ///
    /// Absent or non-numeric answers are `Ok(None)`; a reason list sitting in a
    /// Likert slot is an error.
    pub fn likert(&self, key: &str) -> Result<Option<f64>, RuleError> {
        match self.answers.get(key) {
            None => Ok(None),
            Some(AnswerValue::List(_)) => Err(RuleError::NotLikert {
                key: key.to_string(),
            }),
            Some(value) => Ok(value.as_number()),
        }
    }

    /// Free-text reasons stored under `key`, empty when unanswered.
    pub fn reasons(&self, key: &str) -> Result<&'a [String], RuleError> {
        match self.answers.get(key) {
            None | Some(AnswerValue::Other(serde_json::Value::Null)) => Ok(&[]),
            Some(AnswerValue::List(items)) => Ok(items.as_slice()),
            Some(AnswerValue::Text(s)) if s.trim().is_empty() => Ok(&[]),
            Some(_) => Err(RuleError::NotAList {
                key: key.to_string(),
            }),
        }
    }

    pub fn tier(&self, id: DomainId) -> Option<RiskTier> {
        self.tiers.get(&id).copied().flatten()
    }

    pub fn mean(&self, id: DomainId) -> Option<f64> {
        self.means.get(&id).copied().flatten()
    }
}

/// Evaluate every rule and return one item per match, in table order.
///
/// Rules are independent: all matches fire, nothing is deduplicated, and a
/// failing predicate only drops its own rule. A predicate that panics counts
/// as failing; the panic is caught and the remaining rules still run.
pub fn evaluate(rules: &[FeedbackRule], ctx: &RuleContext<'_>) -> Vec<FeedbackItem> {
    rules
        .iter()
        .filter(|rule| {
            match panic::catch_unwind(AssertUnwindSafe(|| (rule.predicate)(ctx))) {
                Ok(Ok(matched)) => matched,
                Ok(Err(e)) => {
                    tracing::warn!(rule = rule.id, error = %e, "feedback rule skipped");
                    false
                }
                Err(_) => {
                    tracing::warn!(rule = rule.id, "feedback rule panicked; skipped");
                    false
                }
            }
        })
        .map(FeedbackRule::item)
        .collect()
}
