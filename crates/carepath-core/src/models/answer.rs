use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::item::ItemKey;

/// A single raw answer as delivered by the intake form.
///
/// Form widgets are not consistent about types: Likert items usually arrive
/// as numbers but sometimes as numeric strings, reason checklists arrive as
/// string arrays, and skipped items arrive as `null` or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Numeric coercion used for Likert items.
    ///
    /// Returns `None` for anything that should count as unanswered: blank or
    /// unparsable text, non-finite numbers, lists and every other JSON shape.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => n.is_finite().then_some(*n),
            AnswerValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            AnswerValue::List(_) | AnswerValue::Other(_) => None,
        }
    }

    /// Free-text list view; `None` unless this value is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::List(value)
    }
}

/// All answers of one respondent, keyed by item key (`q1`, `q13_1_3`,
/// `q12_reasons`, ...). Unknown keys are carried but ignored by scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries whose key follows the Likert item grammar, with the parsed key.
    /// Reason lists and other composite keys are skipped.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, &str, &AnswerValue)> {
        self.0
            .iter()
            .filter_map(|(k, v)| ItemKey::parse(k).map(|item| (item, k.as_str(), v)))
    }

    /// Coerced numeric value of `key`, `None` when absent or unanswered.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AnswerValue::as_number)
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
