use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::domain::DomainId;
use crate::error::CoreError;

/// Label shown wherever a score or tier could not be computed.
pub const UNCLASSIFIED: &str = "-";

/// Risk tier assigned to a domain mean or the overall mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    #[serde(rename = "고위험집단")]
    High,
    #[serde(rename = "주의집단")]
    Caution,
    #[serde(rename = "저위험집단")]
    Low,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "고위험집단",
            RiskTier::Caution => "주의집단",
            RiskTier::Low => "저위험집단",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [RiskTier::High, RiskTier::Caution, RiskTier::Low]
            .into_iter()
            .find(|t| t.label() == label)
    }
}

/// Display label for an optional tier, `"-"` when unclassified.
pub fn tier_label(tier: Option<RiskTier>) -> &'static str {
    tier.map(|t| t.label()).unwrap_or(UNCLASSIFIED)
}

/// Serde adapter storing `Option<RiskTier>` as its label, `"-"` for `None`.
pub mod tier_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{tier_label, RiskTier, UNCLASSIFIED};

    pub fn serialize<S: Serializer>(tier: &Option<RiskTier>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(tier_label(*tier))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RiskTier>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") | Some(UNCLASSIFIED) => Ok(None),
            Some(label) => RiskTier::from_label(label)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown risk tier: {label}"))),
        }
    }
}

/// Per-domain scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DomainScore {
    /// Sum of reverse-coded values over answered items.
    pub raw_sum: f64,
    pub present_count: u32,
    /// `None` when no item of the domain was answered.
    pub mean: Option<f64>,
    /// T-like score, centred on 50.
    pub standardized: Option<i32>,
    #[serde(default, with = "tier_serde")]
    #[ts(type = "string")]
    pub risk: Option<RiskTier>,
}

impl DomainScore {
    /// A domain with no answered items.
    pub fn unscored() -> Self {
        Self {
            raw_sum: 0.0,
            present_count: 0,
            mean: None,
            standardized: None,
            risk: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverallSummary {
    pub mean: Option<f64>,
    #[serde(default, with = "tier_serde")]
    #[ts(type = "string")]
    pub risk: Option<RiskTier>,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

/// One advisory message produced by a matching feedback rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackItem {
    pub text: String,
    pub style: Severity,
}

/// Everything the scoring engine hands to persistence and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringResult {
    /// Always holds all six domains, scored or not.
    pub domains: BTreeMap<DomainId, DomainScore>,
    pub overall: OverallSummary,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
}

impl ScoringResult {
    pub fn domain(&self, id: DomainId) -> Option<&DomainScore> {
        self.domains.get(&id)
    }

    /// Read a result document written by an earlier version of the system.
    ///
    /// Legacy misspelled domain keys are mapped to their canonical id here,
    /// once. When a document carries both spellings the canonical entry wins.
    /// Unknown domain keys are dropped and missing domains come back unscored.
    pub fn from_stored(value: serde_json::Value) -> Result<Self, CoreError> {
        let serde_json::Value::Object(mut doc) = value else {
            return Err(CoreError::NotAnObject);
        };

        if let Some(serde_json::Value::Object(raw_domains)) = doc.remove("domains") {
            let mut resolved = serde_json::Map::new();
            let (canonical, legacy): (Vec<_>, Vec<_>) = raw_domains
                .into_iter()
                .partition(|(key, _)| DomainId::from_canonical(key).is_some());

            for (key, entry) in canonical {
                resolved.insert(key, entry);
            }
            for (key, entry) in legacy {
                if let Some(id) = DomainId::resolve(&key) {
                    resolved.entry(id.as_str().to_string()).or_insert(entry);
                }
            }
            doc.insert("domains".to_string(), serde_json::Value::Object(resolved));
        }

        let mut result: ScoringResult = serde_json::from_value(serde_json::Value::Object(doc))?;
        for id in DomainId::ALL {
            result.domains.entry(id).or_insert_with(DomainScore::unscored);
        }
        Ok(result)
    }
}
