use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use carepath_core::models::domain::DomainId;
use carepath_core::models::item::ItemKey;
use carepath_core::models::result::RiskTier;

use crate::error::ConfigError;
use crate::reference;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Population reference statistics used to standardize and classify a mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStats {
    pub mean: f64,
    pub sd: f64,
}

impl ReferenceStats {
    /// Means at or below this value are high risk.
    pub fn cutoff(&self) -> f64 {
        self.mean - self.sd
    }
}

/// Bounds of the Likert answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LikertScale {
    pub min: f64,
    pub max: f64,
}

impl LikertScale {
    pub const FIVE_POINT: LikertScale = LikertScale { min: 1.0, max: 5.0 };

    /// Mirror a value across the scale. Out-of-range input is not clamped.
    pub fn reverse(&self, value: f64) -> f64 {
        self.max + self.min - value
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for LikertScale {
    fn default() -> Self {
        Self::FIVE_POINT
    }
}

/// One clinical domain: which items feed it and how its mean is judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDefinition {
    pub id: DomainId,
    pub label: String,
    pub items: Vec<String>,
    pub reference: ReferenceStats,
}

/// Overall comments addressed to the respondent, selected by overall tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTemplates {
    pub high: String,
    pub caution: String,
    pub low: String,
    /// Used when no domain could be scored.
    pub no_data: String,
}

impl CommentTemplates {
    pub fn for_tier(&self, tier: Option<RiskTier>) -> &str {
        match tier {
            Some(RiskTier::High) => &self.high,
            Some(RiskTier::Caution) => &self.caution,
            Some(RiskTier::Low) => &self.low,
            None => &self.no_data,
        }
    }
}

impl Default for CommentTemplates {
    fn default() -> Self {
        Self {
            high: reference::COMMENT_HIGH.to_string(),
            caution: reference::COMMENT_CAUTION.to_string(),
            low: reference::COMMENT_LOW.to_string(),
            no_data: reference::COMMENT_NO_DATA.to_string(),
        }
    }
}

/// Reference tables driving the scoring pipeline.
///
/// Read-only once constructed. The built-in instrument is available through
/// [`ScoringConfig::builtin`]; alternative norms can be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub likert: LikertScale,
    /// Item numbers (`N` of `q<N>`) whose answers are reverse-coded.
    pub reverse_items: BTreeSet<u32>,
    pub domains: Vec<DomainDefinition>,
    pub overall: ReferenceStats,
    #[serde(default)]
    pub comments: CommentTemplates,
}

static BUILTIN: LazyLock<ScoringConfig> = LazyLock::new(|| ScoringConfig {
    config_version: CURRENT_VERSION,
    likert: LikertScale::FIVE_POINT,
    reverse_items: reference::REVERSE_ITEMS.iter().copied().collect(),
    domains: reference::builtin_domains(),
    overall: reference::OVERALL,
    comments: CommentTemplates::default(),
});

impl Default for ScoringConfig {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl ScoringConfig {
    /// The instrument as fielded, with its published reference norms.
    pub fn builtin() -> &'static ScoringConfig {
        &BUILTIN
    }

    pub fn domain(&self, id: DomainId) -> Option<&DomainDefinition> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Composite sub-items are never reverse-coded.
    pub fn is_reverse_coded(&self, item: &ItemKey) -> bool {
        !item.is_composite() && self.reverse_items.contains(&item.number)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let LikertScale { min, max } = self.likert;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::Invalid(format!(
                "likert scale [{min}, {max}] is empty"
            )));
        }

        for id in DomainId::ALL {
            match self.domains.iter().filter(|d| d.id == id).count() {
                0 => return Err(ConfigError::Invalid(format!("domain '{id}' is missing"))),
                1 => {}
                n => {
                    return Err(ConfigError::Invalid(format!(
                        "domain '{id}' is defined {n} times"
                    )));
                }
            }
        }

        for domain in &self.domains {
            if domain.items.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "domain '{}' has no items",
                    domain.id
                )));
            }
            if let Some(bad) = domain.items.iter().find(|k| ItemKey::parse(k).is_none()) {
                return Err(ConfigError::Invalid(format!(
                    "domain '{}' lists invalid item key '{bad}'",
                    domain.id
                )));
            }
            check_reference(domain.id.as_str(), &domain.reference)?;
        }
        check_reference("overall", &self.overall)
    }

    /// Parse, migrate and validate a JSON config document.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        Self::from_value(json)
    }

    pub fn from_value(json: serde_json::Value) -> Result<Self, ConfigError> {
        let declared = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        let on_disk_version =
            u32::try_from(declared).map_err(|_| ConfigError::UnsupportedVersion {
                found: declared,
                supported: CURRENT_VERSION,
            })?;

        let migrated = migrate(json, on_disk_version)?;
        let config: ScoringConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            version = config.config_version,
            "scoring config loaded"
        );
        Ok(config)
    }
}

fn check_reference(name: &str, stats: &ReferenceStats) -> Result<(), ConfigError> {
    if !stats.mean.is_finite() {
        return Err(ConfigError::Invalid(format!(
            "reference mean for '{name}' is not finite"
        )));
    }
    if !(stats.sd.is_finite() && stats.sd > 0.0) {
        return Err(ConfigError::Invalid(format!(
            "reference SD for '{name}' must be positive, got {}",
            stats.sd
        )));
    }
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: the answer scale became explicit (previously always 1–5)
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        obj.entry("likert").or_insert_with(|| {
            serde_json::json!({
                "min": LikertScale::FIVE_POINT.min,
                "max": LikertScale::FIVE_POINT.max,
            })
        });
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated scoring config v0 → v1 (added likert scale)");
    }

    Ok(json)
}
