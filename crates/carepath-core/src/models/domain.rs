use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The six clinical domains (sections) of the intake instrument.
///
/// Declaration order is the order domains appear in every output. Always
/// serialized under its canonical key; deserialization also accepts the
/// [`LEGACY_ALIASES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DomainId {
    PhysicalChange,
    HealthManagement,
    SocialSupport,
    PsychologicalBurden,
    SocialBurden,
    Resilience,
}

/// Misspelled domain keys found in historical documents.
///
/// This is the only place legacy spellings are recognised; everything past
/// ingestion sees canonical [`DomainId`]s.
pub const LEGACY_ALIASES: &[(&str, DomainId)] = &[
    ("phychologicalBurden", DomainId::PsychologicalBurden),
    ("psycologicalBurden", DomainId::PsychologicalBurden),
];

impl DomainId {
    pub const ALL: [DomainId; 6] = [
        DomainId::PhysicalChange,
        DomainId::HealthManagement,
        DomainId::SocialSupport,
        DomainId::PsychologicalBurden,
        DomainId::SocialBurden,
        DomainId::Resilience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::PhysicalChange => "physicalChange",
            DomainId::HealthManagement => "healthManagement",
            DomainId::SocialSupport => "socialSupport",
            DomainId::PsychologicalBurden => "psychologicalBurden",
            DomainId::SocialBurden => "socialBurden",
            DomainId::Resilience => "resilience",
        }
    }

    /// Exact canonical lookup, no aliases.
    pub fn from_canonical(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == key)
    }

    /// Canonical lookup falling back to [`LEGACY_ALIASES`].
    pub fn resolve(key: &str) -> Option<Self> {
        Self::from_canonical(key).or_else(|| {
            LEGACY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == key)
                .map(|(_, id)| *id)
        })
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| CoreError::UnknownDomain(s.to_string()))
    }
}

impl TryFrom<String> for DomainId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for DomainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        DomainId::try_from(key).map_err(serde::de::Error::custom)
    }
}
