use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or validating a [`crate::config::ScoringConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scoring config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("scoring config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("scoring config is not a JSON object")]
    NotAnObject,

    #[error("invalid scoring config: {0}")]
    Invalid(String),
}

/// Why a feedback rule predicate could not be evaluated.
///
/// A failing predicate counts as "did not match"; the engine logs the error
/// and moves on to the next rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("answer '{key}' should be a Likert value but is a list")]
    NotLikert { key: String },

    #[error("answer '{key}' should be a list of reasons")]
    NotAList { key: String },
}
