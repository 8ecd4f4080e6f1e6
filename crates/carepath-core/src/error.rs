use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("invalid item key: {0}")]
    InvalidItemKey(String),

    #[error("stored result is not a JSON object")]
    NotAnObject,
}
