use thiserror::Error;

/// Errors raised by the risk kernel and its I/O boundary.
#[derive(Debug, Error)]
pub enum RiskError {
    /// An argument fell outside the documented domain of an operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no body is currently selected")]
    NoSelection,

    #[error("body not found in snapshot: {0}")]
    BodyNotFound(String),

    /// Failure reported by an external backend (Monte Carlo, tractor models).
    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RiskError>;

/// Shorthand used by validating constructors.
pub(crate) fn invalid<T>(msg: impl Into<String>) -> Result<T> {
    Err(RiskError::InvalidInput(msg.into()))
}
