use thiserror::Error;

/// Top-level error type for the Crumb system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for CrumbError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrumbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CrumbError {
    fn from(err: toml::de::Error) -> Self {
        CrumbError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CrumbError {
    fn from(err: toml::ser::Error) -> Self {
        CrumbError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CrumbError {
    fn from(err: serde_json::Error) -> Self {
        CrumbError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Crumb operations.
pub type Result<T> = std::result::Result<T, CrumbError>;
