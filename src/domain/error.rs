use std::io;

use thiserror::Error;

use super::catalog::CatalogError;

/// Library-wide error type for promptcard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No template is registered under the requested key.
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Free-text search was submitted without a topic.
    #[error("Search topic must not be empty")]
    EmptyTopic,

    /// Template catalog failed to load or validate.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A free-text template failed to render.
    #[error("Failed to render search template #{index}: {reason}")]
    TemplateRender { index: usize, reason: String },

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Theme preference could not be read or written.
    #[error("Preference error: {0}")]
    Preference(String),

    /// Invariant violated inside promptcard.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
