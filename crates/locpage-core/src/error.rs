// crates/locpage-core/src/error.rs

use thiserror::Error;

/// Errors produced by the engine.
///
/// Only a failed [`LocationIndex`](crate::LocationIndex) load is fatal;
/// everything else the resolver reports is [`PageError::NotFound`], which the
/// caller turns into its generic "not found" page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid location source: {0}")]
    InvalidSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "binary")]
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl PageError {
    pub fn not_found(what: impl Into<String>) -> Self {
        PageError::NotFound(what.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
