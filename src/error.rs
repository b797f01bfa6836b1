//! Error types for the Folio library.
//!
//! The analysis engine itself never fails: tokenizers, filters, aggregators and
//! the orchestrator always produce a value. Errors only arise at the edges of the
//! crate, when a document is rejected before analysis, when a configuration or
//! lexicon file cannot be loaded, or when a summarization response cannot be
//! decoded.
//!
//! # Examples
//!
//! ```
//! use folio::error::{FolioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FolioError::document("No text found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O errors (reading pages, configs, lexicons)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document was rejected before analysis (wrong type, too large, no text)
    #[error("Document error: {0}")]
    Document(String),

    /// Invalid configuration or lexicon data
    #[error("Config error: {0}")]
    Config(String),

    /// A summarization response could not be decoded
    #[error("Summary error: {0}")]
    Summary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        FolioError::Document(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FolioError::Config(msg.into())
    }

    /// Create a new summary error.
    pub fn summary<S: Into<String>>(msg: S) -> Self {
        FolioError::Summary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FolioError::Other(msg.into())
    }

    /// Whether this error rejects the input document rather than signalling a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FolioError::Document(_))
    }
}
