//! # Folio
//!
//! Statistical profiles of extracted document text.
//!
//! ## Features
//!
//! - Normalizing word tokenizer and marking token filters
//! - Insertion-stable word and bigram frequency ranking
//! - Dictionary-based sentiment with a neutral bias
//! - Per-page word, character and sentence counts
//! - Readability figures: reading time, vocabulary richness, text density
//! - Summarization request construction and response decoding
//!
//! ## Example
//!
//! ```
//! use folio::prelude::*;
//!
//! let document = RawDocument::new(
//!     vec!["Strong growth this quarter. Margins improved across every region.".into()],
//!     "q3.pdf",
//!     4096,
//! );
//!
//! let report = DocumentAnalyzer::default().analyze(&document);
//! assert_eq!(report.total_pages, 1);
//! assert_eq!(report.sentiment.overall, SentimentLabel::Positive);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod report;
pub mod summarize;

pub mod prelude {
    pub use crate::analysis::frequency::FrequencyEntry;
    pub use crate::analysis::lexicon::Lexicon;
    pub use crate::analysis::page::PageStat;
    pub use crate::analysis::sentiment::{SentimentLabel, SentimentScore};
    pub use crate::config::{AnalysisConfig, FolioConfig, SummaryConfig};
    pub use crate::document::{DocumentPolicy, RawDocument, format_file_size};
    pub use crate::engine::{DocumentAnalyzer, analyze_document};
    pub use crate::error::{FolioError, Result};
    pub use crate::report::AnalysisReport;
    pub use crate::summarize::{SmartSummary, SummaryRequest};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
