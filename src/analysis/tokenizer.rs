//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into tokens. Two strategies are used when profiling a
//! document, and they deliberately disagree on what a "word" is:
//!
//! - [`word::WordTokenizer`] - lowercases and keeps only letters, apostrophes
//!   and hyphens; the basis of every document-wide word statistic
//! - [`whitespace::WhitespaceTokenizer`] - raw whitespace-delimited chunks; used
//!   for per-page word counts
//!
//! # Examples
//!
//! ```
//! use folio::analysis::tokenizer::Tokenizer;
//! use folio::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizing never fails: text that yields no words produces an empty stream.
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// analyses.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word;

pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;
