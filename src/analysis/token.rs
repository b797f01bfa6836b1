//! Tokens produced by the tokenizers and passed through the filter chain.
//!
//! Filters that feed frequency ranking never drop a token. They set its
//! `stopped` flag instead, so bigram construction still sees every position of
//! the original sequence and a stopped word keeps its two neighbours apart.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token::Token;
//!
//! let token = Token::new("profit", 0);
//! assert!(!token.is_stopped());
//! assert!(token.stop().is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One word of analyzed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Index in the tokenizer output (0-based). Filters keep it unchanged.
    pub position: usize,

    /// Byte range in the text the tokenizer saw.
    pub start_offset: usize,
    pub end_offset: usize,

    /// Set by a filter that rejected the token without removing it.
    pub stopped: bool,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token and return it flagged as stopped.
    pub fn stop(self) -> Self {
        Token {
            stopped: true,
            ..self
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The same token carrying different text, e.g. after stripping.
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Boxed iterator of tokens passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
