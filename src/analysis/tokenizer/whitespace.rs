//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on runs of Unicode whitespace.
///
/// No normalization happens: punctuation-only chunks such as `"-"` or `"42%"`
/// are tokens here, which is why page-level word counts differ from the
/// document-wide count produced by [`WordTokenizer`](super::word::WordTokenizer).
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Count whitespace-delimited chunks without building tokens.
    pub fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(token_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[token_start..idx],
                        tokens.len(),
                        token_start,
                        idx,
                    ));
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        if let Some(token_start) = start {
            tokens.push(Token::with_offsets(
                &text[token_start..],
                tokens.len(),
                token_start,
                text.len(),
            ));
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
