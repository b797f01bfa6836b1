//! Normalizing word tokenizer.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};

/// Runs of lowercase ASCII letters, apostrophes and hyphens.
///
/// Every other character acts as a separator, which is the same as replacing it
/// with a space and splitting on whitespace.
const WORD_PATTERN: &str = r"[a-z'\-]+";

static WORD_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(WORD_PATTERN).expect("word pattern should be valid"))
});

/// A tokenizer producing normalized word tokens.
///
/// The text is lowercased, then split into maximal runs of `a-z`, `'` and `-`.
/// Runs of a single character are discarded. Leading and trailing apostrophes
/// or hyphens are kept here; stripping them is the job of
/// [`StripFilter`](crate::analysis::token_filter::strip::StripFilter).
///
/// Offsets refer to the lowercased text.
///
/// # Examples
///
/// ```
/// use folio::analysis::tokenizer::Tokenizer;
/// use folio::analysis::tokenizer::word::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new();
/// let words: Vec<String> = tokenizer
///     .tokenize("Q3 revenue: UP 12%, isn't it?")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(words, vec!["revenue", "up", "isn't", "it"]);
/// ```
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    pattern: Arc<Regex>,
    min_len: usize,
}

impl WordTokenizer {
    /// Create a word tokenizer that keeps runs longer than one character.
    pub fn new() -> Self {
        WordTokenizer {
            pattern: Arc::clone(&WORD_REGEX),
            min_len: 2,
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Minimum number of characters a run needs to become a token.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let lowered = text.to_lowercase();

        // Matches are ASCII-only, so byte length equals character count.
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&lowered)
            .filter(|mat| mat.len() >= self.min_len)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
