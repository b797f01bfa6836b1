//! Term frequency counting and ranking.
//!
//! [`FrequencyCounter`] remembers the order in which terms were first seen, so
//! ranking by count with a stable sort keeps earlier terms ahead of later ones
//! with the same count. Hash map iteration order never leaks into the output.
//!
//! [`unigrams`] and [`bigrams`] work on tokens that went through the marking
//! filter chain of [`PipelineAnalyzer::terms`](crate::analysis::analyzer::PipelineAnalyzer::terms):
//! stopped tokens are skipped, and a bigram is only formed from two adjacent
//! tokens of the original sequence that are both unstopped.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::frequency::FrequencyCounter;
//!
//! let mut counter = FrequencyCounter::new();
//! for term in ["test", "word", "word", "test", "word", "example"] {
//!     counter.add(term);
//! }
//!
//! let ranked = counter.into_ranked(2);
//! assert_eq!(ranked[0].term, "word");
//! assert_eq!(ranked[0].count, 3);
//! assert_eq!(ranked[1].term, "test");
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// A ranked term and the number of times it occurred.
///
/// The term is a single word or two words joined by one space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    #[serde(rename = "word")]
    pub term: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new<S: Into<String>>(term: S, count: usize) -> Self {
        FrequencyEntry {
            term: term.into(),
            count,
        }
    }
}

/// Insertion-ordered term counter.
#[derive(Clone, Debug, Default)]
pub struct FrequencyCounter {
    index: AHashMap<String, usize>,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `term`.
    pub fn add<S>(&mut self, term: S)
    where
        S: AsRef<str> + Into<String>,
    {
        if let Some(&slot) = self.index.get(term.as_ref()) {
            self.entries[slot].count += 1;
            return;
        }

        let term: String = term.into();
        self.index.insert(term.clone(), self.entries.len());
        self.entries.push(FrequencyEntry::new(term, 1));
    }

    /// Occurrences of `term` so far.
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` most frequent terms, by descending count.
    ///
    /// Terms with equal counts stay in first-seen order.
    pub fn into_ranked(self, limit: usize) -> Vec<FrequencyEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        entries
    }
}

impl<S> FromIterator<S> for FrequencyCounter
where
    S: AsRef<str> + Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        for term in iter {
            counter.add(term);
        }
        counter
    }
}

/// Rank the unstopped tokens.
pub fn unigrams(tokens: &[Token], limit: usize) -> Vec<FrequencyEntry> {
    tokens
        .iter()
        .filter(|token| !token.is_stopped())
        .map(|token| token.text.as_str())
        .collect::<FrequencyCounter>()
        .into_ranked(limit)
}

/// Rank adjacent pairs of unstopped tokens, joined by a single space.
pub fn bigrams(tokens: &[Token], limit: usize) -> Vec<FrequencyEntry> {
    tokens
        .windows(2)
        .filter(|pair| !pair[0].is_stopped() && !pair[1].is_stopped())
        .map(|pair| format!("{} {}", pair[0].text, pair[1].text))
        .collect::<FrequencyCounter>()
        .into_ranked(limit)
}
