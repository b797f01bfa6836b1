//! Stop-word filter.
//!
//! Stop words are dropped from word rankings but not from the raw token
//! sequence. The filter therefore defaults to removing them, and the ranking
//! chain switches it to marking mode so that a stopped token still occupies
//! its position between two neighbours.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token::Token;
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new().remove_stopped(false);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quarterly", 1),
//!     Token::new("revenue", 2),
//! ];
//!
//! let marked: Vec<bool> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .map(|t| t.is_stopped())
//!     .collect();
//! assert_eq!(marked, vec![true, false, false]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Removes or marks tokens found in a stop-word set.
///
/// The set is shared with the [`Lexicon`] it came from, so building a filter
/// per analysis does not copy the word list.
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
    remove_stopped: bool,
}

impl StopFilter {
    /// Filter on the built-in English stop words.
    pub fn new() -> Self {
        Self::from_lexicon(&Lexicon::english())
    }

    /// Filter on the stop words of `lexicon`.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        StopFilter {
            words: Arc::clone(lexicon.stop_words()),
            remove_stopped: true,
        }
    }

    /// Filter on an ad hoc word list. Entries are matched as given.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            remove_stopped: true,
        }
    }

    /// Drop stop words (`true`, the default) or keep them marked as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let words = Arc::clone(&self.words);
        let remove = self.remove_stopped;

        // Tokens stopped upstream pass through untouched.
        Box::new(tokens.filter_map(move |token| {
            if token.is_stopped() || !words.contains(&token.text) {
                Some(token)
            } else if remove {
                None
            } else {
                Some(token.stop())
            }
        }))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
