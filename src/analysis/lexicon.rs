//! Word lists used for filtering and sentiment classification.
//!
//! A [`Lexicon`] bundles three read-only sets: stop words (suppressed from the
//! ranked frequency lists only), positive-sentiment words and
//! negative-sentiment words. The built-in English lists are built once per
//! process and shared; alternate lists can be supplied directly or loaded from
//! JSON without touching any of the scoring code.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::english();
//! assert!(lexicon.is_stop_word("the"));
//! assert!(lexicon.is_positive("growth"));
//! assert!(lexicon.is_negative("risk"));
//!
//! let custom = Lexicon::from_words(["le", "la"], ["bon"], ["mauvais"]);
//! assert!(custom.is_positive("bon"));
//! assert!(!custom.is_stop_word("the"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::StopFilter;
use crate::error::{FolioError, Result};

/// Default English stop words.
///
/// Common function words plus a handful of very frequent verbs and nouns that
/// carry little topical information.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
    "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
    "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
    "new", "want", "because", "any", "these", "give", "day", "most", "us", "is", "was", "are",
    "were", "been", "being", "has", "had", "did", "does", "doing", "until", "while", "against",
    "between", "through", "during", "before", "above", "below", "down", "off", "under", "again",
    "further", "once", "here", "where", "why", "both", "each", "few", "more", "nor", "such", "same",
    "too", "very", "should", "i", "myself", "ours", "ourselves", "yours", "yourself", "himself",
    "hers", "herself", "itself", "theirs", "themselves", "whom", "those", "am", "having",
];

/// Default positive-sentiment words.
const DEFAULT_POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "outstanding", "positive", "success", "successful", "improve",
    "improvement", "benefit", "beneficial", "effective", "efficient", "achieve", "achievement",
    "growth", "increase", "gain", "profit", "opportunity", "strong", "best", "better", "high",
    "superior", "advantage", "innovation", "innovative", "progress", "valuable", "value",
    "significant", "remarkable", "exceptional", "impressive", "robust", "sustainable", "leading",
];

/// Default negative-sentiment words.
///
/// `"significant risk"` can never match a single token; it is kept so the list
/// stays identical to the published one.
const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "negative", "fail", "failure", "problem", "issue", "challenge", "risk",
    "concern", "decrease", "decline", "loss", "deficit", "weak", "low", "inferior",
    "disadvantage", "threat", "crisis", "difficult", "difficulty", "complex", "complexity",
    "costly", "expensive", "limited", "uncertain", "uncertainty", "adverse", "critical",
    "serious", "severe", "significant risk", "obstacle", "barrier", "constraint", "shortage",
    "delay", "reduce", "reduction",
];

fn word_set(words: &[&str]) -> Arc<HashSet<String>> {
    Arc::new(words.iter().map(|&s| s.to_string()).collect())
}

/// The built-in English lexicon, shared by every analysis that does not supply its own.
pub static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    stop_words: word_set(DEFAULT_STOP_WORDS),
    positive: word_set(DEFAULT_POSITIVE_WORDS),
    negative: word_set(DEFAULT_NEGATIVE_WORDS),
});

/// Three fixed word sets: stop words, positive words and negative words.
///
/// Cloning is cheap; the sets are reference counted and never mutated.
#[derive(Clone, Debug)]
pub struct Lexicon {
    stop_words: Arc<HashSet<String>>,
    positive: Arc<HashSet<String>>,
    negative: Arc<HashSet<String>>,
}

/// On-disk shape of a lexicon file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconFile {
    pub stop_words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        DEFAULT_LEXICON.clone()
    }

    /// Build a lexicon from prepared sets.
    pub fn new(
        stop_words: HashSet<String>,
        positive: HashSet<String>,
        negative: HashSet<String>,
    ) -> Self {
        Lexicon {
            stop_words: Arc::new(stop_words),
            positive: Arc::new(positive),
            negative: Arc::new(negative),
        }
    }

    /// Build a lexicon from word lists, lowercasing every entry.
    pub fn from_words<S, P, N>(stop_words: S, positive: P, negative: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        fn normalize<I>(words: I) -> HashSet<String>
        where
            I: IntoIterator,
            I::Item: AsRef<str>,
        {
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }

        Self::new(normalize(stop_words), normalize(positive), normalize(negative))
    }

    /// Parse a lexicon from JSON of the form
    /// `{"stop_words": [...], "positive": [...], "negative": [...]}`.
    ///
    /// Missing lists are empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| FolioError::config(format!("invalid lexicon: {e}")))?;
        Ok(file.into())
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Check if a word carries positive sentiment.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Check if a word carries negative sentiment.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// The stop-word set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// The positive-sentiment set.
    pub fn positive_words(&self) -> &Arc<HashSet<String>> {
        &self.positive
    }

    /// The negative-sentiment set.
    pub fn negative_words(&self) -> &Arc<HashSet<String>> {
        &self.negative
    }

    /// A stop filter over this lexicon's stop words that marks instead of removing.
    pub fn stop_filter(&self) -> StopFilter {
        StopFilter::from_lexicon(self).remove_stopped(false)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl From<LexiconFile> for Lexicon {
    fn from(file: LexiconFile) -> Self {
        Lexicon::from_words(file.stop_words, file.positive, file.negative)
    }
}
