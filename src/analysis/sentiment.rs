//! Dictionary-based sentiment scoring.
//!
//! Tokens are looked up in the positive and negative word sets of a
//! [`Lexicon`]. The two hit counts become rounded percentages, and the overall
//! label only leaves `neutral` when one side outweighs the other by more than
//! the configured bias factor (1.2 by default).
//!
//! # Examples
//!
//! ```
//! use folio::analysis::lexicon::Lexicon;
//! use folio::analysis::sentiment::{SentimentCounts, SentimentLabel, SentimentScore};
//!
//! let lexicon = Lexicon::english();
//! let counts = SentimentCounts::tally(["strong", "growth", "risk"], &lexicon);
//! assert_eq!(counts.positive, 2);
//! assert_eq!(counts.negative, 1);
//!
//! let score = SentimentScore::from_counts(counts, 1.2);
//! assert_eq!((score.positive, score.negative, score.neutral), (67, 33, 0));
//! assert_eq!(score.overall, SentimentLabel::Positive);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::Lexicon;

/// Overall tone of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw lexicon hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Count words found in the positive and negative sets.
    ///
    /// A word present in both sets counts on both sides.
    pub fn tally<I>(words: I, lexicon: &Lexicon) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counts = SentimentCounts::default();
        for word in words {
            let word = word.as_ref();
            if lexicon.is_positive(word) {
                counts.positive += 1;
            }
            if lexicon.is_negative(word) {
                counts.negative += 1;
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Sentiment percentages and the overall label.
///
/// `positive + negative + neutral` is 100 whenever any sentiment word was
/// found, and `neutral` is 100 otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
    pub overall: SentimentLabel,
}

impl Default for SentimentScore {
    fn default() -> Self {
        SentimentScore {
            positive: 0,
            negative: 0,
            neutral: 100,
            overall: SentimentLabel::Neutral,
        }
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    (part as f64 / whole as f64 * 100.0).round() as u32
}

impl SentimentScore {
    /// Turn hit counts into percentages and a label.
    ///
    /// `bias` is how many times larger one side must be than the other before
    /// the label leaves `neutral`.
    pub fn from_counts(counts: SentimentCounts, bias: f64) -> Self {
        let total = counts.total().max(1);
        let positive = percent(counts.positive, total);
        let negative = percent(counts.negative, total);
        let neutral = 100u32.saturating_sub(positive + negative);

        let (pos, neg) = (counts.positive as f64, counts.negative as f64);
        let overall = if pos > neg * bias {
            SentimentLabel::Positive
        } else if neg > pos * bias {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        SentimentScore {
            positive,
            negative,
            neutral,
            overall,
        }
    }
}

/// Score a word sequence against a lexicon.
pub fn score<I>(words: I, lexicon: &Lexicon, bias: f64) -> SentimentScore
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    SentimentScore::from_counts(SentimentCounts::tally(words, lexicon), bias)
}
