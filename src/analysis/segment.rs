//! Sentence and paragraph segmentation.
//!
//! Sentences are the fragments that end in a run of `.`, `!` and `?`. Fragments
//! are trimmed and kept only when they reach a minimum number of characters.
//! Text after the last terminator is not a sentence, so a document without
//! terminal punctuation has no sentences at all.
//!
//! Per-page counting is looser: every fragment between terminator runs counts,
//! including an unterminated tail.
//!
//! Paragraphs are the fragments between runs of two or more newlines.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::segment;
//!
//! let text = "Revenue grew strongly. Costs too! Margins held steady? And then";
//! let sentences = segment::sentences(text, 11);
//! assert_eq!(sentences, vec!["Revenue grew strongly", "Margins held steady"]);
//!
//! assert_eq!(segment::count_fragments(text, 6), 4);
//! assert_eq!(segment::paragraphs("One.\n\n\nTwo.\n\n  \n\n").len(), 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break regex should be valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("paragraph break regex should be valid"));

/// Fragments followed by a terminator run.
fn terminated(text: &str) -> impl Iterator<Item = &str> {
    let mut start = 0;
    SENTENCE_BREAK.find_iter(text).map(move |m| {
        let fragment = &text[start..m.start()];
        start = m.end();
        fragment
    })
}

fn long_enough(fragment: &&str, min_chars: usize) -> bool {
    fragment.chars().count() >= min_chars
}

/// Split text into trimmed sentences of at least `min_chars` characters.
pub fn sentences(text: &str, min_chars: usize) -> Vec<&str> {
    terminated(text)
        .map(str::trim)
        .filter(|s| long_enough(s, min_chars))
        .collect()
}

/// Count trimmed fragments between terminator runs with at least
/// `min_chars` characters, including any unterminated tail.
pub fn count_fragments(text: &str, min_chars: usize) -> usize {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| long_enough(s, min_chars))
        .count()
}

/// Split text into trimmed, non-blank paragraphs.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of pieces a sentence splits into on single spaces.
///
/// This is the word measure for picking the longest sentence and for the
/// extractive summary threshold. Consecutive spaces produce empty pieces,
/// which are counted.
pub fn space_separated_len(sentence: &str) -> usize {
    sentence.split(' ').count()
}
