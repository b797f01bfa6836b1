//! Per-page statistics.
//!
//! Pages are measured independently and with looser rules than the
//! document-wide figures: words are raw whitespace-delimited chunks and a
//! sentence only needs `page_sentence_min_chars` characters. Summing page word
//! counts therefore does not reproduce the document word count.

use serde::{Deserialize, Serialize};

use crate::analysis::segment;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Metrics for a single page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStat {
    /// 1-based page number
    pub page: usize,
    pub word_count: usize,
    /// Characters including whitespace
    pub char_count: usize,
    pub sentence_count: usize,
}

impl PageStat {
    /// Measure one page.
    pub fn measure(page: usize, text: &str, sentence_min_chars: usize) -> Self {
        PageStat {
            page,
            word_count: WhitespaceTokenizer::new().count(text),
            char_count: text.chars().count(),
            sentence_count: segment::count_fragments(text, sentence_min_chars),
        }
    }
}

/// Measure every page, numbering from 1 in input order.
pub fn page_stats<S: AsRef<str>>(pages: &[S], sentence_min_chars: usize) -> Vec<PageStat> {
    pages
        .iter()
        .enumerate()
        .map(|(idx, text)| PageStat::measure(idx + 1, text.as_ref(), sentence_min_chars))
        .collect()
}
