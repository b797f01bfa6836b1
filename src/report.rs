//! The analysis report.
//!
//! An [`AnalysisReport`] is built once per document by
//! [`DocumentAnalyzer`](crate::engine::DocumentAnalyzer) and never changes
//! afterwards. It serializes to camelCase JSON with its fields in a fixed
//! order, so two analyses of the same document serialize to identical bytes.

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::FrequencyEntry;
use crate::analysis::page::PageStat;
use crate::analysis::sentiment::SentimentScore;

/// Statistical profile of one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub file_name: String,
    /// Upload size in bytes
    pub file_size: u64,
    pub total_pages: usize,
    /// Normalized word tokens in the whole document
    pub total_words: usize,
    /// Non-whitespace characters
    pub total_chars: usize,
    pub total_sentences: usize,
    pub total_paragraphs: usize,
    pub avg_words_per_page: usize,
    pub avg_sentence_length: usize,
    pub reading_time_minutes: usize,
    pub top_words: Vec<FrequencyEntry>,
    pub top_bigrams: Vec<FrequencyEntry>,
    pub sentiment: SentimentScore,
    pub page_stats: Vec<PageStat>,
    pub key_topics: Vec<String>,
    /// Extractive summary
    pub summary: String,
    /// Percentage of characters that are not whitespace
    pub text_density: usize,
    pub unique_words: usize,
    /// Unique words as a percentage of total words
    pub vocabulary_richness: usize,
    pub longest_sentence: String,
    /// Leading characters of the full text
    pub extracted_text: String,
}

impl AnalysisReport {
    /// Ranked words, most frequent first.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.top_words.iter().map(|entry| entry.term.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
