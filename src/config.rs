//! Configuration for document analysis.
//!
//! Every threshold and cap used while profiling a document lives in
//! [`AnalysisConfig`]. The defaults give the standard figures (top 20
//! words, top 10 bigrams, 238 words per minute and so on); a JSON file can
//! override any subset of them.
//!
//! # Examples
//!
//! ```
//! use folio::config::FolioConfig;
//!
//! let json = r#"{"analysis": {"top_words_limit": 12}}"#;
//! let config = FolioConfig::from_json_str(json).unwrap();
//! assert_eq!(config.analysis.top_words_limit, 12);
//! assert_eq!(config.analysis.top_bigrams_limit, 10);
//! assert_eq!(config.summary.excerpt_chars, 24_000);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentPolicy;
use crate::error::{FolioError, Result};

/// Thresholds and caps for building an analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of ranked single words.
    pub top_words_limit: usize,
    /// Maximum number of ranked word pairs.
    pub top_bigrams_limit: usize,
    /// Number of top words promoted to key topics.
    pub key_topics_limit: usize,
    /// Minimum characters for a ranked term.
    pub min_term_length: usize,
    /// Minimum characters for a document-wide sentence.
    pub sentence_min_chars: usize,
    /// Minimum characters for a sentence when counting per page.
    pub page_sentence_min_chars: usize,
    /// Reading speed used for the reading time estimate.
    pub words_per_minute: usize,
    /// Characters kept from the longest sentence.
    pub longest_sentence_chars: usize,
    /// Characters kept in the text excerpt.
    pub excerpt_chars: usize,
    /// Sentences taken into the extractive summary.
    pub summary_sentences: usize,
    /// Minimum space-separated pieces for a summary sentence.
    pub summary_min_words: usize,
    /// Factor one sentiment side must exceed the other by.
    pub sentiment_bias: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words_limit: 20,
            top_bigrams_limit: 10,
            key_topics_limit: 8,
            min_term_length: 3,
            sentence_min_chars: 11,
            page_sentence_min_chars: 6,
            words_per_minute: 238,
            longest_sentence_chars: 300,
            excerpt_chars: 2000,
            summary_sentences: 2,
            summary_min_words: 9,
            sentiment_bias: 1.2,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FolioError::config(format!("invalid analysis config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a meaningful report.
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("top_words_limit", self.top_words_limit),
            ("top_bigrams_limit", self.top_bigrams_limit),
            ("words_per_minute", self.words_per_minute),
            ("summary_sentences", self.summary_sentences),
        ];
        for (name, value) in caps {
            if value == 0 {
                return Err(FolioError::config(format!("{name} must be greater than 0")));
            }
        }
        if self.key_topics_limit > self.top_words_limit {
            return Err(FolioError::config(format!(
                "key_topics_limit ({}) cannot exceed top_words_limit ({})",
                self.key_topics_limit, self.top_words_limit
            )));
        }
        if !self.sentiment_bias.is_finite() || self.sentiment_bias < 1.0 {
            return Err(FolioError::config(format!(
                "sentiment_bias must be at least 1.0, got {}",
                self.sentiment_bias
            )));
        }
        Ok(())
    }
}

/// Settings for building a summarization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Characters of document text sent as the excerpt.
    pub excerpt_chars: usize,
    /// Top words sent as keywords.
    pub keyword_limit: usize,
    /// Model identifier placed in the message body.
    pub model: String,
    /// Upper bound on the response length.
    pub max_tokens: u32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: 24_000,
            keyword_limit: 10,
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
        }
    }
}

/// All configuration sections, as read from a single JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub analysis: AnalysisConfig,
    pub policy: DocumentPolicy,
    pub summary: SummaryConfig,
}

impl FolioConfig {
    /// Parse and validate a configuration file body.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FolioError::config(format!("invalid config: {e}")))?;
        config.analysis.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_json_str(&json)
    }
}
