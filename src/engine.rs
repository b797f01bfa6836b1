//! Document analysis engine.
//!
//! [`DocumentAnalyzer`] turns a [`RawDocument`] into an [`AnalysisReport`] in a
//! single synchronous pass:
//!
//! 1. The pages are joined into the full text.
//! 2. The full text is tokenized into normalized words, which drive the word
//!    totals, the vocabulary figures and sentiment.
//! 3. The same tokens go through the marking filter chain and are ranked into
//!    top words and top bigrams.
//! 4. Sentences and paragraphs are segmented from the full text, and every page
//!    is measured on its own.
//! 5. Derived figures (averages, reading time, density, summary) are computed.
//!
//! The analyzer holds no mutable state, so one instance can serve any number of
//! threads. [`DocumentAnalyzer::analyze_many`] analyzes a batch in parallel.
//!
//! # Examples
//!
//! ```
//! use folio::document::RawDocument;
//! use folio::engine::DocumentAnalyzer;
//!
//! let analyzer = DocumentAnalyzer::default();
//! let document = RawDocument::new(
//!     vec!["word word word test test example".to_string()],
//!     "sample.pdf",
//!     64,
//! );
//!
//! let report = analyzer.analyze(&document);
//! assert_eq!(report.total_words, 6);
//! assert_eq!(report.top_words[0].term, "word");
//! assert_eq!(report.key_topics[0], "Word");
//! ```

use ahash::AHashSet;
use rayon::prelude::*;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::frequency;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::page;
use crate::analysis::segment;
use crate::analysis::sentiment;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::config::AnalysisConfig;
use crate::document::RawDocument;
use crate::report::AnalysisReport;

/// Summary used when no sentence is long enough to quote.
pub const NO_SUMMARY: &str = "No substantial text found.";

/// Builds analysis reports with a fixed configuration and lexicon.
#[derive(Clone, Debug)]
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
    lexicon: Lexicon,
    terms: PipelineAnalyzer,
}

impl DocumentAnalyzer {
    /// Create an analyzer.
    ///
    /// The configuration is expected to be valid; see
    /// [`AnalysisConfig::validate`].
    pub fn new(config: AnalysisConfig, lexicon: Lexicon) -> Self {
        let terms = PipelineAnalyzer::terms(&lexicon, config.min_term_length);
        DocumentAnalyzer {
            config,
            lexicon,
            terms,
        }
    }

    /// Create an analyzer over the built-in English lexicon.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self::new(config, Lexicon::english())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze one document.
    pub fn analyze(&self, document: &RawDocument) -> AnalysisReport {
        let config = &self.config;
        let full_text = document.full_text();

        let words: Vec<Token> = self.terms.tokenizer().tokenize(&full_text).collect();
        let total_words = words.len();
        let unique_words = words
            .iter()
            .map(|token| token.text.as_str())
            .collect::<AHashSet<_>>()
            .len();
        let sentiment = sentiment::score(
            words.iter().map(|token| token.text.as_str()),
            &self.lexicon,
            config.sentiment_bias,
        );
        log::trace!(
            "{}: {} words, {} unique",
            document.file_name,
            total_words,
            unique_words
        );

        let terms: Vec<Token> = self.terms.apply_filters(words).collect();
        let top_words = frequency::unigrams(&terms, config.top_words_limit);
        let top_bigrams = frequency::bigrams(&terms, config.top_bigrams_limit);
        let key_topics = top_words
            .iter()
            .take(config.key_topics_limit)
            .map(|entry| capitalize(&entry.term))
            .collect();

        let sentences = segment::sentences(&full_text, config.sentence_min_chars);
        let total_paragraphs = segment::paragraphs(&full_text).len();
        let page_stats = page::page_stats(&document.pages, config.page_sentence_min_chars);
        log::trace!(
            "{}: {} sentences, {} paragraphs",
            document.file_name,
            sentences.len(),
            total_paragraphs
        );

        let text_len = full_text.chars().count();
        let total_chars = full_text.chars().filter(|c| !c.is_whitespace()).count();
        let total_pages = document.page_count();

        log::debug!(
            "Analyzed {} ({} pages, {} words, {} sentences)",
            document.file_name,
            total_pages,
            total_words,
            sentences.len()
        );

        AnalysisReport {
            file_name: document.file_name.clone(),
            file_size: document.file_size,
            total_pages,
            total_words,
            total_chars,
            total_sentences: sentences.len(),
            total_paragraphs,
            avg_words_per_page: rounded_ratio(total_words, total_pages.max(1)),
            avg_sentence_length: rounded_ratio(total_words, sentences.len().max(1)),
            reading_time_minutes: rounded_ratio(total_words, config.words_per_minute).max(1),
            top_words,
            top_bigrams,
            sentiment,
            page_stats,
            key_topics,
            summary: extractive_summary(
                &sentences,
                config.summary_min_words,
                config.summary_sentences,
            ),
            text_density: rounded_percent(total_chars, text_len.max(1)),
            unique_words,
            vocabulary_richness: rounded_percent(unique_words, total_words.max(1)),
            longest_sentence: truncate_chars(
                longest_sentence(&sentences),
                config.longest_sentence_chars,
            )
            .to_string(),
            extracted_text: truncate_chars(&full_text, config.excerpt_chars).to_string(),
        }
    }

    /// Analyze several documents in parallel. Reports come back in input order.
    pub fn analyze_many(&self, documents: &[RawDocument]) -> Vec<AnalysisReport> {
        documents
            .par_iter()
            .map(|document| self.analyze(document))
            .collect()
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::with_config(AnalysisConfig::default())
    }
}

/// Analyze a document with the default configuration and lexicon.
pub fn analyze_document(document: &RawDocument) -> AnalysisReport {
    DocumentAnalyzer::default().analyze(document)
}

fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    (numerator as f64 / denominator as f64).round() as usize
}

fn rounded_percent(part: usize, whole: usize) -> usize {
    (part as f64 / whole as f64 * 100.0).round() as usize
}

/// Upper-case the first character.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The longest prefix of `text` with at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The sentence with the most space-separated pieces; the earliest wins ties.
///
/// Returns `""` when there is no sentence with more than one piece.
pub fn longest_sentence<'a>(sentences: &[&'a str]) -> &'a str {
    sentences.iter().fold("", |best, &sentence| {
        if segment::space_separated_len(sentence) > segment::space_separated_len(best) {
            sentence
        } else {
            best
        }
    })
}

/// Join the first `max_sentences` sentences with at least `min_words` pieces.
pub fn extractive_summary(sentences: &[&str], min_words: usize, max_sentences: usize) -> String {
    let picked: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| segment::space_separated_len(sentence) >= min_words)
        .take(max_sentences)
        .collect();

    if picked.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        format!("{}.", picked.join(". "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::SentimentLabel;

    fn single_page(text: &str) -> RawDocument {
        RawDocument::new(vec![text.to_string()], "test.pdf", text.len() as u64)
    }

    #[test]
    fn test_empty_document() {
        let report = analyze_document(&single_page(""));

        assert_eq!(report.total_words, 0);
        assert_eq!(report.total_sentences, 0);
        assert_eq!(report.total_paragraphs, 0);
        assert_eq!(report.unique_words, 0);
        assert_eq!(report.vocabulary_richness, 0);
        assert_eq!(report.reading_time_minutes, 1);
        assert_eq!(report.text_density, 0);
        assert_eq!(report.sentiment.neutral, 100);
        assert_eq!(report.sentiment.overall, SentimentLabel::Neutral);
        assert!(report.top_words.is_empty());
        assert!(report.top_bigrams.is_empty());
        assert!(report.key_topics.is_empty());
        assert_eq!(report.summary, NO_SUMMARY);
        assert_eq!(report.longest_sentence, "");
        assert_eq!(report.page_stats.len(), 1);
    }

    #[test]
    fn test_no_pages() {
        let report = analyze_document(&RawDocument::new(Vec::new(), "empty.pdf", 0));
        assert_eq!(report.total_pages, 0);
        assert_eq!(report.avg_words_per_page, 0);
        assert!(report.page_stats.is_empty());
    }

    #[test]
    fn test_word_ranking() {
        let report = analyze_document(&single_page("word word word test test example"));

        let ranked: Vec<(&str, usize)> = report
            .top_words
            .iter()
            .map(|e| (e.term.as_str(), e.count))
            .collect();
        assert_eq!(ranked, vec![("word", 3), ("test", 2), ("example", 1)]);
        assert_eq!(report.key_topics, vec!["Word", "Test", "Example"]);
        assert_eq!(report.unique_words, 3);
        assert_eq!(report.vocabulary_richness, 50);
    }

    #[test]
    fn test_mixed_sentiment() {
        let report = analyze_document(&single_page(
            "Good news: profits grew. Bad news: risk increased.",
        ));
        assert_eq!(report.sentiment.overall, SentimentLabel::Negative);
        assert_eq!(report.sentiment.positive, 33);
        assert_eq!(report.sentiment.negative, 67);
        assert_eq!(report.sentiment.neutral, 0);
        // "good" is counted for sentiment even though it is a stop word.
        assert!(report.top_words.iter().all(|e| e.term != "good"));
    }

    #[test]
    fn test_derived_figures() {
        let text = "Alpha beta gamma delta epsilon zeta eta theta iota kappa. Short one.";
        let report = analyze_document(&single_page(text));

        assert_eq!(report.total_words, 12);
        assert_eq!(report.total_sentences, 1);
        assert_eq!(report.avg_sentence_length, 12);
        assert_eq!(report.avg_words_per_page, 12);
        assert_eq!(
            report.summary,
            "Alpha beta gamma delta epsilon zeta eta theta iota kappa."
        );
        assert_eq!(
            report.longest_sentence,
            "Alpha beta gamma delta epsilon zeta eta theta iota kappa"
        );
        // 57 non-whitespace characters out of 68.
        assert_eq!(report.total_chars, 57);
        assert_eq!(report.text_density, 84);
    }

    #[test]
    fn test_custom_config() {
        let config = AnalysisConfig {
            top_words_limit: 1,
            key_topics_limit: 1,
            words_per_minute: 2,
            ..Default::default()
        };
        let analyzer = DocumentAnalyzer::with_config(config);
        let report = analyzer.analyze(&single_page("apple apple banana cherry"));

        assert_eq!(report.top_words.len(), 1);
        assert_eq!(report.top_words[0].term, "apple");
        assert_eq!(report.reading_time_minutes, 2);
    }

    #[test]
    fn test_analyze_many_preserves_order() {
        let documents: Vec<RawDocument> = (1..=8)
            .map(|n| single_page(&"lorem ".repeat(n)))
            .collect();
        let reports = DocumentAnalyzer::default().analyze_many(&documents);

        let totals: Vec<usize> = reports.iter().map(|r| r.total_words).collect();
        assert_eq!(totals, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_longest_sentence_ties_keep_earliest() {
        let sentences = ["one two three", "four five six", "seven eight"];
        assert_eq!(longest_sentence(&sentences), "one two three");
        assert_eq!(longest_sentence(&["nospaces"]), "");
        assert_eq!(longest_sentence(&[]), "");
    }

    #[test]
    fn test_extractive_summary() {
        let long_a = "one two three four five six seven eight nine";
        let long_b = "a b c d e f g h i j";
        let short = "too short to count here";

        assert_eq!(extractive_summary(&[short, long_a], 9, 2), format!("{long_a}."));
        assert_eq!(
            extractive_summary(&[long_a, short, long_b, long_a], 9, 2),
            format!("{long_a}. {long_b}.")
        );
        assert_eq!(extractive_summary(&[short], 9, 2), NO_SUMMARY);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("revenue"), "Revenue");
        assert_eq!(capitalize("well-known"), "Well-known");
        assert_eq!(capitalize(""), "");
    }
}
