//! Integration tests for document analysis reports.

use folio::analysis::lexicon::Lexicon;
use folio::prelude::*;

fn single_page(text: &str) -> RawDocument {
    RawDocument::new(vec![text.to_string()], "doc.pdf", text.len() as u64)
}

fn sample_documents() -> Vec<RawDocument> {
    vec![
        single_page(""),
        single_page("word word word test test example"),
        single_page("Good news: profits grew. Bad news: risk increased."),
        RawDocument::new(
            vec![
                "Quarterly revenue increased by twelve percent. Strong demand drove growth \
                 across every region, and margins improved despite higher costs."
                    .to_string(),
                "Supply chain risk remains a concern. Delays in component delivery could \
                 reduce output next quarter! Management expects a gradual recovery?"
                    .to_string(),
                "".to_string(),
                "Outlook: cautiously optimistic. The board approved the new dividend policy."
                    .to_string(),
            ],
            "annual-report.pdf",
            48_213,
        ),
        single_page(&"alpha beta gamma delta. ".repeat(200)),
        single_page("- -- ' 42 % !!! ???"),
    ]
}

#[test]
fn test_empty_input() {
    let report = analyze_document(&single_page(""));

    assert_eq!(report.total_words, 0);
    assert_eq!(report.total_sentences, 0);
    assert_eq!(report.sentiment.overall, SentimentLabel::Neutral);
    assert_eq!(report.sentiment.neutral, 100);
    assert!(report.top_words.is_empty());
    assert_eq!(report.summary, "No substantial text found.");
}

#[test]
fn test_mixed_news_sentiment() {
    let report = analyze_document(&single_page(
        "Good news: profits grew. Bad news: risk increased.",
    ));

    // "good" is positive; "bad" and "risk" are negative. 2 > 1 * 1.2.
    assert_eq!(report.sentiment.positive, 33);
    assert_eq!(report.sentiment.negative, 67);
    assert_eq!(report.sentiment.overall, SentimentLabel::Negative);
    assert_eq!(report.total_sentences, 2);
}

#[test]
fn test_word_ranking_order() {
    let report = analyze_document(&single_page("word word word test test example"));

    let ranked: Vec<(&str, usize)> = report
        .top_words
        .iter()
        .map(|entry| (entry.term.as_str(), entry.count))
        .collect();
    assert_eq!(ranked, vec![("word", 3), ("test", 2), ("example", 1)]);
}

#[test]
fn test_bigrams_skip_stop_words() {
    let report = analyze_document(&single_page("alpha the beta gamma"));

    assert_eq!(report.top_bigrams, vec![FrequencyEntry::new("beta gamma", 1)]);
}

#[test]
fn test_bigrams_strip_edge_marks() {
    let report = analyze_document(&single_page("'quarterly revenue' -quarterly revenue-"));

    assert_eq!(report.top_words[0], FrequencyEntry::new("quarterly", 2));
    assert_eq!(report.top_bigrams[0], FrequencyEntry::new("quarterly revenue", 2));
    assert_eq!(report.top_bigrams[1], FrequencyEntry::new("revenue quarterly", 1));
}

#[test]
fn test_page_word_count_differs_from_total() {
    let report = analyze_document(&single_page("Growth - 12% ! strong"));

    // Whitespace chunks on the page: "Growth", "-", "12%", "!", "strong".
    assert_eq!(report.page_stats[0].word_count, 5);
    // Normalized tokens: "growth", "strong".
    assert_eq!(report.total_words, 2);
    assert_ne!(report.page_stats[0].word_count, report.total_words);
}

#[test]
fn test_invariants_hold_for_all_documents() {
    for document in sample_documents() {
        let report = analyze_document(&document);

        assert!(report.vocabulary_richness <= 100);
        assert!(report.unique_words <= report.total_words);
        assert!(report.text_density <= 100);
        assert!(report.reading_time_minutes >= 1);

        let sentiment = &report.sentiment;
        assert_eq!(sentiment.positive + sentiment.negative + sentiment.neutral, 100);

        assert!(report.top_words.len() <= 20);
        assert!(report.top_bigrams.len() <= 10);
        assert!(report.top_words.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(report.top_bigrams.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(report.key_topics.len() <= 8);

        assert_eq!(report.page_stats.len(), document.page_count());
        for (idx, page) in report.page_stats.iter().enumerate() {
            assert_eq!(page.page, idx + 1);
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = DocumentAnalyzer::default();
    for document in sample_documents() {
        let first = analyzer.analyze(&document).to_json().unwrap();
        let second = analyzer.analyze(&document).to_json().unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_multi_page_report() {
    let documents = sample_documents();
    let document = &documents[3];
    let report = analyze_document(document);

    assert_eq!(report.file_name, "annual-report.pdf");
    assert_eq!(report.file_size, 48_213);
    assert_eq!(report.total_pages, 4);
    // Pages are joined by blank lines; the empty page leaves no paragraph.
    assert_eq!(report.total_paragraphs, 3);
    assert_eq!(report.page_stats[2].word_count, 0);
    assert_eq!(report.page_stats[0].sentence_count, 2);
    assert_eq!(
        report.avg_words_per_page,
        (report.total_words as f64 / 4.0).round() as usize
    );
    // The opening sentence has only six words, too few for the summary.
    assert_eq!(
        report.summary,
        "Strong demand drove growth across every region, and margins improved despite \
         higher costs. Delays in component delivery could reduce output next quarter."
    );
    assert_eq!(report.extracted_text, document.full_text());
}

#[test]
fn test_truncated_fields() {
    let long_sentence = format!("{}.", "lengthy ".repeat(60).trim_end());
    let text = format!("{long_sentence} {}", "filler text. ".repeat(200));
    let report = analyze_document(&single_page(&text));

    assert_eq!(report.longest_sentence.chars().count(), 300);
    assert!(report.longest_sentence.starts_with("lengthy lengthy"));
    assert_eq!(report.extracted_text.chars().count(), 2000);
    assert!(text.starts_with(&report.extracted_text));
}

#[test]
fn test_substitute_lexicon() {
    let lexicon = Lexicon::from_words(["alpha"], ["beta"], ["gamma", "delta"]);
    let analyzer = DocumentAnalyzer::new(AnalysisConfig::default(), lexicon);
    let report = analyzer.analyze(&single_page("alpha beta gamma delta beta beta"));

    assert_eq!(report.top_words[0], FrequencyEntry::new("beta", 3));
    assert!(report.top_words.iter().all(|e| e.term != "alpha"));
    assert_eq!(report.sentiment.overall, SentimentLabel::Positive);
    assert_eq!(report.sentiment.positive, 60);
    assert_eq!(report.sentiment.negative, 40);
}

#[test]
fn test_report_json_shape() {
    let report = analyze_document(&single_page("Strong growth this year overall."));
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    for key in [
        "fileName",
        "fileSize",
        "totalPages",
        "totalWords",
        "totalChars",
        "totalSentences",
        "totalParagraphs",
        "avgWordsPerPage",
        "avgSentenceLength",
        "readingTimeMinutes",
        "topWords",
        "topBigrams",
        "sentiment",
        "pageStats",
        "keyTopics",
        "summary",
        "textDensity",
        "uniqueWords",
        "vocabularyRichness",
        "longestSentence",
        "extractedText",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["sentiment"]["overall"], "positive");
    assert_eq!(value["pageStats"][0]["wordCount"], 5);

    let decoded: AnalysisReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn test_analyze_many_matches_single() {
    let documents = sample_documents();
    let analyzer = DocumentAnalyzer::default();

    let batch = analyzer.analyze_many(&documents);
    let single: Vec<AnalysisReport> = documents.iter().map(|d| analyzer.analyze(d)).collect();
    assert_eq!(batch, single);
}
