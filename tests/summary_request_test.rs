//! Integration tests for summarization request construction.

use folio::prelude::*;
use folio::summarize::{Complexity, DocumentType};

fn keyword_document() -> RawDocument {
    // Twelve distinct content words with descending frequencies.
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima",
    ];
    let mut text = String::new();
    for (i, word) in words.iter().enumerate() {
        for _ in 0..(words.len() - i) {
            text.push_str(word);
            text.push(' ');
        }
    }
    RawDocument::new(vec![text], "phonetic.pdf", 1234)
}

fn default_request(document: &RawDocument) -> (AnalysisReport, SummaryRequest) {
    let report = analyze_document(document);
    let request =
        SummaryRequest::from_report(&report, &document.full_text(), &SummaryConfig::default());
    (report, request)
}

#[test]
fn test_keywords_are_top_ten_words() {
    let document = keyword_document();
    let (report, request) = default_request(&document);

    assert_eq!(request.keywords.len(), 10);
    assert_eq!(request.keywords[0], "alpha");
    assert_eq!(request.keywords[9], "juliet");
    assert_eq!(request.file_name, "phonetic.pdf");
    assert_eq!(request.total_pages, 1);
    assert_eq!(request.total_words, report.total_words);
}

#[test]
fn test_excerpt_is_capped() {
    let page = "é".repeat(30_000);
    let document = RawDocument::new(vec![page], "long.pdf", 60_000);
    let report = analyze_document(&document);
    let full_text = document.full_text();

    let request = SummaryRequest::from_report(&report, &full_text, &SummaryConfig::default());
    assert_eq!(request.excerpt.chars().count(), 24_000);
    assert!(full_text.starts_with(&request.excerpt));

    let short = RawDocument::new(vec!["Brief text.".to_string()], "short.pdf", 11);
    let (_, request) = default_request(&short);
    assert_eq!(request.excerpt, "Brief text.");
}

#[test]
fn test_custom_limits() {
    let document = keyword_document();
    let report = analyze_document(&document);
    let config = SummaryConfig {
        excerpt_chars: 5,
        keyword_limit: 3,
        ..Default::default()
    };

    let request = SummaryRequest::from_report(&report, &document.full_text(), &config);
    assert_eq!(request.keywords, vec!["alpha", "bravo", "charlie"]);
    assert_eq!(request.excerpt, "alpha");
}

#[test]
fn test_prompt_contents() {
    let document = keyword_document();
    let (report, request) = default_request(&document);
    let prompt = request.prompt();

    assert!(prompt.starts_with("You are an expert document analyst."));
    assert!(prompt.contains("Document filename: \"phonetic.pdf\"\n"));
    assert!(prompt.contains("Total pages: 1\n"));
    assert!(prompt.contains(&format!("Total words: {}\n", report.total_words)));
    assert!(prompt.contains(
        "Top keywords: alpha, bravo, charlie, delta, echo, foxtrot, golf, hotel, india, juliet\n"
    ));
    assert!(prompt.contains(&format!("\"\"\"\n{}\n\"\"\"", request.excerpt)));
    assert!(prompt.contains("\"documentType\""));
    assert!(prompt.trim_end().ends_with('}'));
}

#[test]
fn test_message_body() {
    let document = keyword_document();
    let (report, request) = default_request(&document);
    let body = request.to_message_body();

    assert_eq!(body["model"], SummaryConfig::default().model.as_str());
    assert_eq!(body["max_tokens"], 1000);
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], request.prompt().as_str());
}

#[test]
fn test_decode_reply_for_request() {
    let reply = r#"```json
{
  "tldr": "A phonetic alphabet drill.",
  "overview": "Repeated code words.",
  "documentType": "Manual",
  "complexity": "Beginner",
  "audience": "Radio operators",
  "keyPoints": ["Alpha comes first"],
  "sections": [{ "title": "Letters", "summary": "All twelve." }],
  "actionItems": ["Practice"],
  "tags": ["radio", "alphabet"]
}
```"#;

    let summary = SmartSummary::from_response_text(reply).unwrap();
    assert_eq!(summary.document_type, DocumentType::Manual);
    assert_eq!(summary.complexity, Complexity::Beginner);
    assert_eq!(summary.tags, vec!["radio", "alphabet"]);

    let err = SmartSummary::from_response_text("{}").unwrap_err();
    assert!(matches!(err, FolioError::Summary(_)));
}
