//! Summarization requests and responses.
//!
//! The engine does not talk to a summarization service. It builds the request
//! one would send ([`SummaryRequest`]): a capped excerpt of the document plus
//! metadata taken from an [`AnalysisReport`], rendered into a fixed analyst
//! prompt and a messages-API request body. [`SmartSummary`] decodes the JSON a
//! service returns for that prompt.
//!
//! # Examples
//!
//! ```
//! use folio::config::SummaryConfig;
//! use folio::document::RawDocument;
//! use folio::engine::analyze_document;
//! use folio::summarize::SummaryRequest;
//!
//! let document = RawDocument::new(vec!["Quarterly revenue grew.".into()], "q3.pdf", 100);
//! let report = analyze_document(&document);
//!
//! let request = SummaryRequest::from_report(&report, &document.full_text(), &SummaryConfig::default());
//! assert_eq!(request.keywords, vec!["quarterly", "revenue", "grew"]);
//! assert!(request.prompt().contains("Document filename: \"q3.pdf\""));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::SummaryConfig;
use crate::engine::truncate_chars;
use crate::error::{FolioError, Result};
use crate::report::AnalysisReport;

const RESPONSE_FORMAT: &str = r#"{
  "tldr": "One sentence (max 25 words) capturing the absolute essence of this document.",
  "overview": "2-3 sentence paragraph explaining what this document is, its purpose, and key context.",
  "documentType": "One of: Research Paper, Report, Contract, Manual, Article, Book, Presentation, Invoice, Resume, Other",
  "complexity": "One of: Beginner, Intermediate, Advanced, Technical",
  "audience": "Who this document is written for (1 sentence)",
  "keyPoints": [
    "Most important insight or finding #1",
    "Most important insight or finding #2",
    "Most important insight or finding #3",
    "Most important insight or finding #4",
    "Most important insight or finding #5"
  ],
  "sections": [
    { "title": "Section or theme name", "summary": "1-2 sentence summary of this section" },
    { "title": "Section or theme name", "summary": "1-2 sentence summary of this section" },
    { "title": "Section or theme name", "summary": "1-2 sentence summary of this section" }
  ],
  "actionItems": [
    "Concrete takeaway or action item from this document",
    "Another key takeaway"
  ],
  "tags": ["tag1", "tag2", "tag3", "tag4", "tag5"]
}"#;

/// Everything sent to a summarization service for one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub file_name: String,
    pub total_pages: usize,
    pub total_words: usize,
    /// Top ranked words, most frequent first
    pub keywords: Vec<String>,
    /// Leading characters of the full document text
    pub excerpt: String,
    pub model: String,
    pub max_tokens: u32,
}

impl SummaryRequest {
    /// Build a request from a finished report and the full text it was built from.
    pub fn from_report(report: &AnalysisReport, full_text: &str, config: &SummaryConfig) -> Self {
        SummaryRequest {
            file_name: report.file_name.clone(),
            total_pages: report.total_pages,
            total_words: report.total_words,
            keywords: report
                .keywords()
                .take(config.keyword_limit)
                .map(str::to_string)
                .collect(),
            excerpt: truncate_chars(full_text, config.excerpt_chars).to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// The analyst prompt asking for a [`SmartSummary`] as JSON.
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert document analyst. Analyse the following PDF document text and return a structured JSON summary that helps someone quickly understand what this document is about.

Document filename: \"{file_name}\"
Total pages: {pages}
Total words: {words}
Top keywords: {keywords}

Document text (may be truncated):
\"\"\"
{excerpt}
\"\"\"

Return ONLY valid JSON (no markdown, no backticks, no preamble) in this exact structure:
{format}",
            file_name = self.file_name,
            pages = self.total_pages,
            words = self.total_words,
            keywords = self.keywords.join(", "),
            excerpt = self.excerpt,
            format = RESPONSE_FORMAT,
        )
    }

    /// The messages-API request body carrying the prompt as a single user turn.
    pub fn to_message_body(&self) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                { "role": "user", "content": self.prompt() }
            ]
        })
    }
}

/// Kind of document, as classified by the summarization service.
///
/// Unrecognized names decode as [`DocumentType::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DocumentType {
    #[serde(rename = "Research Paper")]
    ResearchPaper,
    Report,
    Contract,
    Manual,
    Article,
    Book,
    Presentation,
    Invoice,
    Resume,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ResearchPaper => "Research Paper",
            DocumentType::Report => "Report",
            DocumentType::Contract => "Contract",
            DocumentType::Manual => "Manual",
            DocumentType::Article => "Article",
            DocumentType::Book => "Book",
            DocumentType::Presentation => "Presentation",
            DocumentType::Invoice => "Invoice",
            DocumentType::Resume => "Resume",
            DocumentType::Other => "Other",
        }
    }
}

impl From<String> for DocumentType {
    fn from(name: String) -> Self {
        match name.trim() {
            "Research Paper" => DocumentType::ResearchPaper,
            "Report" => DocumentType::Report,
            "Contract" => DocumentType::Contract,
            "Manual" => DocumentType::Manual,
            "Article" => DocumentType::Article,
            "Book" => DocumentType::Book,
            "Presentation" => DocumentType::Presentation,
            "Invoice" => DocumentType::Invoice,
            "Resume" => DocumentType::Resume,
            _ => DocumentType::Other,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading level of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Technical,
}

/// A titled part of the document and its summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub title: String,
    pub summary: String,
}

/// Structured summary returned by the summarization service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSummary {
    pub tldr: String,
    pub overview: String,
    pub document_type: DocumentType,
    pub complexity: Complexity,
    pub audience: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SectionSummary>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SmartSummary {
    /// Decode the text of a model reply, ignoring stray markdown code fences.
    pub fn from_response_text(text: &str) -> Result<Self> {
        let cleaned = text.replace("```json", "").replace("```", "");
        serde_json::from_str(cleaned.trim())
            .map_err(|e| FolioError::summary(format!("invalid summary JSON: {e}")))
    }

    /// Decode a full messages-API response body.
    ///
    /// The text of every content block is concatenated before decoding.
    pub fn from_message_response(body: &str) -> Result<Self> {
        Self::from_response_text(&response_text(body)?)
    }
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenated text of all content blocks in a messages-API response.
pub fn response_text(body: &str) -> Result<String> {
    let response: MessageResponse = serde_json::from_str(body)
        .map_err(|e| FolioError::summary(format!("invalid response body: {e}")))?;
    Ok(response
        .content
        .into_iter()
        .filter_map(|block| block.text)
        .collect())
}
