//! Input documents and upload checks.
//!
//! A [`RawDocument`] is the plain text of a document, one string per page, as
//! produced by an external extractor, plus the file name and byte size of the
//! upload it came from. The analysis engine only ever borrows it.
//!
//! [`DocumentPolicy`] holds the checks a caller runs before analysis: accepted
//! file extension, maximum size and the presence of any text at all.
//!
//! # Examples
//!
//! ```
//! use folio::document::{format_file_size, DocumentPolicy, RawDocument};
//!
//! let doc = RawDocument::new(vec!["Page one.".into(), "Page two.".into()], "report.PDF", 2048);
//! assert_eq!(doc.full_text(), "Page one.\n\nPage two.");
//! assert!(DocumentPolicy::default().validate(&doc).is_ok());
//! assert_eq!(format_file_size(doc.file_size), "2.0 KB");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Separator placed between pages when building the full text.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Page break emitted by common PDF-to-text extractors.
pub const FORM_FEED: char = '\x0c';

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Extracted document text, page by page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub pages: Vec<String>,
    pub file_name: String,
    pub file_size: u64,
}

impl RawDocument {
    pub fn new<S: Into<String>>(pages: Vec<String>, file_name: S, file_size: u64) -> Self {
        RawDocument {
            pages,
            file_name: file_name.into(),
            file_size,
        }
    }

    /// Build a document from extractor output with pages separated by form feeds.
    ///
    /// Each page has its whitespace runs collapsed to single spaces and is
    /// trimmed, the same normalization a PDF text extractor applies to the text
    /// items of a page. A trailing form feed does not start an extra page.
    pub fn from_form_feed_text<S: Into<String>>(text: &str, file_name: S, file_size: u64) -> Self {
        let text = text.strip_suffix(FORM_FEED).unwrap_or(text);
        let pages = text.split(FORM_FEED).map(normalize_page).collect();
        Self::new(pages, file_name, file_size)
    }

    /// All pages joined by a blank line.
    pub fn full_text(&self) -> String {
        self.pages.join(PAGE_SEPARATOR)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the document has no text other than whitespace.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|page| page.trim().is_empty())
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_page(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks applied to an upload before it is analyzed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentPolicy {
    /// Required file name suffix, compared case-insensitively.
    pub extension: String,
    /// Largest accepted size in bytes.
    pub max_file_size: u64,
}

impl Default for DocumentPolicy {
    fn default() -> Self {
        Self {
            extension: ".pdf".to_string(),
            max_file_size: 50 * MIB,
        }
    }
}

impl DocumentPolicy {
    /// Check the file name and size of an upload, before any text is extracted.
    pub fn validate_upload(&self, file_name: &str, file_size: u64) -> Result<()> {
        if !file_name
            .to_lowercase()
            .ends_with(&self.extension.to_lowercase())
        {
            let kind = self.extension.trim_start_matches('.').to_uppercase();
            return Err(FolioError::document(format!("Please upload a {kind} file.")));
        }

        if file_size > self.max_file_size {
            let limit = if self.max_file_size % MIB == 0 {
                format!("{}MB", self.max_file_size / MIB)
            } else {
                format_file_size(self.max_file_size)
            };
            return Err(FolioError::document(format!(
                "File size must be under {limit}."
            )));
        }

        Ok(())
    }

    /// Check an extracted document: upload constraints plus non-blank text.
    pub fn validate(&self, document: &RawDocument) -> Result<()> {
        self.validate_upload(&document.file_name, document.file_size)?;

        if document.is_blank() {
            let kind = self.extension.trim_start_matches('.').to_uppercase();
            return Err(FolioError::document(format!(
                "No text found. The {kind} may be scanned or image-based."
            )));
        }

        Ok(())
    }
}

/// Human readable byte size: `"512 B"`, `"1.5 KB"`, `"2.0 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
