//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::analysis::frequency::FrequencyEntry;
use crate::cli::args::{FolioArgs, OutputFormat};
use crate::document::format_file_size;
use crate::error::Result;
use crate::report::AnalysisReport;
use crate::summarize::SummaryRequest;

/// Write analysis reports in the selected format.
///
/// In JSON a single report is written as an object and several as an array.
pub fn write_reports<W: Write>(
    reports: &[AnalysisReport],
    args: &FolioArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => match reports {
            [report] => write_json(report, args.pretty, out),
            _ => write_json(&reports, args.pretty, out),
        },
        OutputFormat::Human => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_report_human(report, args, out)?;
            }
            Ok(())
        }
    }
}

/// Write a summarization request: the message body as JSON, or the prompt text.
pub fn write_summary_request<W: Write>(
    request: &SummaryRequest,
    args: &FolioArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(&request.to_message_body(), args.pretty, out),
        OutputFormat::Human => {
            writeln!(out, "{}", request.prompt())?;
            Ok(())
        }
    }
}

fn write_json<T, W>(value: &T, pretty: bool, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Output a report in human format.
fn write_report_human<W: Write>(
    report: &AnalysisReport,
    args: &FolioArgs,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Document: {} ({}, {} pages)",
        report.file_name,
        format_file_size(report.file_size),
        report.total_pages
    )?;
    writeln!(out, "═════════")?;
    writeln!(
        out,
        "Words: {} ({} unique, {}% vocabulary richness)",
        report.total_words, report.unique_words, report.vocabulary_richness
    )?;
    writeln!(
        out,
        "Characters: {} ({}% text density)",
        report.total_chars, report.text_density
    )?;
    writeln!(
        out,
        "Sentences: {} (avg {} words)",
        report.total_sentences, report.avg_sentence_length
    )?;
    writeln!(out, "Paragraphs: {}", report.total_paragraphs)?;
    writeln!(out, "Words per page: {}", report.avg_words_per_page)?;
    writeln!(out, "Reading time: {} min", report.reading_time_minutes)?;
    writeln!(
        out,
        "Sentiment: {} ({}% positive, {}% negative, {}% neutral)",
        report.sentiment.overall,
        report.sentiment.positive,
        report.sentiment.negative,
        report.sentiment.neutral
    )?;

    if !report.key_topics.is_empty() {
        writeln!(out, "Key topics: {}", report.key_topics.join(", "))?;
    }

    write_ranked(out, "Top words", &report.top_words)?;
    write_ranked(out, "Top bigrams", &report.top_bigrams)?;

    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  {}", report.summary)?;

    if args.verbosity() > 1 {
        if !report.longest_sentence.is_empty() {
            writeln!(out)?;
            writeln!(out, "Longest sentence:")?;
            writeln!(out, "  {}", report.longest_sentence)?;
        }

        writeln!(out)?;
        writeln!(out, "Pages:")?;
        for page in &report.page_stats {
            writeln!(
                out,
                "  Page {}: {} words, {} chars, {} sentences",
                page.page, page.word_count, page.char_count, page.sentence_count
            )?;
        }
    }

    Ok(())
}

fn write_ranked<W: Write>(out: &mut W, title: &str, entries: &[FrequencyEntry]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{title}:")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "  {:>2}. {} ({})", i + 1, entry.term, entry.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;
    use crate::engine::analyze_document;
    use clap::Parser;

    fn report() -> AnalysisReport {
        analyze_document(&RawDocument::new(
            vec!["word word word test test example".to_string()],
            "sample.pdf",
            2048,
        ))
    }

    fn render(args: &[&str], reports: &[AnalysisReport]) -> String {
        let args = FolioArgs::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        write_reports(reports, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output() {
        let text = render(&["folio", "analyze", "x.txt"], &[report()]);

        assert!(text.starts_with("Document: sample.pdf (2.0 KB, 1 pages)\n"));
        assert!(text.contains("Words: 6 (3 unique, 50% vocabulary richness)"));
        assert!(text.contains("Key topics: Word, Test, Example"));
        assert!(text.contains("   1. word (3)"));
        assert!(text.contains("No substantial text found."));
        assert!(!text.contains("Pages:"));
    }

    #[test]
    fn test_verbose_human_output_lists_pages() {
        let text = render(&["folio", "-vv", "analyze", "x.txt"], &[report()]);
        assert!(text.contains("  Page 1: 6 words, 32 chars, 1 sentences"));
    }

    #[test]
    fn test_json_single_and_many() {
        let one = render(&["folio", "-f", "json", "analyze", "x.txt"], &[report()]);
        let value: serde_json::Value = serde_json::from_str(&one).unwrap();
        assert_eq!(value["fileName"], "sample.pdf");
        assert_eq!(value["topWords"][0]["word"], "word");

        let many = render(
            &["folio", "-f", "json", "analyze", "x.txt"],
            &[report(), report()],
        );
        let value: serde_json::Value = serde_json::from_str(&many).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
