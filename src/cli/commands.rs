//! Command implementations for the Folio CLI.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

use crate::analysis::lexicon::Lexicon;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FolioConfig;
use crate::document::RawDocument;
use crate::engine::DocumentAnalyzer;
use crate::error::{FolioError, Result};
use crate::summarize::SummaryRequest;

/// Execute a CLI command, writing to standard output.
pub fn execute_command(args: FolioArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)
}

/// Execute a CLI command, writing to `out`.
pub fn run_command<W: Write>(args: &FolioArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_files(analyze_args, args, out),
        Command::SummaryRequest(request_args) => summary_request(request_args, args, out),
    }
}

/// Load the configuration and lexicon named on the command line.
pub fn load_settings(args: &FolioArgs) -> Result<(FolioConfig, Lexicon)> {
    let config = match &args.config {
        Some(path) => FolioConfig::from_path(path)?,
        None => FolioConfig::default(),
    };

    let lexicon = match &args.lexicon {
        Some(path) => {
            log::info!("Loading lexicon from: {}", path.display());
            Lexicon::from_path(path)?
        }
        None => Lexicon::english(),
    };

    Ok((config, lexicon))
}

/// Read an extracted text file as a document.
///
/// Pages are separated by form feeds. The document is named after the file,
/// minus a trailing `.txt`, so `report.pdf.txt` becomes `report.pdf`.
pub fn read_document(path: &Path) -> Result<RawDocument> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FolioError::other(format!("not a file: {}", path.display())))?;
    let file_name = match file_name.strip_suffix(".txt") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    };

    let document = RawDocument::from_form_feed_text(&text, file_name, bytes.len() as u64);
    log::debug!(
        "Read {} ({} pages, {} bytes)",
        path.display(),
        document.page_count(),
        document.file_size
    );
    Ok(document)
}

fn load_document(path: &Path, config: &FolioConfig, validate: bool) -> Result<RawDocument> {
    let document = read_document(path)?;
    if validate {
        config.policy.validate(&document).inspect_err(|e| {
            log::warn!("Rejected {}: {}", document.file_name, e);
        })?;
    }
    Ok(document)
}

/// Analyze one or more documents.
fn analyze_files<W: Write>(
    args: &AnalyzeArgs,
    cli_args: &FolioArgs,
    out: &mut W,
) -> Result<()> {
    let (config, lexicon) = load_settings(cli_args)?;
    let documents = args
        .files
        .iter()
        .map(|path| load_document(path, &config, args.validate))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Analyzing {} document(s)", documents.len());
    let analyzer = DocumentAnalyzer::new(config.analysis, lexicon);
    let reports = analyzer.analyze_many(&documents);

    write_reports(&reports, cli_args, out)
}

/// Build the summarization request for one document.
fn summary_request<W: Write>(
    args: &SummaryRequestArgs,
    cli_args: &FolioArgs,
    out: &mut W,
) -> Result<()> {
    let (config, lexicon) = load_settings(cli_args)?;
    let document = load_document(&args.file, &config, args.validate)?;

    let report = DocumentAnalyzer::new(config.analysis, lexicon).analyze(&document);
    let request = SummaryRequest::from_report(&report, &document.full_text(), &config.summary);

    write_summary_request(&request, cli_args, out)
}
