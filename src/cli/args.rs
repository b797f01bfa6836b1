//! Command line argument parsing for the Folio CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Folio - statistical profiles of extracted document text
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Word, sentence, sentiment and page statistics for extracted document text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FolioArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lexicon file (JSON with stop_words, positive and negative lists)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FolioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze extracted text files (pages separated by form feeds)
    Analyze(AnalyzeArgs),

    /// Print the summarization request for an extracted text file
    #[command(name = "summary-request")]
    SummaryRequest(SummaryRequestArgs),
}

/// Arguments for analyzing documents
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Extracted text files, one document each
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Reject documents the upload policy would reject
    #[arg(long)]
    pub validate: bool,
}

/// Arguments for building a summarization request
#[derive(Parser, Debug, Clone)]
pub struct SummaryRequestArgs {
    /// Extracted text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject documents the upload policy would reject
    #[arg(long)]
    pub validate: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
