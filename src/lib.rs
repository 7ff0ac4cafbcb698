pub mod commands;
pub mod detection;
pub mod error;
pub mod options;
pub mod reader;
pub mod sources;
pub mod table;

use std::io::{self, IsTerminal};

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum, builder::ValueHint};

pub use crate::detection::{FormatCategory, FormatGuess, HavenFormat, classify};
pub use crate::error::ReadError;
pub use crate::options::ReadOptions;
pub use crate::reader::{read, read_with_options, sniff};
pub use crate::table::Table;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guess a file's format and read it, printing a summary and preview.
    ///
    /// Examples:
    ///   # Read a CSV
    ///   tabread read data.csv
    ///
    ///   # Read an ambiguous text file, previewing 20 rows
    ///   tabread read data.txt --preview-rows 20
    ///
    ///   # Read the second sheet of a workbook
    ///   tabread read data.xlsx --sheet "Sheet2"
    #[command(verbatim_doc_comment)]
    Read(ReadArgs),

    /// Guess a file's format without reading it in full.
    ///
    /// Examples:
    ///   # Identify format
    ///   tabread identify data.txt
    ///
    ///   # Machine-readable output
    ///   tabread identify data.txt --format json
    #[command(verbatim_doc_comment)]
    Identify(IdentifyArgs),
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Path to the data file
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Utf8PathBuf,

    /// Maximum number of data rows to read
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Treat the first row as data, not column names
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Worksheet to read (spreadsheets only; defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Number of rows to show in the preview
    #[arg(long, default_value_t = 10)]
    pub preview_rows: usize,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', value_enum, default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Path to the data file
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Utf8PathBuf,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', value_enum, default_value = "auto")]
    pub format: OutputFormat,
}

/// Output format for CLI commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect: JSON if stdout is not a TTY, otherwise text
    #[default]
    Auto,
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

impl OutputFormat {
    pub fn resolves_to_json(&self) -> bool {
        match self {
            OutputFormat::Auto => !io::stdout().is_terminal(),
            OutputFormat::Text => false,
            OutputFormat::Json => true,
        }
    }
}
