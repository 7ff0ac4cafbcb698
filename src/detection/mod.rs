//! Format detection: extension classification, delimiter inference, and the
//! dispatch table that binds a detected format to its parser.

pub mod delimiter;
pub mod dispatch;
pub mod extension;

use std::path::Path;

use serde_json::{Value, json};

use crate::error::Result;
use crate::options::ReadOptions;
use crate::sources;
use crate::table::Table;

pub use delimiter::infer_delimiter;
pub use dispatch::resolve;
pub use extension::{FormatCategory, HavenFormat, classify};

/// The concrete parser a detected format resolves to.
///
/// One variant per parser backend; `FormatGuess::read` is an exhaustive
/// match, so an unmapped format cannot slip through as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFormat {
    Delimited(u8),
    Excel,
    Json,
    Stata,
    Sas,
    SpssBinary,
    SpssPortable,
}

/// A fully resolved format guess: the human-readable label reported to the
/// caller and the parser that will perform the read.
///
/// Built fresh on every detection, never stored anywhere shared; the parser
/// is bound at construction so a partially initialized guess cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatGuess {
    label: &'static str,
    format: ResolvedFormat,
}

impl FormatGuess {
    pub(crate) fn new(label: &'static str, format: ResolvedFormat) -> Self {
        Self { label, format }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn format(&self) -> ResolvedFormat {
        self.format
    }

    /// Run the resolved parser against `path`, forwarding the caller's
    /// options unmodified. Parser failures propagate unchanged.
    pub fn read(&self, path: &Path, options: &ReadOptions) -> Result<Table> {
        match self.format {
            ResolvedFormat::Delimited(delimiter) => {
                sources::delimited::read(path, delimiter, options)
            }
            ResolvedFormat::Excel => sources::excel::read(path, options),
            ResolvedFormat::Json => sources::json::read(path, options),
            ResolvedFormat::Stata => sources::stata::read(path, options),
            ResolvedFormat::Sas => sources::sas::read(path, options),
            ResolvedFormat::SpssBinary => sources::spss::read_sav(path, options),
            ResolvedFormat::SpssPortable => sources::spss::read_por(path, options),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "format": self.label })
    }
}

impl std::fmt::Display for FormatGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
