//! Error types surfaced by the reader facade and its parsers.

use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The caller asked for an explicit delimiter. Delimiter selection is the
    /// whole point of this crate; callers who already know the delimiter
    /// should use a dedicated delimited-text reader instead.
    #[error(
        "explicit delimiters are not supported; use a dedicated delimited-text reader if you already know the delimiter"
    )]
    InvalidOption,

    /// The extension is missing or matches no supported format.
    #[error("unrecognized file format for `{}`", path.display())]
    UnrecognizedFormat { path: PathBuf },

    /// Every candidate delimiter either failed its trial parse or produced a
    /// single-column result.
    #[error("delimiters are unusual, cannot parse `{}`", path.display())]
    DelimiterAmbiguity { path: PathBuf },

    /// A recognized format with no reader backend available.
    #[error("no reader is available for {format} files")]
    Unsupported { format: &'static str },

    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The JSON document is not an object or an array of objects, so there is
    /// no rectangular shape to extract.
    #[error("JSON document is not an object or an array of objects")]
    NonTabularJson,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Arrow(#[from] ArrowError),

    #[error(transparent)]
    Excel(#[from] calamine::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Stata(#[from] dta::stata::dta::dta_error::DtaError),

    #[error(transparent)]
    Sas(#[from] sas7bdat::Error),
}

pub type Result<T> = std::result::Result<T, ReadError>;
