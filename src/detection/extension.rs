//! Extension-based format classification.

use std::path::Path;

use serde::Serialize;

use crate::error::{ReadError, Result};

/// The format family a path's extension places it in.
///
/// `AmbiguousText` means the extension alone is not enough and the delimiter
/// inferencer has to look at the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Csv,
    AmbiguousText,
    Excel,
    Haven(HavenFormat),
    Json,
}

/// Sub-formats of the statistical-package family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HavenFormat {
    Stata,
    Sas,
    SpssBinary,
    SpssPortable,
}

/// Classify a path by its extension, case-insensitively.
///
/// The excel and SAS matches are deliberately loose: any extension
/// containing `xls` (xls, xlsx, xlsm, ...) is a spreadsheet, and anything
/// starting with `sas7` (sas7bdat, sas7bcat) is SAS. Real-world files are
/// sloppy about exact extensions; exact-equality matching would reject them.
///
/// Pure function of the path string; never touches the filesystem.
pub fn classify(path: &Path) -> Result<FormatCategory> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| ReadError::UnrecognizedFormat {
            path: path.to_path_buf(),
        })?;

    let category = match extension.as_str() {
        "csv" => FormatCategory::Csv,
        "txt" => FormatCategory::AmbiguousText,
        "json" => FormatCategory::Json,
        "dta" => FormatCategory::Haven(HavenFormat::Stata),
        "sav" => FormatCategory::Haven(HavenFormat::SpssBinary),
        "por" => FormatCategory::Haven(HavenFormat::SpssPortable),
        ext if ext.contains("xls") => FormatCategory::Excel,
        ext if ext.starts_with("sas7") => FormatCategory::Haven(HavenFormat::Sas),
        _ => {
            return Err(ReadError::UnrecognizedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    Ok(category)
}
