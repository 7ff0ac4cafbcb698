//! The public reader facade.

use std::path::Path;

use tracing::info;

use crate::detection::{self, FormatCategory, FormatGuess};
use crate::error::{ReadError, Result};
use crate::options::ReadOptions;
use crate::table::Table;

/// Detect the format of `path` without reading it in full.
///
/// For everything except `.txt` this is a pure extension lookup. For `.txt`
/// the delimiter inferencer runs its bounded trial parses, so the returned
/// guess carries the winning delimiter.
pub fn sniff(path: impl AsRef<Path>) -> Result<FormatGuess> {
    let path = path.as_ref();
    match detection::classify(path)? {
        FormatCategory::AmbiguousText => detection::infer_delimiter(path),
        category => Ok(detection::resolve(category)),
    }
}

/// Read `path` with default options.
pub fn read(path: impl AsRef<Path>) -> Result<Table> {
    read_with_options(path, &ReadOptions::default())
}

/// Read `path`, forwarding `options` to whichever parser is selected.
///
/// An explicit delimiter in the options is rejected before anything else
/// happens: delimiter specification belongs to a dedicated parser, not to a
/// guessing layer. The guessed format label is reported on the non-error
/// channel before the table is returned.
pub fn read_with_options(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Table> {
    if options.delimiter.is_some() {
        return Err(ReadError::InvalidOption);
    }

    let path = path.as_ref();
    let guess = sniff(path)?;
    info!(path = %path.display(), format = guess.label(), "detected format");

    guess.read(path, options)
}
