//! Delimited-text parsing over arrow's CSV reader.
//!
//! Handles `.csv` files and every delimiter the inferencer can pick: the
//! delimiter byte is the only thing that distinguishes them.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;

use crate::error::Result;
use crate::options::ReadOptions;
use crate::table::Table;

/// Read the whole file under the given delimiter.
///
/// Schema inference runs over the full file first so column types settle on
/// the widest type any row needs, then the file is re-read into record
/// batches. Parse errors here are real errors; nothing is suppressed.
pub fn read(path: &Path, delimiter: u8, options: &ReadOptions) -> Result<Table> {
    let mut file = File::open(path)?;

    let format = Format::default()
        .with_header(options.has_header)
        .with_delimiter(delimiter);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.rewind()?;

    let schema = Arc::new(schema);
    let mut builder = ReaderBuilder::new(schema.clone()).with_format(format);
    if let Some(max_rows) = options.max_rows {
        builder = builder.with_bounds(0, max_rows);
    }

    let reader = builder.build(file)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Table::new(schema, batches))
}
