//! JSON parsing: serde_json in front, arrow's JSON decoder behind.
//!
//! Accepts an array of objects or a single object (one row). Nested objects
//! come through as Arrow `Struct` columns — that is as rectangular as the
//! underlying decoder can make them without flattening data away.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use arrow::json::ReaderBuilder;
use arrow::json::reader::infer_json_schema_from_iterator;
use serde_json::Value;

use crate::error::{ReadError, Result};
use crate::options::ReadOptions;
use crate::table::Table;

pub fn read(path: &Path, options: &ReadOptions) -> Result<Table> {
    let file = File::open(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;

    let mut rows = match document {
        Value::Array(values) => {
            if !values.iter().all(Value::is_object) {
                return Err(ReadError::NonTabularJson);
            }
            values
        }
        object @ Value::Object(_) => vec![object],
        _ => return Err(ReadError::NonTabularJson),
    };

    if let Some(max_rows) = options.max_rows {
        rows.truncate(max_rows);
    }

    let schema = Arc::new(infer_json_schema_from_iterator(rows.iter().map(Ok))?);

    let mut decoder = ReaderBuilder::new(schema.clone()).build_decoder()?;
    decoder.serialize(&rows)?;
    let batches = decoder.flush()?.into_iter().collect();

    Ok(Table::new(schema, batches))
}
