//! Spreadsheet parsing over calamine.
//!
//! Calamine hands back an untyped cell grid; columns are coerced to the
//! narrowest Arrow type that fits every non-empty cell in them (Float64,
//! Boolean, or Utf8 as the catch-all).

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::{ReadError, Result};
use crate::options::ReadOptions;
use crate::table::Table;

/// Read one worksheet into a table.
///
/// Honors `options.sheet` (falling back to the first sheet), `has_header`,
/// and `max_rows`.
pub fn read(path: &Path, options: &ReadOptions) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match &options.sheet {
        Some(name) => name.clone(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ReadError::NoWorksheet)?,
    };
    let range = workbook.worksheet_range(&sheet_name)?;

    range_to_table(&range, options)
}

fn range_to_table(range: &Range<Data>, options: &ReadOptions) -> Result<Table> {
    let width = range.width();
    let mut rows = range.rows();

    let names: Vec<String> = if options.has_header {
        match rows.next() {
            Some(header) => header.iter().map(cell_to_string).collect(),
            None => Vec::new(),
        }
    } else {
        (1..=width).map(|i| format!("column_{i}")).collect()
    };

    let mut grid: Vec<Vec<Data>> = Vec::new();
    for row in rows {
        if options.max_rows.is_some_and(|max| grid.len() >= max) {
            break;
        }
        let mut cells = row.to_vec();
        cells.resize(width, Data::Empty);
        grid.push(cells);
    }

    let mut fields = Vec::with_capacity(width);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(width);
    for (index, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = grid.iter().map(|row| &row[index]).collect();
        let (data_type, array) = coerce_column(&cells);
        fields.push(Field::new(name, data_type, true));
        columns.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let batches = if grid.is_empty() {
        Vec::new()
    } else {
        vec![RecordBatch::try_new(schema.clone(), columns)?]
    };

    Ok(Table::new(schema, batches))
}

/// Pick a column type from its cells: all-numeric becomes Float64,
/// all-boolean becomes Boolean, anything mixed is formatted as Utf8.
/// Empty cells are nulls under every typing.
fn coerce_column(cells: &[&Data]) -> (DataType, ArrayRef) {
    let occupied = cells.iter().filter(|c| !matches!(c, Data::Empty));

    let all_numeric = occupied
        .clone()
        .all(|c| matches!(c, Data::Int(_) | Data::Float(_)));
    if all_numeric {
        let values: Float64Array = cells
            .iter()
            .map(|c| match c {
                Data::Int(i) => Some(*i as f64),
                Data::Float(f) => Some(*f),
                _ => None,
            })
            .collect();
        return (DataType::Float64, Arc::new(values));
    }

    let all_bool = occupied.clone().all(|c| matches!(c, Data::Bool(_)));
    if all_bool {
        let values: BooleanArray = cells
            .iter()
            .map(|c| match c {
                Data::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        return (DataType::Boolean, Arc::new(values));
    }

    let values: StringArray = cells
        .iter()
        .map(|c| match c {
            Data::Empty => None,
            other => Some(cell_to_string(other)),
        })
        .collect();
    (DataType::Utf8, Arc::new(values))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}
