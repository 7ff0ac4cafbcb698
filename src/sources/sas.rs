//! SAS `.sas7bdat` parsing over the `sas7bdat` crate.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Date32Array, Float64Array, Int64Array, RecordBatch, StringArray,
    Time32SecondArray, TimestampSecondArray,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use sas7bdat::{Dataset, LogicalType, OwnedCellValue, RowSelection};

use crate::error::Result;
use crate::options::ReadOptions;
use crate::table::Table;

pub fn read(path: &Path, options: &ReadOptions) -> Result<Table> {
    let dataset = Dataset::open(path)?;

    let rows = match options.max_rows {
        Some(max) => dataset.collect_rows_windowed(RowSelection::First(max as u64))?,
        None => dataset.collect_rows()?,
    };

    let column_meta = dataset.columns();
    let mut fields = Vec::with_capacity(column_meta.len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(column_meta.len());

    for meta in column_meta {
        let cells: Vec<&OwnedCellValue> = rows.iter().map(|row| &row.cells[meta.index]).collect();
        let (data_type, array) = build_column(meta.logical_type, &cells);
        fields.push(Field::new(meta.name(), data_type, true));
        columns.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let batches = if rows.is_empty() {
        Vec::new()
    } else {
        vec![RecordBatch::try_new(schema.clone(), columns)?]
    };

    Ok(Table::new(schema, batches))
}

/// Materialize one column, typed by the dataset's logical type. Cells whose
/// variant disagrees with the declared type become nulls.
fn build_column(logical_type: LogicalType, cells: &[&OwnedCellValue]) -> (DataType, ArrayRef) {
    match logical_type {
        LogicalType::Integer => {
            let values: Int64Array = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::Int32(v) => Some(i64::from(*v)),
                    OwnedCellValue::Int64(v) => Some(*v),
                    OwnedCellValue::Float64(v) => Some(*v as i64),
                    _ => None,
                })
                .collect();
            (DataType::Int64, Arc::new(values))
        }
        LogicalType::Float => {
            let values: Float64Array = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::Float64(v) => Some(*v),
                    OwnedCellValue::Int32(v) => Some(f64::from(*v)),
                    OwnedCellValue::Int64(v) => Some(*v as f64),
                    _ => None,
                })
                .collect();
            (DataType::Float64, Arc::new(values))
        }
        LogicalType::Date => {
            let values: Date32Array = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::Date(d) => Some(d.unix_days()),
                    _ => None,
                })
                .collect();
            (DataType::Date32, Arc::new(values))
        }
        LogicalType::DateTime => {
            let values: TimestampSecondArray = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::DateTime(dt) => Some(dt.unix_seconds()),
                    _ => None,
                })
                .collect();
            (DataType::Timestamp(TimeUnit::Second, None), Arc::new(values))
        }
        LogicalType::Time => {
            let values: Time32SecondArray = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::Time(t) => Some(t.seconds_since_midnight),
                    _ => None,
                })
                .collect();
            (DataType::Time32(TimeUnit::Second), Arc::new(values))
        }
        LogicalType::String | LogicalType::Bytes => {
            let values: StringArray = cells
                .iter()
                .map(|cell| match cell {
                    OwnedCellValue::String(s) => Some(s.clone()),
                    OwnedCellValue::Bytes(b) => Some(String::from_utf8_lossy(b).into_owned()),
                    _ => None,
                })
                .collect();
            (DataType::Utf8, Arc::new(values))
        }
    }
}
