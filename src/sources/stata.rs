//! Stata `.dta` parsing over the `dta` crate's typestate reader.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int32Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use dta::stata::dta::dta_reader::DtaReader;
use dta::stata::dta::value::Value;
use dta::stata::dta::variable_type::VariableType;

use crate::error::Result;
use crate::options::ReadOptions;
use crate::table::Table;

/// Per-column accumulator matching the Stata storage class.
enum ColumnBuilder {
    Int(Vec<Option<i32>>),
    Float(Vec<Option<f64>>),
    Str(Vec<Option<String>>),
}

impl ColumnBuilder {
    fn for_type(variable_type: VariableType) -> Self {
        match variable_type {
            VariableType::Byte | VariableType::Int | VariableType::Long => Self::Int(Vec::new()),
            VariableType::Float | VariableType::Double => Self::Float(Vec::new()),
            VariableType::FixedString(_) | VariableType::LongString => Self::Str(Vec::new()),
        }
    }

    fn push(&mut self, value: &Value<'_>) {
        match (self, value) {
            (Self::Int(col), Value::Byte(v)) => col.push(v.present().map(i32::from)),
            (Self::Int(col), Value::Int(v)) => col.push(v.present().map(i32::from)),
            (Self::Int(col), Value::Long(v)) => col.push(v.present()),
            (Self::Float(col), Value::Float(v)) => col.push(v.present().map(f64::from)),
            (Self::Float(col), Value::Double(v)) => col.push(v.present()),
            (Self::Str(col), Value::String(s)) => col.push(Some(s.to_string())),
            // strL payloads live in a section past the records; they are not
            // resolvable during the row scan.
            (Self::Str(col), Value::LongStringRef(_)) => col.push(None),
            // value/type disagreement cannot happen for records the schema
            // produced, but a null is the safe landing for it
            (Self::Int(col), _) => col.push(None),
            (Self::Float(col), _) => col.push(None),
            (Self::Str(col), _) => col.push(None),
        }
    }

    fn finish(self) -> (DataType, ArrayRef) {
        match self {
            Self::Int(col) => (DataType::Int32, Arc::new(Int32Array::from(col)) as ArrayRef),
            Self::Float(col) => (
                DataType::Float64,
                Arc::new(Float64Array::from(col)) as ArrayRef,
            ),
            Self::Str(col) => (DataType::Utf8, Arc::new(StringArray::from(col)) as ArrayRef),
        }
    }
}

pub fn read(path: &Path, options: &ReadOptions) -> Result<Table> {
    let mut characteristic_reader = DtaReader::new()
        .from_path(path)?
        .read_header()?
        .read_schema()?;
    characteristic_reader.skip_to_end()?;

    let mut record_reader = characteristic_reader.into_record_reader()?;
    let stata_schema = record_reader.schema().clone();

    let mut builders: Vec<ColumnBuilder> = stata_schema
        .variables()
        .iter()
        .map(|variable| ColumnBuilder::for_type(variable.variable_type()))
        .collect();

    let mut rows_read = 0usize;
    while let Some(record) = record_reader.read_record()? {
        if options.max_rows.is_some_and(|max| rows_read >= max) {
            break;
        }
        for (builder, value) in builders.iter_mut().zip(record.values()) {
            builder.push(value);
        }
        rows_read += 1;
    }

    let mut fields = Vec::with_capacity(builders.len());
    let mut columns = Vec::with_capacity(builders.len());
    for (variable, builder) in stata_schema.variables().iter().zip(builders) {
        let (data_type, array) = builder.finish();
        fields.push(Field::new(variable.name(), data_type, true));
        columns.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let batches = if rows_read == 0 {
        Vec::new()
    } else {
        vec![RecordBatch::try_new(schema.clone(), columns)?]
    };

    Ok(Table::new(schema, batches))
}
