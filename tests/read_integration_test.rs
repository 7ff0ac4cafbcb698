//! Integration tests for the reader facade.
//!
//! Creates temp files in each supported format and verifies that `read`
//! picks the documented parser and returns the expected table.

use std::fs;
use std::path::{Path, PathBuf};

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use tabread::{ReadError, ReadOptions, read, read_with_options, sniff};
use tempfile::TempDir;

mod test_helpers {
    use super::*;

    pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_xlsx(path: &Path, header: &[&str], rows: &[&[f64]]) {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, name) in header.iter().enumerate() {
            worksheet.write(0, col as u16, *name).unwrap();
        }
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                worksheet.write(row as u32 + 1, col as u16, *value).unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    pub fn write_dta(path: &Path) {
        use dta::stata::dta::byte_order::ByteOrder;
        use dta::stata::dta::dta_writer::DtaWriter;
        use dta::stata::dta::header::Header;
        use dta::stata::dta::release::Release;
        use dta::stata::dta::schema::Schema;
        use dta::stata::dta::value::Value;
        use dta::stata::dta::variable::Variable;
        use dta::stata::dta::variable_type::VariableType;
        use dta::stata::stata_long::StataLong;

        let header = Header::builder(Release::V118, ByteOrder::LittleEndian).build();
        let schema = Schema::builder()
            .add_variable(Variable::builder(VariableType::Long, "id").format("%12.0g"))
            .add_variable(Variable::builder(VariableType::FixedString(10), "name").format("%10s"))
            .build()
            .unwrap();

        let mut record_writer = DtaWriter::new()
            .from_path(path)
            .unwrap()
            .write_header(header)
            .unwrap()
            .write_schema(schema)
            .unwrap()
            .into_record_writer()
            .unwrap();
        for (id, name) in [(1, "ada"), (2, "grace"), (3, "edsger")] {
            record_writer
                .write_record(&[Value::Long(StataLong::Present(id)), Value::string(name)])
                .unwrap();
        }
        record_writer
            .into_long_string_writer()
            .unwrap()
            .into_value_label_writer()
            .unwrap()
            .finish()
            .unwrap();
    }
}

// =============================================================================
// CSV and delimited text
// =============================================================================

#[test]
fn test_csv_reads_one_by_three() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "a,b,c\n1,2,3\n");

    assert_eq!(sniff(&path).unwrap().label(), "CSV");

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.num_columns(), 3);
    assert_eq!(table.column_names(), vec!["a", "b", "c"]);
}

#[test]
fn test_pipe_txt_reads_one_by_three() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.txt", "a|b|c\n1|2|3\n");

    assert_eq!(sniff(&path).unwrap().label(), "pipe-delimited");

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.num_columns(), 3);
    assert_eq!(table.column_names(), vec!["a", "b", "c"]);
}

#[test]
fn test_read_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "x,y\n1,hello\n2,world\n");

    let first = read(&path).unwrap();
    let second = read(&path).unwrap();

    assert_eq!(first.schema(), second.schema());
    assert_eq!(first.num_rows(), second.num_rows());
    assert_eq!(first.batches(), second.batches());
}

#[test]
fn test_repeated_sniff_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.txt", "a;b\n1;2\n");

    let labels: Vec<_> = (0..5).map(|_| sniff(&path).unwrap().label()).collect();
    assert!(labels.iter().all(|l| *l == "semicolon-delimited"));
}

// =============================================================================
// Option validation
// =============================================================================

#[test]
fn test_delimiter_override_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "a,b\n1,2\n");

    let options = ReadOptions {
        delimiter: Some(b';'),
        ..ReadOptions::default()
    };
    let err = read_with_options(&path, &options).unwrap_err();
    assert!(matches!(err, ReadError::InvalidOption));
}

#[test]
fn test_delimiter_override_is_rejected_before_classification() {
    // even a path that would fail classification reports the option error
    let options = ReadOptions {
        delimiter: Some(b','),
        ..ReadOptions::default()
    };
    let err = read_with_options("no-such-file.foo", &options).unwrap_err();
    assert!(matches!(err, ReadError::InvalidOption));
}

// =============================================================================
// Classification failures
// =============================================================================

#[test]
fn test_unknown_extension_is_unrecognized() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.foo", "a,b\n1,2\n");

    let err = read(&path).unwrap_err();
    assert!(matches!(err, ReadError::UnrecognizedFormat { .. }));
}

#[test]
fn test_extensionless_path_is_unrecognized() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data", "a,b\n1,2\n");

    let err = read(&path).unwrap_err();
    assert!(matches!(err, ReadError::UnrecognizedFormat { .. }));
}

#[test]
fn test_single_column_txt_is_ambiguous() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.txt", "alpha\nbeta\ngamma\n");

    let err = read(&path).unwrap_err();
    assert!(matches!(err, ReadError::DelimiterAmbiguity { .. }));
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_json_array_of_objects() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(
        &dir,
        "data.json",
        r#"[{"id": 1, "name": "ada"}, {"id": 2, "name": "grace"}]"#,
    );

    assert_eq!(sniff(&path).unwrap().label(), "JSON");

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.num_columns(), 2);
}

#[test]
fn test_json_nested_objects_become_struct_columns() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(
        &dir,
        "data.json",
        r#"[{"id": 1, "user": {"name": "ada"}}, {"id": 2, "user": {"name": "grace"}}]"#,
    );

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 2);
    let user_field = table.schema().field_with_name("user").unwrap().clone();
    assert!(matches!(user_field.data_type(), DataType::Struct(_)));
}

// =============================================================================
// Excel
// =============================================================================

#[test]
fn test_xlsx_reads_numeric_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.xlsx");
    test_helpers::write_xlsx(&path, &["a", "b"], &[&[1.0, 2.0], &[3.0, 4.0]]);

    assert_eq!(sniff(&path).unwrap().label(), "Excel");

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.column_names(), vec!["a", "b"]);

    let batch = &table.batches()[0];
    let column = batch
        .column(0)
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();
    assert_eq!(column.value(0), 1.0);
    assert_eq!(column.value(1), 3.0);
}

#[test]
fn test_xlsx_max_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.xlsx");
    test_helpers::write_xlsx(&path, &["a"], &[&[1.0], &[2.0], &[3.0]]);

    let table = read_with_options(&path, &ReadOptions::default().with_max_rows(2)).unwrap();
    assert_eq!(table.num_rows(), 2);
}

#[test]
fn test_xlsx_missing_sheet_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.xlsx");
    test_helpers::write_xlsx(&path, &["a"], &[&[1.0]]);

    let options = ReadOptions::default().with_sheet("NoSuchSheet");
    assert!(read_with_options(&path, &options).is_err());
}

// =============================================================================
// Statistical formats
// =============================================================================

#[test]
fn test_dta_round_trips_through_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.dta");
    test_helpers::write_dta(&path);

    assert_eq!(sniff(&path).unwrap().label(), "DTA (Stata)");

    let table = read(&path).unwrap();
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.column_names(), vec!["id", "name"]);

    let batch = &table.batches()[0];
    let names = batch
        .column(1)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(names.value(0), "ada");
    assert_eq!(names.value(2), "edsger");
}

#[test]
fn test_dta_max_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.dta");
    test_helpers::write_dta(&path);

    let table = read_with_options(&path, &ReadOptions::default().with_max_rows(1)).unwrap();
    assert_eq!(table.num_rows(), 1);
}

#[test]
fn test_sas_extension_is_classified() {
    // no SAS writer exists to build a fixture, so this covers the
    // classification and dispatch half only
    assert_eq!(
        sniff(Path::new("data.sas7bdat")).unwrap().label(),
        "SAS7BDAT (SAS)"
    );
    assert_eq!(
        sniff(Path::new("data.sas7bcat")).unwrap().label(),
        "SAS7BDAT (SAS)"
    );
}

#[test]
fn test_spss_formats_resolve_but_reading_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let sav = test_helpers::write_file(&dir, "data.sav", "");
    let por = test_helpers::write_file(&dir, "data.por", "");

    assert_eq!(sniff(&sav).unwrap().label(), "SAV (SPSS)");
    assert_eq!(sniff(&por).unwrap().label(), "POR (SPSS portable)");

    assert!(matches!(
        read(&sav).unwrap_err(),
        ReadError::Unsupported { .. }
    ));
    assert!(matches!(
        read(&por).unwrap_err(),
        ReadError::Unsupported { .. }
    ));
}

// =============================================================================
// Parser errors propagate unchanged
// =============================================================================

#[test]
fn test_corrupt_dta_propagates_parser_error() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.dta", "this is not a dta file");

    assert!(matches!(read(&path).unwrap_err(), ReadError::Stata(_)));
}

#[test]
fn test_corrupt_xlsx_propagates_parser_error() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.xlsx", "this is not a workbook");

    assert!(read(&path).is_err());
}

// =============================================================================
// Forwarded options
// =============================================================================

#[test]
fn test_max_rows_applies_to_delimited_text() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "a,b\n1,2\n3,4\n5,6\n");

    let table = read_with_options(&path, &ReadOptions::default().with_max_rows(2)).unwrap();
    assert_eq!(table.num_rows(), 2);
}

#[test]
fn test_headerless_csv() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "1,2\n3,4\n");

    let table = read_with_options(&path, &ReadOptions::default().with_header(false)).unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.column_names(), vec!["column_1", "column_2"]);
}

#[test]
fn test_numeric_csv_columns_get_numeric_types() {
    let dir = TempDir::new().unwrap();
    let path = test_helpers::write_file(&dir, "data.csv", "a,b\n1,x\n2,y\n");

    let table = read(&path).unwrap();
    let batch = &table.batches()[0];
    assert!(
        batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .is_some()
    );
}
