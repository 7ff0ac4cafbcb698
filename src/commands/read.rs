//! Read command: guess, read, and summarize a data file.

use anyhow::Result;
use arrow::array::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use serde_json::json;
use tabled::Tabled;

use crate::commands::style::{dim, label, rounded_table, value};
use crate::reader::sniff;
use crate::{ReadArgs, ReadOptions};

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "Type")]
    data_type: String,
}

pub fn run(args: &ReadArgs) -> Result<()> {
    let options = ReadOptions {
        has_header: !args.no_header,
        max_rows: args.max_rows,
        sheet: args.sheet.clone(),
        delimiter: None,
    };

    let path = args.file.as_std_path();
    let guess = sniff(path)?;
    let table = guess.read(path, &options)?;

    if args.format.resolves_to_json() {
        let columns: Vec<_> = table
            .schema()
            .fields()
            .iter()
            .map(|f| json!({ "name": f.name(), "type": f.data_type().to_string() }))
            .collect();
        println!(
            "{}",
            serde_json::to_string(&json!({
                "format": guess.label(),
                "path": args.file,
                "rows": table.num_rows(),
                "columns": columns,
            }))?
        );
        return Ok(());
    }

    println!("{} {}", label("format:"), value(guess.label()));
    println!("{} {}", label("path:"), args.file);
    println!(
        "{} {} {} {} {}",
        label("shape:"),
        value(table.num_rows()),
        dim("rows ×"),
        value(table.num_columns()),
        dim("columns")
    );

    let column_rows: Vec<ColumnRow> = table
        .schema()
        .fields()
        .iter()
        .map(|f| ColumnRow {
            name: f.name().clone(),
            data_type: f.data_type().to_string(),
        })
        .collect();
    println!("{}", rounded_table(column_rows));

    if args.preview_rows > 0 && table.num_rows() > 0 {
        let preview = preview_batches(table.batches(), args.preview_rows);
        println!("{}", pretty_format_batches(&preview)?);
        if table.num_rows() > args.preview_rows {
            println!(
                "{}",
                dim(format!(
                    "({} of {} rows shown)",
                    args.preview_rows.min(table.num_rows()),
                    table.num_rows()
                ))
            );
        }
    }

    Ok(())
}

/// Slice out at most `limit` rows from the front of `batches`.
fn preview_batches(batches: &[RecordBatch], limit: usize) -> Vec<RecordBatch> {
    let mut remaining = limit;
    let mut preview = Vec::new();
    for batch in batches {
        if remaining == 0 {
            break;
        }
        let take = batch.num_rows().min(remaining);
        preview.push(batch.slice(0, take));
        remaining -= take;
    }
    preview
}
