//! Identify command: report the guessed format without a full read.

use anyhow::Result;
use serde_json::json;

use crate::IdentifyArgs;
use crate::commands::style::{label, value};
use crate::reader::sniff;

pub fn run(args: &IdentifyArgs) -> Result<()> {
    let guess = sniff(args.file.as_std_path())?;

    if args.format.resolves_to_json() {
        println!(
            "{}",
            serde_json::to_string(&json!({
                "format": guess.label(),
                "path": args.file,
            }))?
        );
    } else {
        println!("{} {}", label("format:"), value(guess.label()));
        println!("{} {}", label("path:"), args.file);
    }

    Ok(())
}
