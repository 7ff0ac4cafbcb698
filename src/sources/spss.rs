//! SPSS `.sav` and `.por` dispatch targets.
//!
//! No SPSS decoder crate exists on crates.io today, so both readers resolve
//! but fail with a typed [`ReadError::Unsupported`]. Classification and
//! dispatch for the SPSS family stay fully functional; only the byte-level
//! decode is missing.

use std::path::Path;

use crate::error::{ReadError, Result};
use crate::options::ReadOptions;
use crate::table::Table;

pub fn read_sav(_path: &Path, _options: &ReadOptions) -> Result<Table> {
    Err(ReadError::Unsupported {
        format: "SAV (SPSS)",
    })
}

pub fn read_por(_path: &Path, _options: &ReadOptions) -> Result<Table> {
    Err(ReadError::Unsupported {
        format: "POR (SPSS portable)",
    })
}
