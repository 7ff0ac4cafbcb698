//! Format-specific parsers. Each module exposes `read(path, options) ->
//! Result<Table>` (delimited text additionally takes its delimiter byte);
//! the detection layer decides which one runs.

pub mod delimited;
pub mod excel;
pub mod json;
pub mod sas;
pub mod spss;
pub mod stata;
