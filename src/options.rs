//! Caller-supplied options forwarded to whichever parser is selected.

/// Options forwarded verbatim to the resolved parser.
///
/// Every field is optional in spirit: the defaults describe the common case
/// (header row present, read everything, first worksheet). Fields that a
/// given parser has no use for are ignored by it.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Treat the first row as column names. Delimited text and spreadsheets
    /// only; the binary formats carry their own schemas.
    pub has_header: bool,

    /// Cap on the number of data rows read by the full parse.
    pub max_rows: Option<usize>,

    /// Worksheet to read from a spreadsheet. Defaults to the first sheet.
    pub sheet: Option<String>,

    /// An explicit delimiter. Always rejected by [`crate::read_with_options`]:
    /// if you know the delimiter there is nothing for this crate to guess.
    pub delimiter: Option<u8>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            max_rows: None,
            sheet: None,
            delimiter: None,
        }
    }
}

impl ReadOptions {
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}
