//! Delimiter inference for `.txt` files.
//!
//! The extension says nothing about how a text file is delimited, so each of
//! five candidate delimiters gets a bounded trial parse and the results are
//! scored by column count. Trials are diagnostics-suppressed: a failing
//! candidate is simply absent from the scoreboard (surfaced at debug level
//! only), never an error of its own. The final full read is performed by the
//! winning candidate's parser with nothing suppressed.

use std::fs::File;
use std::path::Path;

use arrow::csv::reader::Format;
use tracing::debug;

use super::{FormatGuess, ResolvedFormat};
use crate::error::{ReadError, Result};

/// Rows a trial parse is allowed to look at.
const TRIAL_ROW_CAP: usize = 100;

/// One delimiter hypothesis.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    label: &'static str,
    delimiter: u8,
}

/// The candidate catalog. Order matters: it is the tie-break order, and
/// comma outranks everything because the space candidate is prone to
/// over-splitting unrelated whitespace into spurious columns.
const CANDIDATES: [Candidate; 5] = [
    Candidate {
        label: "comma-delimited",
        delimiter: b',',
    },
    Candidate {
        label: "tab-delimited",
        delimiter: b'\t',
    },
    Candidate {
        label: "semicolon-delimited",
        delimiter: b';',
    },
    Candidate {
        label: "pipe-delimited",
        delimiter: b'|',
    },
    Candidate {
        label: "space-delimited",
        delimiter: b' ',
    },
];

/// A candidate that survived its trial parse, with the column count the
/// bounded parse produced.
#[derive(Debug, Clone, Copy)]
struct ScoredAttempt {
    candidate: Candidate,
    columns: usize,
}

/// Infer the delimiter of an ambiguous text file and return the format
/// guess binding it.
///
/// Candidates whose trial fails fatally contribute no score. Candidates
/// that parse to exactly one column are discarded: a single column almost
/// always means the delimiter matched nothing and the file degenerated into
/// one blob column. (A file that is genuinely single-column under its true
/// delimiter is indistinguishable from that and will be rejected too.)
/// Among the survivors the minimum column count wins, catalog order breaking
/// ties.
pub fn infer_delimiter(path: &Path) -> Result<FormatGuess> {
    let mut survivors: Vec<ScoredAttempt> = Vec::with_capacity(CANDIDATES.len());

    for candidate in CANDIDATES {
        match trial_parse(path, candidate.delimiter) {
            Ok(columns) if columns > 1 => {
                survivors.push(ScoredAttempt { candidate, columns });
            }
            Ok(columns) => {
                debug!(
                    candidate = candidate.label,
                    columns, "trial parse discarded"
                );
            }
            Err(e) => {
                debug!(candidate = candidate.label, error = %e, "trial parse failed");
            }
        }
    }

    let winner = survivors
        .iter()
        .reduce(|best, attempt| {
            // strict comparison keeps the earlier candidate on ties
            if attempt.columns < best.columns {
                attempt
            } else {
                best
            }
        })
        .ok_or_else(|| ReadError::DelimiterAmbiguity {
            path: path.to_path_buf(),
        })?;

    debug!(
        winner = winner.candidate.label,
        columns = winner.columns,
        "delimiter inferred"
    );

    Ok(FormatGuess::new(
        winner.candidate.label,
        ResolvedFormat::Delimited(winner.candidate.delimiter),
    ))
}

/// Bounded trial parse: infer a schema from at most [`TRIAL_ROW_CAP`] rows
/// under the given delimiter and report how many columns came out.
///
/// An empty schema (empty file) is treated as a failed trial — there is no
/// table in it for any delimiter to have produced.
fn trial_parse(path: &Path, delimiter: u8) -> Result<usize> {
    let mut file = File::open(path)?;
    let format = Format::default()
        .with_header(true)
        .with_delimiter(delimiter);
    let (schema, _) = format.infer_schema(&mut file, Some(TRIAL_ROW_CAP))?;

    if schema.fields().is_empty() {
        return Err(ReadError::DelimiterAmbiguity {
            path: path.to_path_buf(),
        });
    }

    Ok(schema.fields().len())
}
