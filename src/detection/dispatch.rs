//! Direct mapping from a non-ambiguous format category to its parser.

use super::{FormatCategory, FormatGuess, HavenFormat, ResolvedFormat};

/// Resolve a classified category to a parser and label. No inference here:
/// every arm is a one-to-one mapping, and the match is exhaustive so adding
/// a category without a parser fails to compile.
///
/// `AmbiguousText` is the one category this function cannot resolve; the
/// delimiter inferencer owns it.
pub fn resolve(category: FormatCategory) -> FormatGuess {
    match category {
        FormatCategory::Csv => FormatGuess::new("CSV", ResolvedFormat::Delimited(b',')),
        FormatCategory::Excel => FormatGuess::new("Excel", ResolvedFormat::Excel),
        FormatCategory::Json => FormatGuess::new("JSON", ResolvedFormat::Json),
        FormatCategory::Haven(HavenFormat::Stata) => {
            FormatGuess::new("DTA (Stata)", ResolvedFormat::Stata)
        }
        FormatCategory::Haven(HavenFormat::Sas) => {
            FormatGuess::new("SAS7BDAT (SAS)", ResolvedFormat::Sas)
        }
        FormatCategory::Haven(HavenFormat::SpssBinary) => {
            FormatGuess::new("SAV (SPSS)", ResolvedFormat::SpssBinary)
        }
        FormatCategory::Haven(HavenFormat::SpssPortable) => {
            FormatGuess::new("POR (SPSS portable)", ResolvedFormat::SpssPortable)
        }
        // Ambiguous text goes through the inferencer before dispatch ever
        // sees it; a comma guess keeps this match total.
        FormatCategory::AmbiguousText => {
            FormatGuess::new("comma-delimited", ResolvedFormat::Delimited(b','))
        }
    }
}
