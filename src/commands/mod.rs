//! CLI command implementations.

pub mod identify;
pub mod read;
pub mod style;
