use thiserror::Error;

/// The source could not be parsed into a syntax tree.
///
/// Checking requires a complete tree, so a file with R syntax errors is
/// reported as a whole instead of producing partial diagnostics.
#[derive(Debug, Error)]
#[error("the source contains R syntax errors and cannot be checked")]
pub struct ParseError;
