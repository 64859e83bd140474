use serde::{Deserialize, Serialize};

/// Position of a diagnostic in the file.
///
/// The row is 1-indexed, the column is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
