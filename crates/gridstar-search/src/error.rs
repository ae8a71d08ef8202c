use std::fmt;

use gridstar_core::Pos;

/// A grid that cannot be searched as configured.
///
/// A search that merely finds no route is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No start cell is designated.
    MissingStart,
    /// No end cell is designated.
    MissingEnd,
    /// An endpoint lies outside the grid.
    OutOfBounds { pos: Pos, rows: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("search: invalid configuration: no start cell"),
            Self::MissingEnd => f.write_str("search: invalid configuration: no end cell"),
            Self::OutOfBounds { pos, rows } => write!(
                f,
                "search: invalid configuration: {pos} outside {rows}x{rows} grid"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
