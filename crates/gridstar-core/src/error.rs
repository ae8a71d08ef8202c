use std::fmt;

use crate::geom::Pos;

/// Errors produced when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row.
    ZeroSize,
    /// A size whose cell count does not fit in memory addressing.
    TooLarge { rows: usize },
    /// A position outside `[0, rows)` on either axis.
    OutOfBounds { pos: Pos, rows: usize },
    /// ASCII input whose lines do not form an N×N square.
    NotSquare { line: usize, width: usize, rows: usize },
    /// A character other than `.`, `#`, `S` or `E` in ASCII input.
    InvalidChar { ch: char, pos: Pos },
    /// A second `S` in ASCII input.
    DuplicateStart(Pos),
    /// A second `E` in ASCII input.
    DuplicateEnd(Pos),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => f.write_str("grid: size must be at least 1"),
            Self::TooLarge { rows } => write!(f, "grid: size {rows} is too large"),
            Self::OutOfBounds { pos, rows } => {
                write!(f, "grid: position {pos} outside {rows}x{rows} grid")
            }
            Self::NotSquare { line, width, rows } => write!(
                f,
                "grid: line {line} has width {width}, expected {rows} (grid must be square)"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character '{ch}' at {pos}")
            }
            Self::DuplicateStart(pos) => write!(f, "grid: second start cell at {pos}"),
            Self::DuplicateEnd(pos) => write!(f, "grid: second end cell at {pos}"),
        }
    }
}

impl std::error::Error for GridError {}
