//! Geometry primitives: [`Pos`] and [`Dir`].
//!
//! Coordinates are `(row, col)` with row growing downwards, matching the way
//! a square board is addressed by its users.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// Identity of a grid cell. No two cells of a grid share a `Pos`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Top-left corner.
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step in `dir`, or `None` if that would leave the
    /// non-negative quadrant. Upper bounds are the grid's business.
    #[inline]
    pub fn step(self, dir: Dir) -> Option<Pos> {
        match dir {
            Dir::Down => Some(Self::new(self.row + 1, self.col)),
            Dir::Up => self.row.checked_sub(1).map(|r| Self::new(r, self.col)),
            Dir::Right => Some(Self::new(self.row, self.col + 1)),
            Dir::Left => self.col.checked_sub(1).map(|c| Self::new(self.row, c)),
        }
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Down,
    Up,
    Right,
    Left,
}

impl Dir {
    /// Neighbor enumeration order. Tie-breaking between equal-cost paths
    /// depends on it, so it must never change.
    pub const ORDER: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];
}
