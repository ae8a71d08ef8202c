//! The square obstacle grid searched by `gridstar-search`.
//!
//! A [`Grid`] owns the passability of all N² cells plus the designated start
//! and end cells. Passability is the only per-cell state: anything a viewer
//! wants to show about a running search (open, closed, on the path) lives
//! outside the grid.

use std::fmt;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Dir, Pos};

/// Whether a cell can be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passability {
    #[default]
    Free,
    Barrier,
}

/// The observable state of a cell: its passability, or its designation as
/// the start or end of the next search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Free,
    Barrier,
    Start,
    End,
}

impl CellState {
    /// ASCII glyph used by [`Grid::from_ascii`] and the `Display` impl.
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Barrier),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// A snapshot of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub pos: Pos,
    pub state: CellState,
}

impl Cell {
    #[inline]
    pub fn is_barrier(self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_start(self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.state == CellState::End
    }
}

/// A square grid of cells with at most one start and one end.
///
/// Invariants kept by every mutator:
/// - start and end, when set, are distinct cells;
/// - neither start nor end is a barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cells: Vec<Passability>,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Grid {
    /// Create an empty `rows`×`rows` grid.
    pub fn new(rows: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroSize);
        }
        let len = rows.checked_mul(rows).ok_or(GridError::TooLarge { rows })?;
        Ok(Self {
            rows,
            cells: vec![Passability::Free; len],
            start: None,
            end: None,
        })
    }

    /// Create an empty grid sized by `cfg`.
    pub fn with_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Self::new(cfg.rows)
    }

    /// Parse a grid from text, one line per row: `.` free, `#` barrier,
    /// `S` start, `E` end. Whitespace around lines and blank lines before or
    /// after the board are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
            return Err(GridError::ZeroSize);
        };
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let body = &lines[first..=last];

        let rows = body.len();
        for (row, line) in body.iter().enumerate() {
            let width = line.chars().count();
            if width != rows {
                return Err(GridError::NotSquare {
                    line: row,
                    width,
                    rows,
                });
            }
        }

        let mut grid = Self::new(rows)?;
        for (row, line) in body.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, col);
                match CellState::from_glyph(ch) {
                    Some(CellState::Free) => {}
                    Some(CellState::Barrier) => grid.set_barrier(pos)?,
                    Some(CellState::Start) => {
                        if grid.start.is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                        grid.set_start(pos)?;
                    }
                    Some(CellState::End) => {
                        if grid.end.is_some() {
                            return Err(GridError::DuplicateEnd(pos));
                        }
                        grid.set_end(pos)?;
                    }
                    None => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }

    #[inline]
    fn idx(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.rows + pos.col)
    }

    fn check(&self, pos: Pos) -> Result<usize, GridError> {
        self.idx(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows,
        })
    }

    /// The designated start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The designated end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    pub fn passability(&self, pos: Pos) -> Option<Passability> {
        self.idx(pos).map(|i| self.cells[i])
    }

    /// State of the cell at `pos`, or `None` if out of bounds.
    pub fn state(&self, pos: Pos) -> Option<CellState> {
        let i = self.idx(pos)?;
        Some(self.state_at(i, pos))
    }

    fn state_at(&self, i: usize, pos: Pos) -> CellState {
        if self.start == Some(pos) {
            CellState::Start
        } else if self.end == Some(pos) {
            CellState::End
        } else {
            match self.cells[i] {
                Passability::Free => CellState::Free,
                Passability::Barrier => CellState::Barrier,
            }
        }
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.state(pos).map(|state| Cell { pos, state })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |i| {
            let pos = Pos::new(i / self.rows, i % self.rows);
            Cell {
                pos,
                state: self.state_at(i, pos),
            }
        })
    }

    #[inline]
    pub fn is_barrier(&self, pos: Pos) -> bool {
        self.passability(pos) == Some(Passability::Barrier)
    }

    #[inline]
    pub fn is_start(&self, pos: Pos) -> bool {
        self.start == Some(pos)
    }

    #[inline]
    pub fn is_end(&self, pos: Pos) -> bool {
        self.end == Some(pos)
    }

    /// Number of barrier cells.
    pub fn barrier_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Passability::Barrier)
            .count()
    }

    /// Append the in-bounds, non-barrier neighbors of `pos` to `buf`, in
    /// [`Dir::ORDER`] (down, up, right, left). Nothing is appended for an
    /// out-of-bounds `pos`.
    pub fn neighbors_into(&self, pos: Pos, buf: &mut Vec<Pos>) {
        if !self.contains(pos) {
            return;
        }
        for dir in Dir::ORDER {
            if let Some(n) = pos.step(dir) {
                if self.contains(n) && !self.is_barrier(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// The in-bounds, non-barrier neighbors of `pos` (down, up, right, left).
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Designate `pos` as the start. The cell becomes free; an end
    /// designation at `pos` is dropped.
    pub fn set_start(&mut self, pos: Pos) -> Result<(), GridError> {
        let i = self.check(pos)?;
        self.cells[i] = Passability::Free;
        if self.end == Some(pos) {
            self.end = None;
        }
        self.start = Some(pos);
        log::trace!("grid: start at {pos}");
        Ok(())
    }

    /// Designate `pos` as the end. The cell becomes free; a start
    /// designation at `pos` is dropped.
    pub fn set_end(&mut self, pos: Pos) -> Result<(), GridError> {
        let i = self.check(pos)?;
        self.cells[i] = Passability::Free;
        if self.start == Some(pos) {
            self.start = None;
        }
        self.end = Some(pos);
        log::trace!("grid: end at {pos}");
        Ok(())
    }

    /// Turn `pos` into a barrier, dropping any designation it held.
    pub fn set_barrier(&mut self, pos: Pos) -> Result<(), GridError> {
        let i = self.check(pos)?;
        self.unmark(pos);
        self.cells[i] = Passability::Barrier;
        log::trace!("grid: barrier at {pos}");
        Ok(())
    }

    /// Make `pos` a plain free cell.
    pub fn reset(&mut self, pos: Pos) -> Result<(), GridError> {
        let i = self.check(pos)?;
        self.unmark(pos);
        self.cells[i] = Passability::Free;
        log::trace!("grid: reset {pos}");
        Ok(())
    }

    fn unmark(&mut self, pos: Pos) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
    }

    /// Apply the primary editing action to `pos`: place the start if there
    /// is none, otherwise the end if there is none, otherwise a barrier.
    /// The existing start and end are never overwritten.
    ///
    /// Returns the resulting state of `pos`.
    pub fn paint(&mut self, pos: Pos) -> Result<CellState, GridError> {
        let i = self.check(pos)?;
        let is_start = self.start == Some(pos);
        let is_end = self.end == Some(pos);
        if self.start.is_none() && !is_end {
            self.set_start(pos)?;
        } else if self.end.is_none() && !is_start {
            self.set_end(pos)?;
        } else if !is_start && !is_end {
            self.set_barrier(pos)?;
        }
        Ok(self.state_at(i, pos))
    }

    /// Apply the secondary editing action to `pos`: free it, releasing a
    /// start or end designation so the next [`paint`](Self::paint) can place
    /// it again.
    pub fn erase(&mut self, pos: Pos) -> Result<(), GridError> {
        self.reset(pos)
    }

    /// Free every cell and drop both designations.
    pub fn clear(&mut self) {
        self.cells.fill(Passability::Free);
        self.start = None;
        self.end = None;
        log::debug!("grid: cleared {}x{}", self.rows, self.rows);
    }
}

impl Default for Grid {
    fn default() -> Self {
        let rows = GridConfig::DEFAULT_ROWS;
        Self {
            rows,
            cells: vec![Passability::Free; rows * rows],
            start: None,
            end: None,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.rows)
                .map(|col| {
                    let pos = Pos::new(row, col);
                    self.state_at(row * self.rows + col, pos).glyph()
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Grid::from_ascii(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "
        S.#
        .#.
        ..E
    ";

    #[test]
    fn new_rejects_zero() {
        assert_eq!(Grid::new(0), Err(GridError::ZeroSize));
        assert_eq!(
            Grid::new(usize::MAX),
            Err(GridError::TooLarge { rows: usize::MAX })
        );
        assert_eq!(
            Grid::with_config(&GridConfig { rows: usize::MAX }),
            Err(GridError::TooLarge { rows: usize::MAX })
        );
        let g = Grid::new(4).unwrap();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.len(), 16);
        assert!(g.cells().all(|c| c.state == CellState::Free));
    }

    #[test]
    fn with_config_uses_rows() {
        let g = Grid::with_config(&GridConfig { rows: 7 }).unwrap();
        assert_eq!(g.rows(), 7);
        assert_eq!(Grid::default().rows(), GridConfig::DEFAULT_ROWS);
    }

    #[test]
    fn parse_board() {
        let g = Grid::from_ascii(BOARD).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(2, 2)));
        assert!(g.is_barrier(Pos::new(0, 2)));
        assert!(g.is_barrier(Pos::new(1, 1)));
        assert_eq!(g.barrier_count(), 2);
        assert_eq!(g.to_string(), "S.#\n.#.\n..E\n");
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::from_ascii(BOARD).unwrap();
        let back = Grid::from_ascii(&g.to_string()).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::from_ascii("  \n \n"), Err(GridError::ZeroSize));
        assert_eq!(
            Grid::from_ascii("..\n..."),
            Err(GridError::NotSquare {
                line: 1,
                width: 3,
                rows: 2
            })
        );
        assert_eq!(
            Grid::from_ascii(".x\n.."),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Pos::new(0, 1)
            })
        );
        assert_eq!(
            Grid::from_ascii("S.\n.S"),
            Err(GridError::DuplicateStart(Pos::new(1, 1)))
        );
        assert_eq!(
            Grid::from_ascii("EE\n.."),
            Err(GridError::DuplicateEnd(Pos::new(0, 1)))
        );
    }

    #[test]
    fn tall_narrow_input_fails_on_first_line() {
        let text = ".\n".repeat(100_000);
        assert_eq!(
            Grid::from_ascii(&text),
            Err(GridError::NotSquare {
                line: 0,
                width: 1,
                rows: 100_000
            })
        );
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::new(3).unwrap();
        assert_eq!(
            g.neighbors(Pos::new(1, 1)),
            vec![
                Pos::new(2, 1),
                Pos::new(0, 1),
                Pos::new(1, 2),
                Pos::new(1, 0)
            ]
        );
        assert_eq!(g.neighbors(Pos::new(0, 0)), vec![Pos::new(1, 0), Pos::new(0, 1)]);
        assert_eq!(g.neighbors(Pos::new(2, 2)), vec![Pos::new(1, 2), Pos::new(2, 1)]);
        assert!(g.neighbors(Pos::new(3, 0)).is_empty());
    }

    #[test]
    fn neighbors_skip_barriers() {
        let g = Grid::from_ascii(
            "
            .#.
            #..
            ...
            ",
        )
        .unwrap();
        assert!(g.neighbors(Pos::ZERO).is_empty());
        // Start and end cells are passable.
        let g = Grid::from_ascii("SE\n..").unwrap();
        assert_eq!(g.neighbors(Pos::ZERO), vec![Pos::new(1, 0), Pos::new(0, 1)]);
    }

    #[test]
    fn neighbors_reflect_later_edits() {
        let mut g = Grid::new(2).unwrap();
        assert_eq!(g.neighbors(Pos::ZERO).len(), 2);
        g.set_barrier(Pos::new(1, 0)).unwrap();
        assert_eq!(g.neighbors(Pos::ZERO), vec![Pos::new(0, 1)]);
        g.reset(Pos::new(1, 0)).unwrap();
        assert_eq!(g.neighbors(Pos::ZERO).len(), 2);
    }

    #[test]
    fn designations_are_exclusive() {
        let mut g = Grid::new(3).unwrap();
        let p = Pos::new(1, 1);
        g.set_barrier(p).unwrap();
        g.set_start(p).unwrap();
        assert!(!g.is_barrier(p));
        assert_eq!(g.state(p), Some(CellState::Start));

        g.set_end(p).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), Some(p));

        g.set_barrier(p).unwrap();
        assert_eq!(g.end(), None);
        assert_eq!(g.state(p), Some(CellState::Barrier));
    }

    #[test]
    fn out_of_bounds_edits_fail() {
        let mut g = Grid::new(2).unwrap();
        let p = Pos::new(2, 0);
        let err = GridError::OutOfBounds { pos: p, rows: 2 };
        assert_eq!(g.set_start(p), Err(err.clone()));
        assert_eq!(g.set_barrier(p), Err(err.clone()));
        assert_eq!(g.paint(p), Err(err));
        assert_eq!(g.state(p), None);
        assert!(!g.is_barrier(p));
    }

    #[test]
    fn paint_places_start_then_end_then_barriers() {
        let mut g = Grid::new(3).unwrap();
        let a = Pos::new(0, 0);
        let b = Pos::new(2, 2);
        let c = Pos::new(1, 1);

        assert_eq!(g.paint(a), Ok(CellState::Start));
        // Painting the start again does not move the end onto it.
        assert_eq!(g.paint(a), Ok(CellState::Start));
        assert_eq!(g.end(), None);

        assert_eq!(g.paint(b), Ok(CellState::End));
        assert_eq!(g.paint(c), Ok(CellState::Barrier));
        assert_eq!(g.paint(b), Ok(CellState::End));
        assert_eq!(g.barrier_count(), 1);
    }

    #[test]
    fn erase_releases_designation() {
        let mut g = Grid::new(3).unwrap();
        let a = Pos::new(0, 0);
        let b = Pos::new(2, 2);
        g.paint(a).unwrap();
        g.paint(b).unwrap();

        g.erase(a).unwrap();
        assert_eq!(g.start(), None);
        // With the end still placed, the next paint restores a start.
        assert_eq!(g.paint(Pos::new(1, 0)), Ok(CellState::Start));
        // Painting the end cell while no start exists keeps it as the end.
        g.erase(Pos::new(1, 0)).unwrap();
        assert_eq!(g.paint(b), Ok(CellState::End));
        assert_eq!(g.start(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = Grid::from_ascii(BOARD).unwrap();
        g.clear();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert_eq!(g.barrier_count(), 0);
        assert_eq!(g.rows(), 3);
    }

    #[test]
    fn cell_snapshot() {
        let g = Grid::from_ascii(BOARD).unwrap();
        let c = g.cell(Pos::new(2, 2)).unwrap();
        assert!(c.is_end());
        assert!(!c.is_start());
        assert!(g.cell(Pos::new(0, 2)).unwrap().is_barrier());
        assert_eq!(g.cells().filter(|c| c.is_barrier()).count(), 2);
    }

    #[test]
    fn grid_is_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_ascii("S#\n.E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"S#\\n.E\\n\"");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn invalid_grid_is_rejected() {
        let res: Result<Grid, _> = serde_json::from_str("\"S?\\n..\"");
        assert!(res.is_err());
    }
}
