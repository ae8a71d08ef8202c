use gridstar_core::{Grid, Pos};

use crate::distance::manhattan;

/// Adjacency over [`Pos`] cells where every move costs one unit.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, always in the same order for the
    /// same `p`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> usize {
        manhattan(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.neighbors_into(p, buf);
    }
}

impl AstarPather for Grid {}
