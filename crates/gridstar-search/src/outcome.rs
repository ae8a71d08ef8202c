use std::collections::HashMap;

use gridstar_core::Pos;

/// Sentinel cost meaning "not reached yet" (infinite g-score).
pub const UNREACHABLE: usize = usize::MAX;

/// A found route, from the start to the goal inclusive. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    /// Build from cells listed goal first, as produced by [`reconstruct`].
    pub(crate) fn from_goal_back(mut cells: Vec<Pos>) -> Self {
        debug_assert!(!cells.is_empty());
        cells.reverse();
        Self { cells }
    }

    /// Cells in walking order, start first.
    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Cells in reverse walking order, goal first.
    pub fn iter_from_goal(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit moves, i.e. the path cost.
    #[inline]
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Follow predecessor links from `goal` back to the cell that has none (the
/// start). Returns the visited cells goal first.
pub(crate) fn reconstruct(came_from: &HashMap<Pos, Pos>, goal: Pos) -> Vec<Pos> {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells
}

/// Counters gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier, the final goal pop included.
    pub expanded: usize,
    /// Frontier insertions after the start.
    pub discovered: usize,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { path: Path, stats: SearchStats },
    /// Every cell reachable from the start was expanded without meeting the
    /// goal.
    NoPath { stats: SearchStats },
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found { stats, .. } | Self::NoPath { stats } => *stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_walks_back_to_root() {
        let a = Pos::new(0, 0);
        let b = Pos::new(1, 0);
        let c = Pos::new(1, 1);
        let came_from = HashMap::from([(b, a), (c, b)]);
        assert_eq!(reconstruct(&came_from, c), vec![c, b, a]);
        assert_eq!(reconstruct(&came_from, a), vec![a]);
    }

    #[test]
    fn path_orders() {
        let a = Pos::new(0, 0);
        let b = Pos::new(0, 1);
        let path = Path::from_goal_back(vec![b, a]);
        assert_eq!(path.cells(), &[a, b]);
        assert_eq!(path.iter_from_goal().collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(path.start(), a);
        assert_eq!(path.goal(), b);
        assert_eq!(path.len(), 2);
        assert_eq!(path.moves(), 1);
        let walked: Vec<Pos> = (&path).into_iter().copied().collect();
        assert_eq!(walked, vec![a, b]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_cells() {
        let path = Path::from_goal_back(vec![Pos::new(0, 1), Pos::new(0, 0)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(
            json,
            r#"{"cells":[{"row":0,"col":0},{"row":0,"col":1}]}"#
        );
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 5,
            discovered: 7,
            peak_frontier: 4,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
