//! Progress listeners for a running search.
//!
//! The engine calls a [`SearchObserver`] synchronously on the searching
//! thread. Observers see positions only; they cannot reach the grid, so a
//! search always runs against a fixed layout.

use std::collections::HashMap;

use gridstar_core::Pos;

/// Receives search events. Every method defaults to doing nothing.
///
/// Order of events for one outer-loop iteration that does not reach the
/// goal: zero or more [`discovered`](Self::discovered), one
/// [`step`](Self::step), then [`closed`](Self::closed) unless the expanded
/// cell is the start.
pub trait SearchObserver {
    /// A cell entered the frontier.
    fn discovered(&mut self, _pos: Pos) {}

    /// One expansion finished.
    fn step(&mut self) {}

    /// An expanded cell other than the start.
    fn closed(&mut self, _pos: Pos) {}

    /// A cell of the found path, reported from the goal back to the start.
    fn on_path(&mut self, _pos: Pos) {}

    /// The search ended; called exactly once per search.
    fn finished(&mut self, _found: bool) {}
}

/// An observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Adapts a zero-argument callback into an observer that fires on every
/// [`step`](SearchObserver::step).
pub struct OnStep<F>(pub F);

impl<F: FnMut()> SearchObserver for OnStep<F> {
    fn step(&mut self) {
        (self.0)()
    }
}

/// Display mark for a cell touched by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// In the frontier.
    Open,
    /// Expanded.
    Closed,
    /// On the final path.
    Path,
}

/// Records the presentation state of each cell from search events.
///
/// The latest event wins, except that [`Mark::Path`] is final. Cells never
/// touched by the search have no mark, and the grid itself is never written.
#[derive(Debug, Default, Clone)]
pub struct Marks {
    marks: HashMap<Pos, Mark>,
    steps: usize,
    found: Option<bool>,
}

impl Marks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark of `pos`, if the search touched it.
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        self.marks.get(&pos).copied()
    }

    /// Number of cells carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.values().filter(|&&m| m == mark).count()
    }

    /// All marked cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.marks.iter().map(|(&p, &m)| (p, m))
    }

    /// Number of [`step`](SearchObserver::step) events seen.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Result of the last finished search, or `None` while none finished.
    pub fn found(&self) -> Option<bool> {
        self.found
    }

    /// Forget everything, ready for another search.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.steps = 0;
        self.found = None;
    }

    fn set(&mut self, pos: Pos, mark: Mark) {
        let slot = self.marks.entry(pos).or_insert(mark);
        if *slot != Mark::Path {
            *slot = mark;
        }
    }
}

impl SearchObserver for Marks {
    fn discovered(&mut self, pos: Pos) {
        self.set(pos, Mark::Open);
    }

    fn step(&mut self) {
        self.steps += 1;
    }

    fn closed(&mut self, pos: Pos) {
        self.set(pos, Mark::Closed);
    }

    fn on_path(&mut self, pos: Pos) {
        self.marks.insert(pos, Mark::Path);
    }

    fn finished(&mut self, found: bool) {
        self.found = Some(found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_mark_is_final() {
        let mut m = Marks::new();
        let p = Pos::new(1, 1);
        m.discovered(p);
        assert_eq!(m.get(p), Some(Mark::Open));
        m.on_path(p);
        m.closed(p);
        m.discovered(p);
        assert_eq!(m.get(p), Some(Mark::Path));
    }

    #[test]
    fn closed_replaces_open() {
        let mut m = Marks::new();
        let p = Pos::new(0, 3);
        m.discovered(p);
        m.closed(p);
        assert_eq!(m.get(p), Some(Mark::Closed));
        assert_eq!(m.count(Mark::Closed), 1);
        assert_eq!(m.count(Mark::Open), 0);
    }

    #[test]
    fn clear_forgets() {
        let mut m = Marks::new();
        m.discovered(Pos::ZERO);
        m.step();
        m.finished(true);
        m.clear();
        assert_eq!(m.iter().count(), 0);
        assert_eq!(m.steps(), 0);
        assert_eq!(m.found(), None);
    }

    #[test]
    fn on_step_calls_closure() {
        let mut n = 0;
        {
            let mut obs = OnStep(|| n += 1);
            obs.step();
            obs.discovered(Pos::ZERO);
            obs.step();
        }
        assert_eq!(n, 2);
    }
}
