use std::collections::HashMap;

use gridstar_core::{Grid, Pos};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::observer::SearchObserver;
use crate::outcome::{Path, SearchOutcome, SearchStats, UNREACHABLE, reconstruct};
use crate::traits::AstarPather;

/// Cost of every move.
const STEP_COST: usize = 1;

/// Bookkeeping owned by a single search and dropped when it returns.
#[derive(Default)]
struct SearchState {
    g_score: HashMap<Pos, usize>,
    f_score: HashMap<Pos, usize>,
    came_from: HashMap<Pos, Pos>,
    frontier: Frontier,
}

impl SearchState {
    #[inline]
    fn g(&self, p: Pos) -> usize {
        self.g_score.get(&p).copied().unwrap_or(UNREACHABLE)
    }

    #[inline]
    fn f(&self, p: Pos) -> usize {
        self.f_score.get(&p).copied().unwrap_or(UNREACHABLE)
    }

    fn stats(&self, expanded: usize) -> SearchStats {
        SearchStats {
            expanded,
            discovered: (self.frontier.inserted() as usize).saturating_sub(1),
            peak_frontier: self.frontier.peak_len(),
        }
    }
}

/// Compute a shortest path from `start` to `goal` using A*.
///
/// Cells are expanded in ascending `g + estimate` order, ties going to the
/// cell queued first. A neighbor is only updated on a strict improvement of
/// its cost, so among equal-cost routes the first one discovered wins and
/// repeated searches return the same path.
///
/// `start` and `goal` are not validated; see [`find_path_between`] for a
/// checked entry point. When `start == goal` the path is that single cell.
pub fn astar<P, O>(pather: &P, start: Pos, goal: Pos, observer: &mut O) -> SearchOutcome
where
    P: AstarPather + ?Sized,
    O: SearchObserver + ?Sized,
{
    log::debug!("astar: searching {start} -> {goal}");

    let mut st = SearchState::default();
    let start_f = pather.estimate(start, goal);
    st.g_score.insert(start, 0);
    st.f_score.insert(start, start_f);
    st.frontier.push(start, start_f);

    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
    let mut expanded = 0;

    while let Some((current, _)) = st.frontier.pop() {
        expanded += 1;

        if current == goal {
            let cells = reconstruct(&st.came_from, goal);
            for &p in &cells {
                observer.on_path(p);
            }
            let path = Path::from_goal_back(cells);
            let stats = st.stats(expanded);
            log::debug!(
                "astar: found {} moves, expanded={} discovered={} peak={}",
                path.moves(),
                stats.expanded,
                stats.discovered,
                stats.peak_frontier
            );
            observer.finished(true);
            return SearchOutcome::Found { path, stats };
        }

        let current_g = st.g(current);
        log::trace!("astar: expand {current} g={current_g} f={}", st.f(current));

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = current_g + STEP_COST;
            if tentative_g >= st.g(np) {
                continue;
            }
            let f = tentative_g + pather.estimate(np, goal);
            st.came_from.insert(np, current);
            st.g_score.insert(np, tentative_g);
            st.f_score.insert(np, f);
            // A queued cell keeps its old entry.
            if !st.frontier.contains(np) {
                st.frontier.push(np, f);
                observer.discovered(np);
            }
        }

        observer.step();

        if current != start {
            observer.closed(current);
        }
    }

    let stats = st.stats(expanded);
    log::debug!(
        "astar: no path, expanded={} discovered={}",
        stats.expanded,
        stats.discovered
    );
    observer.finished(false);
    SearchOutcome::NoPath { stats }
}

/// Search between the grid's designated start and end cells.
pub fn find_path<O>(grid: &Grid, observer: &mut O) -> Result<SearchOutcome, SearchError>
where
    O: SearchObserver + ?Sized,
{
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let goal = grid.end().ok_or(SearchError::MissingEnd)?;
    Ok(astar(grid, start, goal, observer))
}

/// Search between two explicit cells of `grid`, ignoring its designations.
pub fn find_path_between<O>(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError>
where
    O: SearchObserver + ?Sized,
{
    for pos in [start, goal] {
        if !grid.contains(pos) {
            return Err(SearchError::OutOfBounds {
                pos,
                rows: grid.rows(),
            });
        }
    }
    Ok(astar(grid, start, goal, observer))
}
