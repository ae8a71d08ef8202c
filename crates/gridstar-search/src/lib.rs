//! A* shortest-path search over [`gridstar_core::Grid`].
//!
//! - [`astar`] runs the search between two cells of any [`AstarPather`];
//! - [`find_path`] and [`find_path_between`] check a [`Grid`](gridstar_core::Grid)
//!   first and report [`SearchError`] for unusable input;
//! - progress is reported to a [`SearchObserver`], e.g. [`Marks`] which keeps
//!   a per-cell open/closed/path view outside the grid.
//!
//! All moves cost one unit and the heuristic is [`manhattan`] distance, so
//! the returned path is always a shortest one. Ties are broken by frontier
//! insertion order, which makes results reproducible.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod distance;
mod error;
mod frontier;
mod observer;
mod outcome;
mod traits;

pub use astar::{astar, find_path, find_path_between};
pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::Frontier;
pub use observer::{Mark, Marks, NoopObserver, OnStep, SearchObserver};
pub use outcome::{Path, SearchOutcome, SearchStats, UNREACHABLE};
pub use traits::{AstarPather, Pather};
