//! **gridstar-core** — the grid model searched by `gridstar-search`.
//!
//! A [`Grid`] is a fixed N×N board of cells addressed by [`Pos`]. Each cell
//! is either free or a barrier, and at most one cell each is designated as
//! the start and the end of a search. Neighbor queries are bounds-checked
//! and skip barriers.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Dir, Pos};
pub use grid::{Cell, CellState, Grid, Passability};
