//! Grid construction settings.

/// Settings for [`Grid::with_config`](crate::Grid::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of rows (and columns) of the square grid.
    pub rows: usize,
}

impl GridConfig {
    /// Board size used by the interactive editor.
    pub const DEFAULT_ROWS: usize = 50;
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
        }
    }
}
