//! The n×m sliding-tile puzzle (15-puzzle and friends).

use serde::Serialize;
use smallvec::SmallVec;

use super::grid::{self, Grid};
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

/// Marks the gap tiles slide into.
pub const EMPTY: char = '*';

/// A sliding-tile configuration working towards a target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MnPuzzle {
    #[serde(serialize_with = "grid::serialize_rows")]
    from_grid: Grid,
    #[serde(serialize_with = "grid::serialize_rows")]
    to_grid: Grid,
}

impl MnPuzzle {
    /// Both grids must be rectangular and of the same shape.
    pub fn new(from_grid: Grid, to_grid: Grid) -> Result<Self> {
        grid::check_rectangular(&from_grid)?;
        grid::check_rectangular(&to_grid)?;
        let (from_rows, from_cols) = (from_grid.len(), from_grid[0].len());
        let (to_rows, to_cols) = (to_grid.len(), to_grid[0].len());
        if (from_rows, from_cols) != (to_rows, to_cols) {
            return Err(Error::ShapeMismatch {
                from_rows,
                from_cols,
                to_rows,
                to_cols,
            });
        }
        Ok(Self { from_grid, to_grid })
    }

    /// Build from one string per row, e.g. `["*23", "145"]`.
    pub fn from_rows<S: AsRef<str>>(from_rows: &[S], to_rows: &[S]) -> Result<Self> {
        Self::new(grid::parse_rows(from_rows)?, grid::parse_rows(to_rows)?)
    }

    pub fn from_grid(&self) -> &Grid {
        &self.from_grid
    }

    pub fn to_grid(&self) -> &Grid {
        &self.to_grid
    }

    /// Cells whose tile can slide into the gap at `(row, col)`: left,
    /// right, above, below.
    fn movable_tiles(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 4]> {
        let rows = self.from_grid.len();
        let cols = self.from_grid[row].len();
        let mut tiles = SmallVec::new();
        if col > 0 {
            tiles.push((row, col - 1));
        }
        if col + 1 < cols {
            tiles.push((row, col + 1));
        }
        if row > 0 {
            tiles.push((row - 1, col));
        }
        if row + 1 < rows {
            tiles.push((row + 1, col));
        }
        tiles
    }

    fn slide(&self, gap: (usize, usize), tile: (usize, usize)) -> Self {
        let mut from_grid = self.from_grid.clone();
        from_grid[gap.0][gap.1] = from_grid[tile.0][tile.1];
        from_grid[tile.0][tile.1] = EMPTY;
        Self {
            from_grid,
            to_grid: self.to_grid.clone(),
        }
    }
}

impl Puzzle for MnPuzzle {
    fn extensions(&self) -> Vec<Self> {
        let Some(gap) = grid::find(&self.from_grid, EMPTY) else {
            return Vec::new();
        };
        self.movable_tiles(gap.0, gap.1)
            .into_iter()
            .map(|tile| self.slide(gap, tile))
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.from_grid == self.to_grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(from: &[&str], to: &[&str]) -> MnPuzzle {
        MnPuzzle::from_rows(from, to).unwrap()
    }

    #[test]
    fn test_gap_in_corner_has_two_moves() {
        let p = puzzle(&["*23", "145"], &["123", "45*"]);
        let ext = p.extensions();
        assert_eq!(ext.len(), 2);
        assert_eq!(ext[0], puzzle(&["2*3", "145"], &["123", "45*"]));
        assert_eq!(ext[1], puzzle(&["123", "*45"], &["123", "45*"]));
    }

    #[test]
    fn test_gap_in_middle_has_four_moves() {
        let p = puzzle(&["123", "4*5", "678"], &["123", "456", "78*"]);
        assert_eq!(p.extensions().len(), 4);
    }

    #[test]
    fn test_extensions_leave_receiver_alone() {
        let p = puzzle(&["*23", "145"], &["123", "45*"]);
        let before = p.clone();
        let _ = p.extensions();
        assert_eq!(p, before);
    }

    #[test]
    fn test_no_gap_means_no_moves() {
        let p = puzzle(&["12", "34"], &["12", "34"]);
        assert!(p.extensions().is_empty());
        assert!(p.is_solved());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let err = MnPuzzle::from_rows(&["*2", "13"], &["123", "*45"]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert!(MnPuzzle::from_rows(&["*23", "14"], &["123", "45*"]).is_err());
    }

    #[test]
    fn test_equality_covers_both_grids() {
        let a = puzzle(&["*1"], &["1*"]);
        let b = puzzle(&["*1"], &["*1"]);
        assert_ne!(a, b);
        assert!(b.is_solved());
        assert!(!a.is_solved());
    }
}
