//! Peg solitaire on a rectangular grid.
//!
//! A peg jumps over an orthogonally adjacent peg into an empty cell two
//! away, and the jumped peg is removed. The puzzle is solved when a single
//! peg is left.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use smallvec::SmallVec;

use super::grid::{self, Grid};
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

pub const PEG: char = '*';
pub const HOLE: char = '.';
/// A cell that is not part of the board.
pub const UNUSED: char = '#';

/// Row and column step for up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Equality and hashing look at the marker grid only.
#[derive(Debug, Clone, Serialize)]
pub struct GridPegSolitairePuzzle {
    #[serde(serialize_with = "grid::serialize_rows")]
    marker: Grid,
    #[serde(skip)]
    marker_set: BTreeSet<char>,
}

impl GridPegSolitairePuzzle {
    /// `marker` must be rectangular with every cell in `marker_set`, and
    /// `marker_set` may only contain [`PEG`], [`HOLE`] and [`UNUSED`].
    pub fn new(marker: Grid, marker_set: BTreeSet<char>) -> Result<Self> {
        if let Some(&bad) = marker_set.iter().find(|&&m| ![PEG, HOLE, UNUSED].contains(&m)) {
            return Err(Error::InvalidMarker { marker: bad });
        }
        grid::check_rectangular(&marker)?;
        grid::check_symbols(&marker, |c| marker_set.contains(&c))?;
        Ok(Self { marker, marker_set })
    }

    /// Build from one string per row using all three markers.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::new(grid::parse_rows(rows)?, BTreeSet::from([PEG, HOLE, UNUSED]))
    }

    pub fn marker(&self) -> &Grid {
        &self.marker
    }

    pub fn peg_count(&self) -> usize {
        self.marker.iter().flatten().filter(|&&c| c == PEG).count()
    }

    fn cell(&self, row: usize, col: usize, step: (isize, isize), times: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(step.0 * times)?;
        let c = col.checked_add_signed(step.1 * times)?;
        (r < self.marker.len() && c < self.marker[r].len()).then_some((r, c))
    }

    /// Landing cells of every legal jump starting at `(row, col)`, paired
    /// with the cell jumped over.
    fn jumps_from(&self, row: usize, col: usize) -> SmallVec<[((usize, usize), (usize, usize)); 4]> {
        DIRECTIONS
            .iter()
            .filter_map(|&step| {
                let over = self.cell(row, col, step, 1)?;
                let land = self.cell(row, col, step, 2)?;
                (self.marker[over.0][over.1] == PEG && self.marker[land.0][land.1] == HOLE)
                    .then_some((over, land))
            })
            .collect()
    }
}

impl PartialEq for GridPegSolitairePuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.marker == other.marker
    }
}

impl Eq for GridPegSolitairePuzzle {}

impl Hash for GridPegSolitairePuzzle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marker.hash(state);
    }
}

impl Puzzle for GridPegSolitairePuzzle {
    fn extensions(&self) -> Vec<Self> {
        let mut extensions = Vec::new();
        for (row, cells) in self.marker.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell != PEG {
                    continue;
                }
                for (over, land) in self.jumps_from(row, col) {
                    let mut marker = self.marker.clone();
                    marker[row][col] = HOLE;
                    marker[over.0][over.1] = HOLE;
                    marker[land.0][land.1] = PEG;
                    extensions.push(Self {
                        marker,
                        marker_set: self.marker_set.clone(),
                    });
                }
            }
        }
        extensions
    }

    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }
}
