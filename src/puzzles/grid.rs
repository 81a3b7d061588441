//! Rectangular character grids shared by the grid-based puzzles.

use serde::ser::SerializeSeq;
use serde::Serializer;

use crate::error::{Error, Result};

/// Row-major grid of single-character cells.
pub type Grid = Vec<Vec<char>>;

/// Parse one string per row into a grid.
///
/// Every row must have the same number of characters and there must be at
/// least one non-empty row.
///
/// # Examples
/// ```
/// use puzzle_search::puzzles::grid::parse_rows;
///
/// let grid = parse_rows(&["*23", "145"]).unwrap();
/// assert_eq!(grid[1][0], '1');
/// assert!(parse_rows(&["*23", "14"]).is_err());
/// assert!(parse_rows::<&str>(&[]).is_err());
/// ```
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
    let grid: Grid = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
    check_rectangular(&grid)?;
    Ok(grid)
}

/// Fail unless the grid is non-empty and every row has the first row's width.
pub fn check_rectangular(grid: &[Vec<char>]) -> Result<()> {
    let expected = match grid.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(Error::EmptyGrid),
    };
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != expected {
            return Err(Error::RaggedGrid {
                row,
                expected,
                got: cells.len(),
            });
        }
    }
    Ok(())
}

/// Fail on the first cell not accepted by `allowed`.
pub fn check_symbols(grid: &[Vec<char>], allowed: impl Fn(char) -> bool) -> Result<()> {
    for (row, cells) in grid.iter().enumerate() {
        for (col, &symbol) in cells.iter().enumerate() {
            if !allowed(symbol) {
                return Err(Error::InvalidSymbol { symbol, row, col });
            }
        }
    }
    Ok(())
}

/// Row and column of the first cell equal to `symbol`, scanning row-major.
pub fn find(grid: &[Vec<char>], symbol: char) -> Option<(usize, usize)> {
    grid.iter().enumerate().find_map(|(r, row)| {
        row.iter().position(|&c| c == symbol).map(|c| (r, c))
    })
}

/// Serialize a grid as one string per row.
pub fn serialize_rows<S: Serializer>(grid: &Grid, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(grid.len()))?;
    for row in grid {
        seq.serialize_element(&row.iter().collect::<String>())?;
    }
    seq.end()
}
