//! n×n sudoku over an arbitrary symbol alphabet.

use std::collections::BTreeSet;

use serde::Serialize;

use super::grid::{self, Grid};
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

/// Marks an unfilled cell.
pub const EMPTY: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuPuzzle {
    n: usize,
    #[serde(serialize_with = "grid::serialize_rows")]
    symbols: Grid,
    symbol_set: BTreeSet<char>,
}

impl SudokuPuzzle {
    /// `n` must be a positive perfect square, `symbols` an n×n grid of
    /// cells drawn from `symbol_set` or [`EMPTY`], and `symbol_set` must
    /// hold exactly `n` symbols, none of them [`EMPTY`].
    pub fn new(n: usize, symbols: Grid, symbol_set: BTreeSet<char>) -> Result<Self> {
        if n == 0 || subsquare_side(n) * subsquare_side(n) != n {
            return Err(Error::InvalidSudokuSize { n });
        }
        if symbol_set.contains(&EMPTY) {
            return Err(Error::ReservedSymbol { symbol: EMPTY });
        }
        if symbol_set.len() != n {
            return Err(Error::SymbolSetSize {
                expected: n,
                got: symbol_set.len(),
            });
        }
        if symbols.len() != n {
            return Err(Error::SudokuRowCount {
                n,
                rows: symbols.len(),
            });
        }
        grid::check_rectangular(&symbols)?;
        if symbols[0].len() != n {
            return Err(Error::RaggedGrid {
                row: 0,
                expected: n,
                got: symbols[0].len(),
            });
        }
        grid::check_symbols(&symbols, |c| c == EMPTY || symbol_set.contains(&c))?;
        Ok(Self {
            n,
            symbols,
            symbol_set,
        })
    }

    /// Build from one string per row and a string of allowed symbols.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], symbol_set: &str) -> Result<Self> {
        Self::new(
            rows.len(),
            grid::parse_rows(rows)?,
            symbol_set.chars().collect(),
        )
    }

    pub fn symbols(&self) -> &Grid {
        &self.symbols
    }

    fn row_set(&self, r: usize) -> BTreeSet<char> {
        self.symbols[r].iter().copied().collect()
    }

    fn column_set(&self, c: usize) -> BTreeSet<char> {
        self.symbols.iter().map(|row| row[c]).collect()
    }

    fn subsquare_set(&self, r: usize, c: usize) -> BTreeSet<char> {
        let side = subsquare_side(self.n);
        let (top, left) = ((r / side) * side, (c / side) * side);
        self.symbols[top..top + side]
            .iter()
            .flat_map(|row| row[left..left + side].iter().copied())
            .collect()
    }

    /// Symbols not yet used in the row, column or subsquare of `(r, c)`.
    fn allowed_symbols(&self, r: usize, c: usize) -> BTreeSet<char> {
        let mut allowed = self.symbol_set.clone();
        for used in [self.row_set(r), self.column_set(c), self.subsquare_set(r, c)] {
            allowed.retain(|s| !used.contains(s));
        }
        allowed
    }
}

fn subsquare_side(n: usize) -> usize {
    (n as f64).sqrt().round() as usize
}

impl Puzzle for SudokuPuzzle {
    /// Fill the first empty cell, row-major, with each allowed symbol.
    fn extensions(&self) -> Vec<Self> {
        let Some((r, c)) = grid::find(&self.symbols, EMPTY) else {
            return Vec::new();
        };
        self.allowed_symbols(r, c)
            .into_iter()
            .map(|symbol| {
                let mut symbols = self.symbols.clone();
                symbols[r][c] = symbol;
                Self {
                    n: self.n,
                    symbols,
                    symbol_set: self.symbol_set.clone(),
                }
            })
            .collect()
    }

    fn is_solved(&self) -> bool {
        if grid::find(&self.symbols, EMPTY).is_some() {
            return false;
        }
        let side = subsquare_side(self.n);
        (0..self.n).all(|i| self.row_set(i) == self.symbol_set && self.column_set(i) == self.symbol_set)
            && (0..self.n).step_by(side).all(|r| {
                (0..self.n)
                    .step_by(side)
                    .all(|c| self.subsquare_set(r, c) == self.symbol_set)
            })
    }

    /// Some empty cell has no symbol left to place.
    fn fail_fast(&self) -> bool {
        self.symbols.iter().enumerate().any(|(r, row)| {
            row.iter()
                .enumerate()
                .any(|(c, &cell)| cell == EMPTY && self.allowed_symbols(r, c).is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_blank_has_one_solved_extension() {
        let s = SudokuPuzzle::from_rows(&["ABCD", "CDAB", "BADC", "DCB*"], "ABCD").unwrap();
        assert!(!s.is_solved());
        let ext = s.extensions();
        assert_eq!(ext.len(), 1);
        assert!(ext[0].is_solved());
        assert_eq!(
            ext[0],
            SudokuPuzzle::from_rows(&["ABCD", "CDAB", "BADC", "DCBA"], "ABCD").unwrap()
        );
    }

    #[test]
    fn test_solved_grid() {
        let s = SudokuPuzzle::from_rows(&["ABCD", "CDAB", "BADC", "DCBA"], "ABCD").unwrap();
        assert!(s.is_solved());
        assert!(s.extensions().is_empty());

        // Rows and columns fine, subsquares broken.
        let s = SudokuPuzzle::from_rows(&["ABCD", "BCDA", "CDAB", "DABC"], "ABCD").unwrap();
        assert!(!s.is_solved());
    }

    #[test]
    fn test_extensions_fill_first_blank_in_symbol_order() {
        let s = SudokuPuzzle::from_rows(&["AB**", "****", "****", "****"], "ABCD").unwrap();
        let filled: Vec<char> = s.extensions().iter().map(|e| e.symbols()[0][2]).collect();
        assert_eq!(filled, vec!['C', 'D']);
    }

    #[test]
    fn test_fail_fast() {
        let open = SudokuPuzzle::from_rows(&["ABCD", "CD**", "****", "****"], "ABCD").unwrap();
        assert!(!open.fail_fast());

        let stuck = SudokuPuzzle::from_rows(&["BDAC", "CABD", "AB**", "****"], "ABCD").unwrap();
        assert!(stuck.fail_fast());
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            SudokuPuzzle::from_rows(&["ABC", "BCA", "CAB"], "ABC"),
            Err(Error::InvalidSudokuSize { n: 3 })
        ));
        assert!(matches!(
            SudokuPuzzle::from_rows(&["AB**", "****", "****", "****"], "ABC"),
            Err(Error::SymbolSetSize { expected: 4, got: 3 })
        ));
        assert!(matches!(
            SudokuPuzzle::from_rows(&["AB*", "****", "****", "****"], "ABCD"),
            Err(Error::RaggedGrid { .. })
        ));
        assert!(matches!(
            SudokuPuzzle::from_rows(&["ABX*", "****", "****", "****"], "ABCD"),
            Err(Error::InvalidSymbol { symbol: 'X', row: 0, col: 2 })
        ));
        assert!(matches!(
            SudokuPuzzle::new(4, vec![vec!['*'; 4]; 3], "ABCD".chars().collect()),
            Err(Error::SudokuRowCount { n: 4, rows: 3 })
        ));
    }

    #[test]
    fn test_blank_marker_is_not_a_symbol() {
        assert!(matches!(
            SudokuPuzzle::from_rows(&["*"], "*"),
            Err(Error::ReservedSymbol { symbol: '*' })
        ));
        assert!(matches!(
            SudokuPuzzle::from_rows(&["AB**", "****", "****", "****"], "AB*D"),
            Err(Error::ReservedSymbol { symbol: '*' })
        ));
    }
}
