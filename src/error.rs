//! Error types for puzzle construction and solution checking.

use thiserror::Error;

/// Main error type for the crate.
///
/// Search itself never fails: an unsolvable puzzle is reported as a
/// missing solution, not as an error. Errors come from building puzzle
/// states out of malformed input and from the CLI's IO.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid is empty")]
    EmptyGrid,

    #[error("row {row} has {got} cells (expected {expected})")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("grid shapes differ: {from_rows}x{from_cols} vs {to_rows}x{to_cols}")]
    ShapeMismatch {
        from_rows: usize,
        from_cols: usize,
        to_rows: usize,
        to_cols: usize,
    },

    #[error("invalid symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("symbol '{symbol}' is reserved for empty cells")]
    ReservedSymbol { symbol: char },

    #[error("invalid marker '{marker}' in marker set (expected '#', '*' or '.')")]
    InvalidMarker { marker: char },

    #[error("sudoku size {n} is not a positive perfect square")]
    InvalidSudokuSize { n: usize },

    #[error("sudoku has {rows} rows (expected {n})")]
    SudokuRowCount { n: usize, rows: usize },

    #[error("symbol set has {got} symbols (expected {expected})")]
    SymbolSetSize { expected: usize, got: usize },

    #[error("'{from_word}' and '{to_word}' differ in length")]
    WordLengthMismatch { from_word: String, to_word: String },

    #[error("solution path is broken at step {step}: state is not an extension of its parent")]
    BrokenPath { step: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
