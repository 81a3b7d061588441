//! Concrete puzzle domains.
//!
//! Each type validates its input on construction and implements
//! [`crate::Puzzle`]; nothing here is known to the search strategies.

pub mod grid;
pub mod peg_solitaire;
pub mod sliding_tile;
pub mod sudoku;
pub mod word_ladder;

pub use peg_solitaire::GridPegSolitairePuzzle;
pub use sliding_tile::MnPuzzle;
pub use sudoku::SudokuPuzzle;
pub use word_ladder::WordLadderPuzzle;
