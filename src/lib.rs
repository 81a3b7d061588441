//! Generic state-space search for puzzles.
//!
//! A puzzle is any type implementing [`Puzzle`]: it lists the states one
//! move away and says whether it is solved. [`depth_first_solve`] and
//! [`breadth_first_solve`] turn a start state into a [`Solution`], a solved
//! node whose parent links lead back to the start, or `None` when no solved
//! state is reachable.
//!
//! Four puzzle domains ship with the crate under [`puzzles`]: sliding tile,
//! sudoku, grid peg solitaire and word ladder.

pub mod error;
pub mod input;
pub mod puzzle;
pub mod puzzles;
pub mod solver;
pub mod tree;

// Re-export main types
pub use error::{Error, Result};
pub use input::{PuzzleInput, SolveSummary};
pub use puzzle::Puzzle;
pub use puzzles::{GridPegSolitairePuzzle, MnPuzzle, SudokuPuzzle, WordLadderPuzzle};
pub use solver::{
    breadth_first_search, breadth_first_solve, depth_first_search, depth_first_solve,
    DuplicatePolicy, SearchConfig, SearchReport, Solution, StopReason, Strategy,
};
pub use tree::{NodeId, NodeRef, SearchTree};
