//! JSON puzzle descriptions accepted by the command-line tool.
//!
//! Grids are written one string per row, e.g.
//!
//! ```json
//! { "kind": "sliding_tile", "from": ["*23", "145"], "to": ["123", "45*"] }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::puzzle::Puzzle;
use crate::puzzles::{GridPegSolitairePuzzle, MnPuzzle, SudokuPuzzle, WordLadderPuzzle};
use crate::solver::{SearchConfig, Strategy, StopReason};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleInput {
    SlidingTile {
        from: Vec<String>,
        to: Vec<String>,
    },
    Sudoku {
        rows: Vec<String>,
        /// Allowed symbols as one string, e.g. `"ABCD"`
        symbols: String,
    },
    PegSolitaire {
        rows: Vec<String>,
    },
    WordLadder {
        from: String,
        to: String,
        words: BTreeSet<String>,
    },
}

/// Outcome of solving a [`PuzzleInput`], with the path serialised to JSON.
#[derive(Debug, Clone)]
pub struct SolveSummary {
    pub path: Option<Vec<serde_json::Value>>,
    pub search_exhausted: bool,
    pub stopped: Option<StopReason>,
    pub nodes_created: usize,
    pub nodes_expanded: usize,
    pub time_elapsed_ms: u64,
}

impl SolveSummary {
    pub fn solved(&self) -> bool {
        self.path.is_some()
    }

    /// Moves in the solution, if there is one.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl PuzzleInput {
    /// Build the described puzzle and search it.
    ///
    /// Fails only when the description is malformed; an unsolvable puzzle
    /// yields a summary without a path.
    pub fn solve(self, strategy: Strategy, config: &SearchConfig) -> Result<SolveSummary> {
        match self {
            PuzzleInput::SlidingTile { from, to } => {
                run(MnPuzzle::from_rows(&from, &to)?, strategy, config)
            }
            PuzzleInput::Sudoku { rows, symbols } => {
                run(SudokuPuzzle::from_rows(&rows, &symbols)?, strategy, config)
            }
            PuzzleInput::PegSolitaire { rows } => {
                run(GridPegSolitairePuzzle::from_rows(&rows)?, strategy, config)
            }
            PuzzleInput::WordLadder { from, to, words } => {
                run(WordLadderPuzzle::new(from, to, words)?, strategy, config)
            }
        }
    }
}

fn run<P: Puzzle + Serialize>(
    puzzle: P,
    strategy: Strategy,
    config: &SearchConfig,
) -> Result<SolveSummary> {
    let report = strategy.search(puzzle, config);
    let path = match &report.solution {
        Some(solution) => Some(
            solution
                .path()
                .into_iter()
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
        None => None,
    };
    Ok(SolveSummary {
        path,
        search_exhausted: report.search_exhausted,
        stopped: report.stopped,
        nodes_created: report.nodes_created,
        nodes_expanded: report.nodes_expanded,
        time_elapsed_ms: report.time_elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_and_solve_sliding_tile() {
        let input: PuzzleInput = serde_json::from_str(
            r#"{ "kind": "sliding_tile", "from": ["*23", "145"], "to": ["123", "45*"] }"#,
        )
        .unwrap();
        let summary = input
            .solve(Strategy::BreadthFirst, &SearchConfig::default())
            .unwrap();
        assert!(summary.solved());
        assert_eq!(summary.moves(), Some(3));
        let last = summary.path.unwrap().pop().unwrap();
        assert_eq!(last["fromGrid"], serde_json::json!(["123", "45*"]));
    }

    #[test]
    fn test_parse_and_solve_word_ladder() {
        let input: PuzzleInput = serde_json::from_str(
            r#"{ "kind": "word_ladder", "from": "on", "to": "no", "words": ["on", "no", "oo"] }"#,
        )
        .unwrap();
        let summary = input
            .solve(Strategy::DepthFirst, &SearchConfig::default())
            .unwrap();
        let path = summary.path.unwrap();
        let words: Vec<&str> = path.iter().map(|s| s["fromWord"].as_str().unwrap()).collect();
        assert_eq!(words, vec!["on", "oo", "no"]);
    }

    #[test]
    fn test_unsolvable_input_has_no_path() {
        let input = PuzzleInput::PegSolitaire {
            rows: vec!["*.*".to_string()],
        };
        let summary = input
            .solve(Strategy::DepthFirst, &SearchConfig::default())
            .unwrap();
        assert!(!summary.solved());
        assert!(summary.search_exhausted);
        assert_eq!(summary.moves(), None);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let input = PuzzleInput::Sudoku {
            rows: vec!["AB".to_string(), "BA".to_string()],
            symbols: "AB".to_string(),
        };
        let err = input
            .solve(Strategy::BreadthFirst, &SearchConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSudokuSize { n: 2 }));
    }

    #[test]
    fn test_unknown_kind_fails_to_parse() {
        let parsed: std::result::Result<PuzzleInput, _> =
            serde_json::from_str(r#"{ "kind": "chess", "rows": [] }"#);
        assert!(parsed.is_err());
    }
}
