//! CLI entry point for the puzzle search tool.
//!
//! Usage:
//!   puzzle-search solve <puzzle.json> [options]
//!   puzzle-search solve --stdin [options]
//!
//! Options:
//!   --strategy <s>      depth-first or breadth-first (default: breadth-first)
//!   --timeout <seconds> Maximum search time (default: unlimited)
//!   --max-nodes <n>     Maximum nodes in the search tree (default: unlimited)
//!   --global-dedup      Never revisit a state seen anywhere in the tree

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use puzzle_search::{
    DuplicatePolicy, Error, PuzzleInput, Result, SearchConfig, SolveSummary, StopReason, Strategy,
};

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Depth-first and breadth-first puzzle solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a puzzle for a solved configuration
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::BreadthFirst)]
        strategy: StrategyArg,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum nodes in the search tree
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Skip states already seen anywhere in the search tree
        #[arg(long)]
        global_dedup: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    DepthFirst,
    BreadthFirst,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::DepthFirst => Strategy::DepthFirst,
            StrategyArg::BreadthFirst => Strategy::BreadthFirst,
        }
    }
}

/// Output format for a search
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    search_exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_reason: Option<&'static str>,
    nodes_created: usize,
    nodes_expanded: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<serde_json::Value>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            timeout,
            max_nodes,
            global_dedup,
        } => {
            let config = SearchConfig {
                duplicates: if global_dedup {
                    DuplicatePolicy::Global
                } else {
                    DuplicatePolicy::Local
                },
                timeout: timeout.map(Duration::from_secs),
                max_nodes,
            };

            let summary = match read_input(file, stdin)
                .and_then(|input| input.solve(strategy.into(), &config))
            {
                Ok(summary) => summary,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            };

            let solved = summary.solved();
            match serde_json::to_string_pretty(&format_summary(summary)) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error writing output: {}", e);
                    process::exit(2);
                }
            }

            process::exit(if solved { 0 } else { 1 });
        }
    }
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> Result<PuzzleInput> {
    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| Error::Io {
                operation: "read from stdin".to_string(),
                source,
            })?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path).map_err(|source| Error::Io {
            operation: format!("read {}", path.display()),
            source,
        })?
    } else {
        eprintln!("Error: Must provide either a file path or --stdin");
        process::exit(2);
    };

    Ok(serde_json::from_str(&json_content)?)
}

fn format_summary(summary: SolveSummary) -> SolveOutput {
    SolveOutput {
        solved: summary.solved(),
        search_exhausted: summary.search_exhausted,
        stop_reason: summary.stopped.map(|reason| match reason {
            StopReason::Timeout => "timeout",
            StopReason::NodeLimit => "node_limit",
        }),
        nodes_created: summary.nodes_created,
        nodes_expanded: summary.nodes_expanded,
        time_elapsed_ms: summary.time_elapsed_ms,
        moves: summary.moves(),
        path: summary.path,
    }
}
