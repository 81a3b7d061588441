//! Depth-first and breadth-first search over a puzzle's state space.
//!
//! Both strategies grow a [`SearchTree`] from the start state and stop at
//! the first solved node or when the frontier runs dry. Running out of
//! states is a normal outcome and is reported as a missing solution.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;
use crate::tree::{NodeId, NodeRef, SearchTree};

/// Which states a search refuses to add to the tree a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Depth-first skips states already on the path from the root to the
    /// node being expanded. Breadth-first skips states currently waiting in
    /// the frontier queue; states that were already dequeued can be
    /// discovered again through another path.
    #[default]
    Local,
    /// Skip any state already present anywhere in the tree.
    Global,
}

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    pub fn search<P: Puzzle>(self, puzzle: P, config: &SearchConfig) -> SearchReport<P> {
        match self {
            Strategy::DepthFirst => depth_first_search(puzzle, config),
            Strategy::BreadthFirst => breadth_first_search(puzzle, config),
        }
    }
}

/// Configuration for a search run
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub duplicates: DuplicatePolicy,
    /// Wall-clock budget, checked between frontier pops
    pub timeout: Option<Duration>,
    /// Maximum number of nodes in the tree, root included. Checked between
    /// frontier pops, so the last expansion may overshoot it.
    pub max_nodes: Option<usize>,
}

/// Why a search stopped before finding a solution or exhausting the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Timeout,
    NodeLimit,
}

/// A solved node together with the tree that leads to it.
#[derive(Debug, Clone)]
pub struct Solution<P> {
    tree: SearchTree<P>,
    node: NodeId,
}

impl<P: Puzzle> Solution<P> {
    pub fn tree(&self) -> &SearchTree<P> {
        &self.tree
    }

    pub fn node(&self) -> NodeRef<'_, P> {
        self.tree.node(self.node)
    }

    /// The solved state.
    pub fn puzzle(&self) -> &P {
        self.tree.puzzle(self.node)
    }

    /// States from the start state to the solved state, inclusive.
    pub fn path(&self) -> Vec<&P> {
        self.tree.path_to(self.node)
    }

    /// Number of moves from the start state to the solved state.
    pub fn moves(&self) -> usize {
        self.tree.depth(self.node)
    }

    pub fn into_tree(self) -> SearchTree<P> {
        self.tree
    }

    /// Replay the path forward and check that every state is one of its
    /// predecessor's extensions and that the last one is solved.
    pub fn verify(&self) -> Result<()> {
        let path = self.path();
        for (step, pair) in path.windows(2).enumerate() {
            if !pair[0].extensions().contains(pair[1]) {
                return Err(Error::BrokenPath { step: step + 1 });
            }
        }
        if !self.puzzle().is_solved() {
            return Err(Error::BrokenPath { step: path.len() - 1 });
        }
        Ok(())
    }
}

/// Result of a search run
#[derive(Debug, Clone)]
pub struct SearchReport<P> {
    /// The solved node, if one was reached
    pub solution: Option<Solution<P>>,
    /// Whether every reachable state (under the duplicate policy) was explored
    pub search_exhausted: bool,
    /// Set when a configured limit ended the search early
    pub stopped: Option<StopReason>,
    /// Nodes in the tree when the search ended, root included
    pub nodes_created: usize,
    /// Nodes whose extensions were generated
    pub nodes_expanded: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Bookkeeping shared by both strategies.
struct Run<P> {
    tree: SearchTree<P>,
    seen: Option<HashSet<P>>,
    started: Instant,
    deadline: Option<Instant>,
    max_nodes: Option<usize>,
    nodes_expanded: usize,
}

impl<P: Puzzle> Run<P> {
    fn new(puzzle: P, config: &SearchConfig) -> Self {
        let started = Instant::now();
        let seen = match config.duplicates {
            DuplicatePolicy::Local => None,
            DuplicatePolicy::Global => Some(HashSet::from([puzzle.clone()])),
        };
        Self {
            tree: SearchTree::new(puzzle),
            seen,
            started,
            deadline: config.timeout.map(|t| started + t),
            max_nodes: config.max_nodes,
            nodes_expanded: 0,
        }
    }

    fn limit_reached(&self) -> Option<StopReason> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(StopReason::Timeout);
            }
        }
        match self.max_nodes {
            Some(max) if self.tree.len() >= max => Some(StopReason::NodeLimit),
            _ => None,
        }
    }

    /// Global-policy check; records the state as seen when it is new.
    fn first_sighting(&mut self, puzzle: &P) -> bool {
        match &mut self.seen {
            Some(seen) => seen.insert(puzzle.clone()),
            None => true,
        }
    }

    fn finish(self, found: Option<NodeId>, stopped: Option<StopReason>) -> SearchReport<P> {
        let nodes_created = self.tree.len();
        SearchReport {
            search_exhausted: found.is_none() && stopped.is_none(),
            stopped,
            nodes_created,
            nodes_expanded: self.nodes_expanded,
            time_elapsed_ms: self.started.elapsed().as_millis() as u64,
            solution: found.map(|node| Solution {
                tree: self.tree,
                node,
            }),
        }
    }
}

/// Depth-first search with default settings.
///
/// Returns `None` when no solved state is reachable. The solution found is
/// some valid solution, not necessarily the shortest.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<Solution<P>> {
    depth_first_search(puzzle, &SearchConfig::default()).solution
}

/// Breadth-first search with default settings.
///
/// Returns `None` when no solved state is reachable. Since every move costs
/// the same, the solution found uses the fewest moves.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<Solution<P>> {
    breadth_first_search(puzzle, &SearchConfig::default()).solution
}

/// Depth-first search driven by an explicit stack.
///
/// Extensions are explored in the order `extensions()` returns them, each
/// branch to exhaustion before its next sibling. A state equal to one on
/// the current root path is never re-added, which keeps cyclic state
/// spaces from looping forever. Branches are not deduplicated against each
/// other unless [`DuplicatePolicy::Global`] is set, and there is no depth
/// limit: an infinite state space may not terminate.
pub fn depth_first_search<P: Puzzle>(puzzle: P, config: &SearchConfig) -> SearchReport<P> {
    let mut run = Run::new(puzzle, config);
    let mut stack: Vec<NodeId> = vec![SearchTree::<P>::ROOT];

    while let Some(id) = stack.pop() {
        if run.tree.puzzle(id).is_solved() {
            return run.finish(Some(id), None);
        }
        if let Some(reason) = run.limit_reached() {
            return run.finish(None, Some(reason));
        }
        if run.tree.puzzle(id).fail_fast() {
            continue;
        }

        let extensions = run.tree.puzzle(id).extensions();
        run.nodes_expanded += 1;

        let first_child = stack.len();
        for extension in extensions {
            if run.tree.path_contains(id, &extension) || !run.first_sighting(&extension) {
                continue;
            }
            stack.push(run.tree.attach(id, extension));
        }
        // First extension on top, so it is explored first.
        stack[first_child..].reverse();
    }

    run.finish(None, None)
}

/// Breadth-first search driven by a FIFO queue.
///
/// A candidate equal to a node still waiting in the queue is dropped.
/// Nodes already dequeued are not consulted, so the same state can be
/// expanded more than once through different paths unless
/// [`DuplicatePolicy::Global`] is set. The first solved candidate is
/// returned as soon as it is attached.
pub fn breadth_first_search<P: Puzzle>(puzzle: P, config: &SearchConfig) -> SearchReport<P> {
    let mut run = Run::new(puzzle, config);
    if run.tree.root().puzzle().is_solved() {
        return run.finish(Some(SearchTree::<P>::ROOT), None);
    }

    let mut queue: VecDeque<NodeId> = VecDeque::from([SearchTree::<P>::ROOT]);

    while let Some(id) = queue.pop_front() {
        if let Some(reason) = run.limit_reached() {
            return run.finish(None, Some(reason));
        }
        if run.tree.puzzle(id).fail_fast() {
            continue;
        }

        let extensions = run.tree.puzzle(id).extensions();
        run.nodes_expanded += 1;

        for extension in extensions {
            // Queued nodes have no children yet, so comparing puzzles is
            // the same as comparing nodes.
            let queued = queue.iter().any(|&q| run.tree.puzzle(q) == &extension);
            if queued || !run.first_sighting(&extension) {
                continue;
            }
            let solved = extension.is_solved();
            let child = run.tree.attach(id, extension);
            if solved {
                return run.finish(Some(child), None);
            }
            queue.push_back(child);
        }
    }

    run.finish(None, None)
}
