//! Arena-backed search tree.
//!
//! Every node wraps one puzzle state discovered during a search. Nodes live
//! in a single `Vec` owned by [`SearchTree`]; the parent link is a plain
//! [`NodeId`] index, so there is no ownership cycle between a node and its
//! parent, and the whole explored tree is freed in one go.

use std::fmt;

use crate::puzzle::Puzzle;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<P> {
    puzzle: P,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
}

/// The explored part of a puzzle's state space, rooted at the start state.
///
/// Nodes are only ever appended. A node's children are always built from
/// that node's own `extensions()`, and only the search strategies in this
/// crate attach them.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<Node<P>>,
}

impl<P: Puzzle> SearchTree<P> {
    /// Id of the root node, which wraps the start state.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only a root node.
    pub fn new(puzzle: P) -> Self {
        Self {
            nodes: vec![Node {
                puzzle,
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
        }
    }

    /// Create a tree whose root starts out with the given children.
    pub fn with_children(puzzle: P, children: impl IntoIterator<Item = P>) -> Self {
        let mut tree = Self::new(puzzle);
        for child in children {
            tree.attach(Self::ROOT, child);
        }
        tree
    }

    /// Append `puzzle` as the last child of `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, puzzle: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            puzzle,
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeRef<'_, P> {
        self.node(Self::ROOT)
    }

    /// Borrowed view of the node with the given id.
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, P> {
        assert!(id.0 < self.nodes.len(), "node {:?} is not in this tree", id);
        NodeRef { tree: self, id }
    }

    /// Panics if `id` does not belong to this tree.
    pub fn puzzle(&self, id: NodeId) -> &P {
        &self.nodes[id.0].puzzle
    }

    /// Panics if `id` does not belong to this tree.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Panics if `id` does not belong to this tree.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of moves between the root and this node.
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// Total number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to the root, `id` first.
    ///
    /// The iterator panics on its first step if `id` does not belong to
    /// this tree.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, P> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// States on the path from the root down to `id`, root first.
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn path_to(&self, id: NodeId) -> Vec<&P> {
        let mut path: Vec<&P> = self.ancestors(id).map(|a| self.puzzle(a)).collect();
        path.reverse();
        path
    }

    /// Whether `puzzle` equals any state between `id` and the root, inclusive.
    pub fn path_contains(&self, id: NodeId, puzzle: &P) -> bool {
        self.ancestors(id).any(|a| self.puzzle(a) == puzzle)
    }
}

/// Structural equality of the two root subtrees.
impl<P: Puzzle> PartialEq for SearchTree<P> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

/// Iterator over a node and its ancestors, returned by [`SearchTree::ancestors`].
pub struct Ancestors<'a, P> {
    tree: &'a SearchTree<P>,
    next: Option<NodeId>,
}

impl<P: Puzzle> Iterator for Ancestors<'_, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// A borrowed view of one node: its puzzle, parent and children.
pub struct NodeRef<'a, P> {
    tree: &'a SearchTree<P>,
    id: NodeId,
}

impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<'a, P: Puzzle> NodeRef<'a, P> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn puzzle(&self) -> &'a P {
        self.tree.puzzle(self.id)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, P>> {
        self.tree.parent(self.id).map(|id| self.tree.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, P>> + 'a {
        let tree = self.tree;
        tree.children(self.id).iter().map(move |&id| tree.node(id))
    }

    pub fn depth(&self) -> usize {
        self.tree.depth(self.id)
    }

    pub fn is_root(&self) -> bool {
        self.tree.parent(self.id).is_none()
    }
}

/// Two nodes are equal iff their puzzles are equal and their children are
/// equal as sets, recursively. Child order does not matter.
///
/// This walks both subtrees and is meant for tests, not for search loops.
impl<P: Puzzle> PartialEq for NodeRef<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.puzzle() == other.puzzle()
            && self.children().all(|c| other.children().any(|o| c == o))
            && other.children().all(|o| self.children().any(|c| c == o))
    }
}

impl<P: Puzzle> fmt::Debug for NodeRef<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("puzzle", self.puzzle())
            .field("children", &self.tree.children(self.id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::testing::Counter;

    fn c(value: u32) -> Counter {
        Counter::new(value, 100, 100)
    }

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = SearchTree::new(c(1));
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        let root = tree.root();
        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert_eq!(root.children().count(), 0);
        assert_eq!(root.puzzle(), &c(1));
    }

    #[test]
    fn test_attach_links_parent_and_child() {
        let mut tree = SearchTree::new(c(1));
        let a = tree.attach(SearchTree::<Counter>::ROOT, c(2));
        let b = tree.attach(a, c(4));

        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.children(a), &[b]);
        assert_eq!(tree.depth(b), 2);
        assert_eq!(tree.path_to(b), vec![&c(1), &c(2), &c(4)]);
        assert!(tree.path_contains(b, &c(1)));
        assert!(!tree.path_contains(a, &c(4)));
    }

    #[test]
    fn test_node_equality_ignores_child_order() {
        let t1 = SearchTree::with_children(c(1), [c(2), c(3)]);
        let t2 = SearchTree::with_children(c(1), [c(3), c(2)]);
        assert_eq!(t1.root(), t2.root());
        assert!(t1 == t2);
    }

    #[test]
    fn test_node_equality_compares_puzzle_and_children() {
        let base = SearchTree::with_children(c(1), [c(2)]);
        let other_puzzle = SearchTree::with_children(c(5), [c(2)]);
        let missing_child = SearchTree::new(c(1));
        let extra_child = SearchTree::with_children(c(1), [c(2), c(3)]);

        assert_ne!(base.root(), other_puzzle.root());
        assert_ne!(base.root(), missing_child.root());
        assert_ne!(base.root(), extra_child.root());
    }

    #[test]
    fn test_node_equality_is_recursive() {
        let mut t1 = SearchTree::with_children(c(1), [c(2)]);
        let mut t2 = SearchTree::with_children(c(1), [c(2)]);
        let child1 = t1.root().children().next().map(|n| n.id()).unwrap();
        let child2 = t2.root().children().next().map(|n| n.id()).unwrap();
        t1.attach(child1, c(3));
        assert_ne!(t1.root(), t2.root());
        t2.attach(child2, c(3));
        assert_eq!(t1.root(), t2.root());
    }

    #[test]
    #[should_panic]
    fn test_foreign_node_id_panics() {
        let mut big = SearchTree::new(c(1));
        let far = big.attach(SearchTree::<Counter>::ROOT, c(2));
        let small = SearchTree::new(c(1));
        let _ = small.puzzle(far);
    }
}
