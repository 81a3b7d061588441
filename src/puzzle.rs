//! The capability set every searchable puzzle state implements.
//!
//! The search strategies in [`crate::solver`] are generic over this trait
//! and never look at a concrete puzzle type, so a new puzzle domain only
//! needs an implementation of [`Puzzle`].

use std::fmt::Debug;
use std::hash::Hash;

/// One configuration of a puzzle.
///
/// Equality is structural: two states are equal iff their domain-relevant
/// fields are equal. States of different puzzle types are distinct Rust
/// types and so never compare equal. `Hash` must agree with `Eq`.
pub trait Puzzle: Clone + Eq + Hash + Debug {
    /// All states reachable from this one by exactly one legal move.
    ///
    /// An empty result means a dead end, which is not necessarily solved.
    /// The receiver is never modified; every returned state owns its own
    /// copy of whatever composite data it changed.
    fn extensions(&self) -> Vec<Self>;

    /// Whether this exact state satisfies the puzzle's win condition.
    fn is_solved(&self) -> bool;

    /// Whether this state provably cannot be extended to a solution.
    ///
    /// Searches skip expanding states for which this returns `true`.
    fn fail_fast(&self) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Small puzzles with hand-checkable state spaces for the search tests.

    use super::Puzzle;

    /// Walk on the integers `0..=limit`: each move adds one or doubles.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Counter {
        pub value: u32,
        pub target: u32,
        pub limit: u32,
    }

    impl Counter {
        pub fn new(value: u32, target: u32, limit: u32) -> Self {
            Self {
                value,
                target,
                limit,
            }
        }
    }

    impl Puzzle for Counter {
        fn extensions(&self) -> Vec<Self> {
            [self.value + 1, self.value * 2]
                .into_iter()
                .filter(|&v| v <= self.limit && v != self.value)
                .map(|value| Self { value, ..self.clone() })
                .collect()
        }

        fn is_solved(&self) -> bool {
            self.value == self.target
        }
    }

    /// Walk around a ring of `size` positions, one step either way.
    /// Every state can reach every other, so naive search would cycle.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Ring {
        pub position: u32,
        pub size: u32,
        pub target: Option<u32>,
    }

    impl Puzzle for Ring {
        fn extensions(&self) -> Vec<Self> {
            let next = (self.position + 1) % self.size;
            let prev = (self.position + self.size - 1) % self.size;
            [next, prev]
                .into_iter()
                .map(|position| Self { position, ..self.clone() })
                .collect()
        }

        fn is_solved(&self) -> bool {
            self.target == Some(self.position)
        }
    }

    #[test]
    fn test_counter_extensions_stay_in_bounds() {
        let c = Counter::new(3, 10, 5);
        let values: Vec<u32> = c.extensions().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![4]);
        assert!(!c.fail_fast());
    }

    #[test]
    fn test_extensions_do_not_touch_receiver() {
        let c = Counter::new(2, 10, 20);
        let before = c.clone();
        let first = c.extensions();
        let second = c.extensions();
        assert_eq!(c, before);
        assert_eq!(first, second);
    }
}
