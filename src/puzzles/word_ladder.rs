//! Word ladder: reach a target word by changing one letter at a time,
//! passing only through words in a dictionary.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

/// Letters tried at each position.
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Equality and hashing look at the two words; the dictionary is shared
/// by every state of one puzzle and left out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderPuzzle {
    from_word: String,
    to_word: String,
    #[serde(skip)]
    word_set: Arc<BTreeSet<String>>,
}

impl WordLadderPuzzle {
    pub fn new(
        from_word: impl Into<String>,
        to_word: impl Into<String>,
        word_set: impl Into<Arc<BTreeSet<String>>>,
    ) -> Result<Self> {
        let (from_word, to_word) = (from_word.into(), to_word.into());
        if from_word.chars().count() != to_word.chars().count() {
            return Err(Error::WordLengthMismatch { from_word, to_word });
        }
        Ok(Self {
            from_word,
            to_word,
            word_set: word_set.into(),
        })
    }

    pub fn from_word(&self) -> &str {
        &self.from_word
    }

    pub fn to_word(&self) -> &str {
        &self.to_word
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            from_word: word,
            to_word: self.to_word.clone(),
            word_set: Arc::clone(&self.word_set),
        }
    }
}

impl PartialEq for WordLadderPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.from_word == other.from_word && self.to_word == other.to_word
    }
}

impl Eq for WordLadderPuzzle {}

impl Hash for WordLadderPuzzle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from_word.hash(state);
        self.to_word.hash(state);
    }
}

impl Puzzle for WordLadderPuzzle {
    /// Every dictionary word one letter away, by position then letter.
    fn extensions(&self) -> Vec<Self> {
        let letters: Vec<char> = self.from_word.chars().collect();
        let mut extensions = Vec::new();
        for i in 0..letters.len() {
            for letter in ALPHABET {
                if letter == letters[i] {
                    continue;
                }
                let mut candidate = letters.clone();
                candidate[i] = letter;
                let word: String = candidate.into_iter().collect();
                if self.word_set.contains(&word) {
                    extensions.push(self.step_to(word));
                }
            }
        }
        extensions
    }

    fn is_solved(&self) -> bool {
        self.from_word == self.to_word
    }
}
