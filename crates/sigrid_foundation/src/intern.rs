//! String interning for lexicon words.
//!
//! Verbs, synonym members, and verb-class identifiers repeat heavily across
//! ontology documents; interning them enables fast equality comparison and
//! keeps the lexicon indexes compact.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned word identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordId(u32);

impl WordId {
    /// Returns the raw index of this word.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

/// Interner mapping words to unique IDs and back.
///
/// It is not thread-safe during interning; lexicon construction happens
/// single-threaded at startup, after which lookups are pure reads.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interner {
    /// Word storage.
    words: Vec<Arc<str>>,
    /// Map from word to its id.
    word_map: HashMap<Arc<str>, WordId>,
}

impl Interner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a word, returning its [`WordId`].
    ///
    /// # Panics
    ///
    /// Panics if the number of interned words exceeds `u32::MAX`.
    pub fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.word_map.get(word) {
            return id;
        }

        let idx = u32::try_from(self.words.len()).expect("too many interned words");
        let arc: Arc<str> = word.into();
        self.words.push(arc.clone());

        let id = WordId(idx);
        self.word_map.insert(arc, id);
        id
    }

    /// Looks up a word without interning it.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<WordId> {
        self.word_map.get(word).copied()
    }

    /// Gets the string for a word id.
    #[must_use]
    pub fn resolve(&self, id: WordId) -> Option<&str> {
        self.words.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns the number of interned words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
