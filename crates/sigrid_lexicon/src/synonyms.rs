//! Synonym sets used as a classification fallback.
//!
//! A synonym lexicon groups verbs into synsets the way WordNet does: one set
//! per word sense, so a verb usually appears in several synsets. The text
//! format is one synset per line, words separated by whitespace, `#` starting
//! a comment line. Multi-word forms use underscores, which are normalized to
//! blanks on load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sigrid_foundation::{Error, Result};

/// A lexicon of verb synonym sets.
#[derive(Clone, Debug, Default)]
pub struct SynonymLexicon {
    synsets: Vec<Vec<String>>,
    /// Word to indices of the synsets containing it.
    index: HashMap<String, Vec<usize>>,
}

impl SynonymLexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of synsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Returns true if the lexicon holds no synsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Adds one synonym set.
    pub fn add_synset<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let synset: Vec<String> = words.into_iter().map(Into::into).collect();
        if synset.is_empty() {
            return;
        }

        let slot = self.synsets.len();
        for word in &synset {
            self.index.entry(word.clone()).or_default().push(slot);
        }
        self.synsets.push(synset);
    }

    /// Loads synsets from the line-oriented text format.
    ///
    /// `source_name` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Currently infallible for any input text; the `Result` mirrors the
    /// ontology loader so callers treat both lexica uniformly.
    pub fn load_from_text(&mut self, _source_name: &str, text: &str) -> Result<()> {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.add_synset(line.split_whitespace().map(|w| w.replace('_', " ")));
        }
        Ok(())
    }

    /// Loads synsets from a text file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::ontology_load(&source_name, e.to_string()))?;
        self.load_from_text(&source_name, &text)
    }

    /// Returns all synsets containing `word`, in load order.
    pub fn synsets_for(&self, word: &str) -> impl Iterator<Item = &[String]> {
        self.index
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&slot| self.synsets[slot].as_slice())
    }
}
