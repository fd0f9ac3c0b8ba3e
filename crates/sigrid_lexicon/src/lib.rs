//! Identifier tokenization and verb classification for Sigrid.
//!
//! This crate provides:
//! - [`split_camel_case`] and [`extract_verb`] - Operation identifier tokenization
//! - [`VerbOntology`] - A verb-class ontology loaded from XML class documents
//! - [`SynonymLexicon`] - Synonym sets used as a classification fallback
//! - [`VerbClassifier`] - Verb-to-class resolution with synonym fallback

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classifier;
mod synonyms;
mod tokenizer;
mod verbnet;

pub use classifier::{CLASS_UNCLASSIFIED, VerbClassifier};
pub use synonyms::SynonymLexicon;
pub use tokenizer::{extract_verb, split_camel_case, tokenize};
pub use verbnet::VerbOntology;
