//! Integration tests for Layer 2: Lexicon
//!
//! Tests for identifier tokenization, ontology loading, and verb
//! classification.

mod classification;
