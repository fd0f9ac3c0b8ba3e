//! Cross-layer integration tests
//!
//! End-to-end scenarios across tree construction, verb classification, grid
//! derivation, and catalog persistence.

mod persistence;
