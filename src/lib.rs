//! Sigrid - Role-based interface documentation core
//!
//! This crate re-exports all layers of the Sigrid system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: sigrid_runtime    — Catalog persistence (MessagePack)
//! Layer 3: sigrid_engine     — Grid derivation, role collection
//! Layer 2: sigrid_lexicon    — Tokenization, verb-class ontology, classifier
//! Layer 1: sigrid_structure  — Signature tree, documentation, roles, grids
//! Layer 0: sigrid_foundation — Core types (Error, NodeId, Interner)
//! ```

pub use sigrid_engine as engine;
pub use sigrid_foundation as foundation;
pub use sigrid_lexicon as lexicon;
pub use sigrid_runtime as runtime;
pub use sigrid_structure as structure;
