//! Error types, string interning, and shared enums for Sigrid.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Interner`] - Interned words for fast lexicon lookups
//! - [`NodeId`] - Generational signature-tree node identifiers
//! - [`Numerus`] and [`RoleScope`] - shared grammatical/scope enums

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod intern;
mod node_id;
mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use intern::{Interner, WordId};
pub use node_id::NodeId;
pub use types::{ANONYMOUS_IDENTIFIER, NodeKind, Numerus, RoleScope};
