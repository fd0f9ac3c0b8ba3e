//! Signature-element tree, documentation, thematic roles and grids for Sigrid.
//!
//! This crate provides:
//! - [`SignatureTree`] - arena-backed tree of signature elements with a
//!   deep-copy and structural-equality contract
//! - [`SignatureNode`] / [`NodePayload`] - tagged-variant nodes over a shared core
//! - [`Documentation`] and [`Addressee`] - role-based documentation parts
//! - [`ThematicRole`] and [`ThematicGrid`] - role and grid definitions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod documentation;
mod grid;
mod node;
mod role;
mod tree;

pub use documentation::{Addressee, AddresseeText, Documentation};
pub use grid::{Obligation, ThematicGrid};
pub use node::{ListDirection, NodePayload, SignatureNode};
pub use role::{FAILABLE_ROLE_NAMES, ThematicRole};
pub use tree::{Delimiters, SignatureTree};
