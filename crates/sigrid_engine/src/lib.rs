//! Thematic-grid derivation and role collection for Sigrid.
//!
//! This crate provides:
//! - [`derive_thematic_grid`] and [`find_matching_grids`] - Grid matching by
//!   operation identifier
//! - [`contains_role`] and [`collect_thematic_roles`] - Role set operations
//!   with name-based equality
//! - [`collect_documented_roles`] and [`collect_subtree_roles`] - Roles
//!   already documented on signature elements
//! - [`recommend`] - A bundled recommendation for display consumers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod derive;
mod roles;

pub use derive::{GridRecommendation, derive_thematic_grid, find_matching_grids, recommend};
pub use roles::{collect_documented_roles, collect_subtree_roles, collect_thematic_roles, contains_role};
