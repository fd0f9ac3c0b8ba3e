//! Catalog persistence for Sigrid.
//!
//! This crate provides:
//! - [`Catalog`] - The editable definitions of a host: addressees, thematic
//!   roles, and thematic grids
//! - [`to_bytes`] / [`from_bytes`] and [`save_to_file`] / [`load_from_file`] -
//!   `MessagePack` persistence for catalogs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod serialize;

pub use catalog::Catalog;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
