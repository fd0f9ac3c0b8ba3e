//! Integration tests for Layer 1: Structure
//!
//! Tests for signature trees, deep copying, documentation, roles, and grids.

mod documentation;
