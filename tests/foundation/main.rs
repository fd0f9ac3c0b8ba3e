//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, NodeId, Interner, and shared enums.

mod errors;
