//! Integration tests for Layer 1: World
//!
//! Tests ownership invariants, placement rules, equipment, and search.

mod searching;
