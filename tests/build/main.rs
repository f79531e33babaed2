//! Integration tests for Layer 2: Build
//!
//! Tests the two-phase builder on complete blueprints: built worlds play
//! correctly, and broken blueprints fail with pinpointed errors.

mod failures;
