//! Fable - Text adventure engine
//!
//! This crate re-exports all layers of the Fable system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: fable_runtime    — Readline console, CLI
//! Layer 3: fable_play       — Parser, actions, game loop
//! Layer 2: fable_script     — Event interpreter, conditions, console port
//!          fable_build      — Blueprint deserialization, two-phase builder
//! Layer 1: fable_world      — Entities, events, placement, search
//! Layer 0: fable_foundation — Core types (Id, Error, text policy)
//! ```

pub use fable_build as build;
pub use fable_foundation as foundation;
pub use fable_play as play;
pub use fable_runtime as runtime;
pub use fable_script as script;
pub use fable_world as world;
