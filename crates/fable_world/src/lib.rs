//! Entity/container model, world tables, and traversal search for Fable.
//!
//! This crate provides:
//! - [`Entity`] - In-world objects with states, per-verb triggers, and a
//!   closed set of kinds (things, containers, rooms, characters, equipment)
//! - [`Event`] - The stateful behavior records entities expose per verb
//!   (data only; the interpreter lives in `fable_script`)
//! - [`World`] - The flat id-keyed tables and every ownership mutation
//! - [`search`] - Read-only collectors over the containment subtree
//!
//! Ownership is a single-owner slot per entity ([`Placement`]): an entity is
//! loose, resident in exactly one container's inventory, or worn in exactly
//! one character's equipment slot. "Contained and worn at once" is not
//! representable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod event;
mod inventory;
pub mod search;
mod world;

pub use entity::{Body, Entity, Gear, Kind, Placement, States, TypeTag};
pub use event::{Condition, Event, EventKind, Opt};
pub use inventory::{Equipped, Inventory};
pub use world::World;
