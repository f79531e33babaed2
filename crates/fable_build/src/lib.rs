//! Blueprint records and the two-phase world builder for Fable.
//!
//! A world file is a flat map from id to tagged record. Construction runs
//! in two phases because blueprint references are not acyclic and forward
//! references are the norm: phase one instantiates every bare object into
//! the world tables, phase two wires all the id references, which by then
//! are guaranteed to resolve or be reported as blueprint errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod blueprint;
mod builder;

pub use blueprint::{
    Blueprint, EntityRecord, EventRecord, HasItemRecord, IsActiveRecord, ObjectRef, OptionRecord,
    ProtectedRecord, QuestionRecord, Record, TriggerRef,
};
pub use builder::{build, from_json, load};
