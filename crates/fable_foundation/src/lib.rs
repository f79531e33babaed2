//! Identifiers, error types, and text policy for Fable.
//!
//! This crate provides:
//! - [`Id`] - Opaque string identifiers for entities and events
//! - [`Error`] - Rich error types covering blueprint and ownership failures
//! - [`text`] - The engine-wide text matching and joining policy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;
pub mod text;

pub use error::{Error, ErrorKind, Result};
pub use id::Id;
