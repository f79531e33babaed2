//! Interactive terminal session for Fable.
//!
//! Provides a [`Console`] backed by rustyline, so play gets line editing
//! and input history, and the CLI entry point that loads a world file and
//! runs it.
//!
//! [`Console`]: fable_script::Console

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod session;

pub use session::ReadlineConsole;
