//! Event interpreter, condition predicates, and console ports for Fable.
//!
//! Events live as inert records in the world's event table; this crate is
//! what runs them. [`execute`] interprets one event against an affected
//! entity and returns the resulting text, [`test`] evaluates a condition
//! predicate, and [`Console`] is the blocking I/O boundary both of them
//! reach the player through. Swapping the console for a [`ScriptedConsole`]
//! makes every interpreter path testable without a terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod condition;
mod io;
mod run;

pub use condition::test;
pub use io::{menu_choice, Choice, Console, ScriptedConsole};
pub use run::execute;
