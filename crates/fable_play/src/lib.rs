//! Input parsing, action resolution, and the game loop for Fable.
//!
//! A turn is: read a line, [`Parser::parse`] it into verb and object text,
//! then either run a command, echo a parse error, or hand the parsed input
//! to [`resolve`], which collects candidate entities from the player's
//! room, disambiguates through the console's menu, and performs the
//! verb-specific action. [`Game`] strings the turns together until the
//! player quits or the world hides the player, which is how an end-game
//! event signals that the session is over.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod action;
mod commands;
mod console;
mod game;
mod parse;
mod resolve;

pub use action::Action;
pub use commands::{run_command, CommandOutcome};
pub use console::StdConsole;
pub use game::Game;
pub use parse::{ParseCode, ParsedInput, Parser};
pub use resolve::resolve;
