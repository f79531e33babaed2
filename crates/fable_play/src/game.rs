//! The turn loop.

use fable_foundation::Result;
use fable_script::Console;
use fable_world::World;

use crate::commands::{run_command, CommandOutcome};
use crate::parse::{ParseCode, Parser};
use crate::resolve::resolve;

const TURN_SEPARATOR: &str = "\n----------------------------------------------------";

/// One interactive session over a built world.
///
/// Turns are strictly synchronous: one line of input resolves completely
/// before the next is read. The session ends on a quit command or when the
/// player entity is hidden, which is how an end-game event signals that
/// play is over.
#[derive(Debug)]
pub struct Game {
    world: World,
    parser: Parser,
}

impl Game {
    /// Creates a game over a built world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            world,
            parser: Parser::new(),
        }
    }

    /// The world being played.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs the session to completion.
    ///
    /// # Errors
    ///
    /// Engine-level failures (broken world state) end the session early;
    /// gameplay outcomes never do.
    pub fn run(&mut self, io: &mut dyn Console) -> Result<()> {
        if !self.world.welcome.is_empty() {
            io.line(&self.world.welcome);
        }
        if !self.world.opening.is_empty() {
            io.line(&self.world.opening);
        }

        loop {
            let raw = io.prompt("\n> ");
            io.line(TURN_SEPARATOR);
            let parsed = self.parser.parse(&raw);

            let mut quitting = false;
            let result = match parsed.code {
                ParseCode::Command => match run_command(&parsed.verb, &parsed.object) {
                    CommandOutcome::Continue(text) => text,
                    CommandOutcome::Quit(text) => {
                        quitting = true;
                        text
                    }
                },
                ParseCode::Error => parsed.message.unwrap_or_default(),
                ParseCode::None => resolve(&mut self.world, io, &parsed)?,
            };
            io.line(&result);

            if quitting || self.over()? {
                break;
            }
        }

        io.line("Thanks for playing");
        Ok(())
    }

    fn over(&self) -> Result<bool> {
        let player = self.world.player()?;
        Ok(self.world.entity(player)?.states.hidden)
    }
}
