//! Game commands: input that manages the session instead of the player.

/// What a command asks the turn loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Show the text and keep playing.
    Continue(String),
    /// Show the text and end the session.
    Quit(String),
}

/// Runs a parsed command verb.
#[must_use]
pub fn run_command(verb: &str, argument: &str) -> CommandOutcome {
    match verb {
        "quit" | "exit" => CommandOutcome::Quit("Quitting ...".to_string()),
        _ => CommandOutcome::Continue(format!("Command {argument}")),
    }
}
