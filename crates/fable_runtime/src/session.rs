//! A rustyline-backed console.

use fable_foundation::{Error, Result};
use fable_script::{menu_choice, Choice, Console};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

/// A [`Console`] with line editing and input history.
///
/// Ctrl+C and Ctrl+D both read as a quit command, so closing the terminal
/// input ends the session the same way typing `quit` does.
pub struct ReadlineConsole {
    editor: Editor<(), DefaultHistory>,
}

impl ReadlineConsole {
    /// Creates a console over a fresh editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self> {
        let editor = Editor::new().map_err(|err| Error::internal(err.to_string()))?;
        Ok(Self { editor })
    }

    fn read(&mut self, prompt: &str) -> String {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                line
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => "quit".to_string(),
            Err(err) => {
                eprintln!("read error: {err}");
                "quit".to_string()
            }
        }
    }
}

impl Console for ReadlineConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, prompt: &str) -> String {
        self.read(prompt)
    }

    fn menu(&mut self, choices: &[String]) -> Choice {
        for (index, choice) in choices.iter().enumerate() {
            println!("{}. {choice}", index + 1);
        }
        println!("{}. Cancel", choices.len() + 1);
        println!();

        let answer = self.read("Choice: ");
        menu_choice(&answer, choices.len())
    }
}
