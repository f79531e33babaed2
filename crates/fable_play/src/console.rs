//! A plain stdin/stdout console.

use std::io::{BufRead, Write};

use fable_script::{menu_choice, Choice, Console};

/// A [`Console`] over standard input and output.
///
/// Menus are shown 1-based with a trailing Cancel slot; the cancel number
/// maps to [`Choice::Cancelled`] and anything out of range or unparseable
/// to [`Choice::Invalid`]. Write failures on a terminal are not worth
/// aborting a game over, so they are swallowed.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a standard console.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_line() -> String {
        let mut line = String::new();
        let stdin = std::io::stdin();
        if stdin.lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\n', '\r']).to_string()
    }
}

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        Self::read_line()
    }

    fn menu(&mut self, choices: &[String]) -> Choice {
        for (index, choice) in choices.iter().enumerate() {
            println!("{}. {choice}", index + 1);
        }
        println!("{}. Cancel", choices.len() + 1);
        println!();

        let answer = self.prompt("Choice: ");
        menu_choice(&answer, choices.len())
    }
}
