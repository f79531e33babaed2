//! The console port: the engine's only I/O boundary.

use std::collections::VecDeque;

/// The outcome of presenting a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// A valid zero-based selection.
    Picked(usize),
    /// The trailing cancel slot.
    Cancelled,
    /// Out-of-range or unparseable input.
    Invalid,
}

/// A blocking line-oriented console.
///
/// The interpreter and the game loop talk to the player only through this
/// trait, so play is scriptable in tests and the terminal backend is an
/// implementation detail of the runtime crate.
pub trait Console {
    /// Writes one line of output.
    fn line(&mut self, text: &str);

    /// Writes a prompt and reads one line of input.
    fn prompt(&mut self, prompt: &str) -> String;

    /// Presents numbered choices plus a trailing cancel slot and reads a
    /// selection.
    fn menu(&mut self, choices: &[String]) -> Choice;
}

/// Maps a 1-based menu answer onto a [`Choice`].
///
/// The slot one past the last choice cancels; anything else out of range,
/// and anything that is not a number, is invalid.
#[must_use]
pub fn menu_choice(answer: &str, count: usize) -> Choice {
    match answer.trim().parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Choice::Picked(number - 1),
        Ok(number) if number == count + 1 => Choice::Cancelled,
        _ => Choice::Invalid,
    }
}

/// A deterministic console for tests and headless play.
///
/// Answers and menu selections are queued up front; everything written is
/// recorded. An exhausted queue answers with an empty line or a cancel.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    choices: VecDeque<Choice>,
    output: Vec<String>,
    menus: Vec<Vec<String>>,
}

impl ScriptedConsole {
    /// Creates an empty scripted console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a line to be returned by the next unanswered prompt.
    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Queues a selection to be returned by the next menu.
    pub fn push_choice(&mut self, choice: Choice) {
        self.choices.push_back(choice);
    }

    /// Everything written so far, in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The choice lists presented so far, in order.
    #[must_use]
    pub fn menus(&self) -> &[Vec<String>] {
        &self.menus
    }
}

impl Console for ScriptedConsole {
    fn line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn prompt(&mut self, prompt: &str) -> String {
        self.output.push(prompt.to_string());
        self.answers.pop_front().unwrap_or_default()
    }

    fn menu(&mut self, choices: &[String]) -> Choice {
        self.menus.push(choices.to_vec());
        self.choices.pop_front().unwrap_or(Choice::Cancelled)
    }
}
