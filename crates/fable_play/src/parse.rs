//! Splitting raw input into verb and object text.

/// What kind of input a line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCode {
    /// A playable action.
    None,
    /// A game command such as quit.
    Command,
    /// Unusable input; `message` says why.
    Error,
}

/// A line of input split into its parts.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// The first word.
    pub verb: String,
    /// The rest of the line, verbatim.
    pub object: String,
    /// An indirect object, when a future verb form supplies one.
    pub other: Option<String>,
    /// What kind of input this is.
    pub code: ParseCode,
    /// The complaint to show the player for unusable input.
    pub message: Option<String>,
}

/// Turns raw input lines into [`ParsedInput`].
#[derive(Debug)]
pub struct Parser {
    verbs: Vec<&'static str>,
    commands: Vec<&'static str>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with the standard verb and command lists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbs: vec![
                "get",
                "take",
                "drop",
                "equip",
                "remove",
                "go",
                "use",
                "look",
                "inventory",
                "talk",
                "give",
                "put",
            ],
            commands: vec!["quit", "exit"],
        }
    }

    /// Splits a line into verb and object text.
    ///
    /// The first word is the verb; everything after it is the object text,
    /// joined back together. A verb outside both lists is an error with a
    /// player-facing message, as is an empty line.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParsedInput {
        let mut words = input.split_whitespace();
        let Some(verb) = words.next() else {
            return ParsedInput {
                verb: String::new(),
                object: String::new(),
                other: None,
                code: ParseCode::Error,
                message: Some("Say something".to_string()),
            };
        };
        let object = words.collect::<Vec<_>>().join(" ");

        let (code, message) = if self.verbs.contains(&verb) {
            (ParseCode::None, None)
        } else if self.commands.contains(&verb) {
            (ParseCode::Command, None)
        } else {
            (
                ParseCode::Error,
                Some(format!("You don't know how to {verb}")),
            )
        };

        ParsedInput {
            verb: verb.to_string(),
            object,
            other: None,
            code,
            message,
        }
    }
}
