//! Event and condition records.
//!
//! These are inert data: ids into the world tables plus completion state.
//! The interpreter that gives them behavior lives in `fable_script`. Keeping
//! events in a central table means one event attached to several entities
//! shares a single completion state no matter which path triggered it.

use fable_foundation::Id;

/// A boolean predicate tested against an entity (usually the player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Prompt the player and compare the trimmed answer.
    Question {
        /// The prompt to emit.
        question: String,
        /// The expected answer.
        answer: String,
    },
    /// The item is somewhere in the tested subject (or a configured
    /// alternate container).
    HasItem {
        /// The item to look for.
        item: Id,
        /// Where to look instead of the tested subject.
        container: Option<Id>,
    },
    /// The character is protected against every listed effect.
    Protected {
        /// Effect tags that must all be covered.
        effects: Vec<String>,
    },
    /// A target entity's active state is on.
    IsActive {
        /// The entity whose state is tested.
        target: Id,
    },
}

/// One choice in an interaction menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    /// The label presented to the player.
    pub text: String,
    /// The event run when chosen.
    pub event: Id,
    /// Extra visibility gate, if any.
    pub condition: Option<Condition>,
    /// Whether choosing this option ends the interaction loop.
    pub breakout: bool,
}

/// Kind-specific event data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// No side effect; produces only the event's message.
    Plain,
    /// Relocates the affected entity into a destination container.
    Move {
        /// Where the affected entity goes.
        destination: Id,
    },
    /// Transfers an item from a configured owner to the affected entity.
    /// A no-op if the owner does not hold the item.
    Give {
        /// The item transferred.
        item: Id,
        /// The container it is taken from.
        owner: Id,
    },
    /// Transfers an item from the affected entity to a configured new
    /// owner. A no-op if the affected entity does not hold the item.
    Take {
        /// The item transferred.
        item: Id,
        /// The container it goes to.
        new_owner: Id,
    },
    /// Flips a target entity's active state.
    ToggleActive {
        /// The toggled entity.
        target: Id,
    },
    /// Flips a target entity's obtainable state.
    ToggleObtainable {
        /// The toggled entity.
        target: Id,
    },
    /// Flips the hidden state of a target, or of the affected entity when
    /// no target is configured.
    ToggleHidden {
        /// The toggled entity; defaults to the affected entity.
        target: Option<Id>,
    },
    /// Marks the affected entity hidden; the game loop's end convention.
    EndGame,
    /// Runs every member in order on every call.
    Group {
        /// Member events, in execution order.
        members: Vec<Id>,
    },
    /// Runs exactly one member per call, advancing an internal cursor.
    Ordered {
        /// Member events, in step order.
        members: Vec<Id>,
        /// The member to run next.
        cursor: usize,
    },
    /// Tests a condition and runs a success or failure branch.
    Conditional {
        /// The gate.
        condition: Condition,
        /// Run when the condition passes.
        success: Id,
        /// Run when the condition fails; empty result if absent.
        failure: Option<Id>,
        /// Whether the most recent execution took the success branch.
        passed: bool,
    },
    /// A repeatable menu loop over options.
    Interaction {
        /// The menu options.
        options: Vec<Opt>,
        /// Global breakout: when set, the loop stops after any choice.
        break_out: bool,
        /// Printed when the loop ends; suppresses the cancel message.
        end_message: Option<String>,
    },
}

/// A stateful behavior unit bound to a verb on an entity.
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique identifier within the world.
    pub id: Id,
    /// Whether the event retires after one completed execution.
    pub only_once: bool,
    /// Whether the event is finished; finished events yield empty results.
    /// Monotonic except through composite-specific completion rules.
    pub is_done: bool,
    /// Static text produced on execution.
    pub message: Option<String>,
    /// Observer events. Registration only; the base model never invokes
    /// them.
    pub subjects: Vec<Id>,
    /// Kind-specific data.
    pub kind: EventKind,
}

impl Event {
    /// Creates a bare event with [`EventKind::Plain`] wiring.
    ///
    /// The connect phase of the world builder replaces the kind with the
    /// blueprint's wiring once every referenced id exists.
    #[must_use]
    pub fn new(id: Id) -> Self {
        Self {
            id,
            only_once: false,
            is_done: false,
            message: None,
            subjects: Vec::new(),
            kind: EventKind::Plain,
        }
    }

    /// Registers an observer event.
    pub fn register(&mut self, subject: Id) {
        self.subjects.push(subject);
    }

    /// The event's message, or empty text.
    #[must_use]
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
