//! Error types for the Fable engine.
//!
//! Uses `thiserror` for ergonomic error definition. Blueprint errors abort
//! world construction; ownership errors indicate a blueprint or engine bug
//! and are fatal. Ordinary gameplay outcomes (no match, cancelled choice)
//! are plain strings, never values of this type.

use thiserror::Error;

use crate::id::Id;

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Fable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-field blueprint error.
    #[must_use]
    pub fn missing_field(id: Id, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField {
            id,
            field: field.into(),
        })
    }

    /// Creates an unknown-kind blueprint error.
    #[must_use]
    pub fn unknown_kind(id: Id, kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKind {
            id,
            kind: kind.into(),
        })
    }

    /// Creates an unresolved-reference blueprint error.
    #[must_use]
    pub fn unresolved(id: Id, reference: Id) -> Self {
        Self::new(ErrorKind::UnresolvedReference { id, reference })
    }

    /// Creates a malformed-blueprint error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed(reason.into()))
    }

    /// Creates a container-type violation error.
    #[must_use]
    pub fn container_type(container: Id, item: Id, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContainerType {
            container,
            item,
            reason: reason.into(),
        })
    }

    /// Creates a duplicate-item error.
    #[must_use]
    pub fn duplicate_item(container: Id, item: Id) -> Self {
        Self::new(ErrorKind::DuplicateItem { container, item })
    }

    /// Creates a not-equipment error.
    #[must_use]
    pub fn not_equipment(id: Id) -> Self {
        Self::new(ErrorKind::NotEquipment(id))
    }

    /// Creates a not-a-character error.
    #[must_use]
    pub fn not_a_character(id: Id) -> Self {
        Self::new(ErrorKind::NotACharacter(id))
    }

    /// Creates an entity-not-found error.
    #[must_use]
    pub fn entity_not_found(id: Id) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates an event-not-found error.
    #[must_use]
    pub fn event_not_found(id: Id) -> Self {
        Self::new(ErrorKind::EventNotFound(id))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(reason.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(reason.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A blueprint record is missing a required field.
    #[error("invalid blueprint: object {id} is missing field {field}")]
    MissingField {
        /// The offending object id.
        id: Id,
        /// The missing field name.
        field: String,
    },

    /// A blueprint record carries an unrecognized or misplaced type
    /// discriminator.
    #[error("invalid blueprint: object {id} has unexpected type {kind}")]
    UnknownKind {
        /// The offending object id.
        id: Id,
        /// The discriminator that was not understood in this position.
        kind: String,
    },

    /// A blueprint record references an id that exists nowhere in the map.
    #[error("invalid blueprint: object {id} references unknown id {reference}")]
    UnresolvedReference {
        /// The referring object id.
        id: Id,
        /// The id that could not be resolved.
        reference: Id,
    },

    /// The blueprint could not be understood at all.
    #[error("invalid blueprint: {0}")]
    Malformed(String),

    /// An entity of a forbidden type was added to a container.
    #[error("container error: cannot add {item} to {container}: {reason}")]
    ContainerType {
        /// The container that rejected the item.
        container: Id,
        /// The item that was rejected.
        item: Id,
        /// Which rule was violated.
        reason: String,
    },

    /// An item with this id is already present in the container.
    #[error("container error: {container} already holds {item}")]
    DuplicateItem {
        /// The container.
        container: Id,
        /// The duplicate item.
        item: Id,
    },

    /// An equip was attempted with an entity that is not equipment.
    #[error("equip error: {0} is not equipment")]
    NotEquipment(Id),

    /// An equip was attempted on an entity that cannot wear equipment.
    #[error("equip error: {0} is not a character")]
    NotACharacter(Id),

    /// Entity id lookup failed in the world table.
    #[error("entity not found: {0}")]
    EntityNotFound(Id),

    /// Event id lookup failed in the world table.
    #[error("event not found: {0}")]
    EventNotFound(Id),

    /// Reading a world file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
