//! The on-disk world format.
//!
//! A blueprint is descriptive details plus a flat id-keyed map of tagged
//! records. Boolean fields are accepted as JSON numbers (0/1) as well as
//! true/false, which is what existing world editors emit. Condition and
//! option records are "deferred": nothing is created from them during the
//! create phase; the connect phase builds them in place wherever a
//! conditional or interaction references them.

use std::collections::BTreeMap;

use fable_foundation::Id;
use serde::de::{Deserializer, Unexpected, Visitor};
use serde::Deserialize;

/// A whole world file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Blueprint {
    /// The world's name.
    #[serde(default)]
    pub name: String,
    /// The world's version string.
    #[serde(default)]
    pub version: String,
    /// Text shown when the game starts.
    #[serde(default)]
    pub welcome: String,
    /// Text opening the story.
    #[serde(default)]
    pub opening: String,
    /// Every object in the world, keyed by id.
    #[serde(default)]
    pub objects: BTreeMap<Id, Record>,
}

/// A reference to another record by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectRef {
    /// The referenced id.
    pub id: Id,
}

/// An event attached to an entity under a verb.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerRef {
    /// The attached event.
    pub id: Id,
    /// The verb that fires it.
    pub verb: String,
}

/// One record in the object map, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// A plain entity.
    Entity(EntityRecord),
    /// A container.
    Container(EntityRecord),
    /// A room.
    Room(EntityRecord),
    /// The player; exactly one per blueprint.
    Player(EntityRecord),
    /// A non-player character.
    Npc(EntityRecord),
    /// A wearable piece of equipment.
    Equipment(EntityRecord),
    /// A plain message event.
    #[serde(alias = "inform")]
    Event(EventRecord),
    /// Relocates the affected entity.
    Move(EventRecord),
    /// Gives an item to the affected entity.
    Give(EventRecord),
    /// Takes an item from the affected entity.
    Take(EventRecord),
    /// Flips a target's active state.
    ToggleActive(EventRecord),
    /// Flips a target's obtainable state.
    ToggleObtainable(EventRecord),
    /// Flips a target's hidden state.
    ToggleHidden(EventRecord),
    /// Ends the game session.
    EndGame(EventRecord),
    /// Runs all members every call.
    Group(EventRecord),
    /// Runs one member per call, in order.
    Ordered(EventRecord),
    /// Tests a condition and branches.
    Conditional(EventRecord),
    /// A repeatable menu of options.
    Interaction(EventRecord),
    /// A menu option. Deferred: built at connect time.
    Option(OptionRecord),
    /// A condition-gated menu option. Deferred.
    ConditionalOption(OptionRecord),
    /// A question condition. Deferred.
    Question(QuestionRecord),
    /// An item-possession condition. Deferred.
    #[serde(rename = "hasItem", alias = "has_item")]
    HasItem(HasItemRecord),
    /// An effect-protection condition. Deferred.
    Protected(ProtectedRecord),
    /// An entity-active condition. Deferred.
    IsActive(IsActiveRecord),
}

impl Record {
    /// The id the record declares for itself.
    #[must_use]
    pub fn id(&self) -> &Id {
        match self {
            Record::Entity(r)
            | Record::Container(r)
            | Record::Room(r)
            | Record::Player(r)
            | Record::Npc(r)
            | Record::Equipment(r) => &r.id,
            Record::Event(r)
            | Record::Move(r)
            | Record::Give(r)
            | Record::Take(r)
            | Record::ToggleActive(r)
            | Record::ToggleObtainable(r)
            | Record::ToggleHidden(r)
            | Record::EndGame(r)
            | Record::Group(r)
            | Record::Ordered(r)
            | Record::Conditional(r)
            | Record::Interaction(r) => &r.id,
            Record::Option(r) | Record::ConditionalOption(r) => &r.id,
            Record::Question(r) => &r.id,
            Record::HasItem(r) => &r.id,
            Record::Protected(r) => &r.id,
            Record::IsActive(r) => &r.id,
        }
    }

    /// A short name for the record's kind, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Record::Entity(_) => "entity",
            Record::Container(_) => "container",
            Record::Room(_) => "room",
            Record::Player(_) => "player",
            Record::Npc(_) => "npc",
            Record::Equipment(_) => "equipment",
            Record::Event(_) => "event",
            Record::Move(_) => "move",
            Record::Give(_) => "give",
            Record::Take(_) => "take",
            Record::ToggleActive(_) => "toggle_active",
            Record::ToggleObtainable(_) => "toggle_obtainable",
            Record::ToggleHidden(_) => "toggle_hidden",
            Record::EndGame(_) => "end_game",
            Record::Group(_) => "group",
            Record::Ordered(_) => "ordered",
            Record::Conditional(_) => "conditional",
            Record::Interaction(_) => "interaction",
            Record::Option(_) => "option",
            Record::ConditionalOption(_) => "conditional_option",
            Record::Question(_) => "question",
            Record::HasItem(_) => "hasItem",
            Record::Protected(_) => "protected",
            Record::IsActive(_) => "is_active",
        }
    }
}

/// Shared shape of every entity-like record.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    /// Unique id.
    pub id: Id,
    /// Display name.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the entity starts active.
    #[serde(default = "default_true", deserialize_with = "truthy")]
    pub active: bool,
    /// Whether the entity starts obtainable.
    #[serde(default = "default_true", deserialize_with = "truthy")]
    pub obtainable: bool,
    /// Whether the entity starts hidden.
    #[serde(default, deserialize_with = "truthy")]
    pub hidden: bool,
    /// Verb-keyed attached events.
    #[serde(default)]
    pub events: Vec<TriggerRef>,
    /// Contained item ids (container-like records only).
    #[serde(default)]
    pub items: Vec<ObjectRef>,
    /// The player's starting room (player records only).
    #[serde(default)]
    pub start: Option<ObjectRef>,
    /// Equipment slot (equipment records only).
    #[serde(default)]
    pub slot: Option<String>,
    /// Effect tags the piece protects against (equipment only).
    #[serde(default)]
    pub protects: Vec<String>,
    /// Whether protection requires the piece to be worn (equipment only).
    #[serde(default = "default_true", deserialize_with = "truthy")]
    pub must_equip: bool,
}

/// Shared shape of every event-like record.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Unique id.
    pub id: Id,
    /// Whether the event retires after one completed execution.
    #[serde(default, deserialize_with = "truthy")]
    pub once: bool,
    /// Static text produced on execution.
    #[serde(default)]
    pub message: Option<String>,
    /// Observer events, registration only.
    #[serde(default)]
    pub subjects: Vec<ObjectRef>,
    /// Move: where the affected entity goes.
    #[serde(default)]
    pub destination: Option<ObjectRef>,
    /// Give/Take: the transferred item.
    #[serde(default)]
    pub item: Option<ObjectRef>,
    /// Give: who holds the item beforehand.
    #[serde(default)]
    pub item_owner: Option<ObjectRef>,
    /// Take: who receives the item.
    #[serde(default)]
    pub new_owner: Option<ObjectRef>,
    /// Toggles: the entity whose state flips.
    #[serde(default)]
    pub target: Option<ObjectRef>,
    /// Group/Ordered: member events in order.
    #[serde(default)]
    pub events: Vec<ObjectRef>,
    /// Conditional: the gate.
    #[serde(default)]
    pub condition: Option<ObjectRef>,
    /// Conditional: run when the gate passes.
    #[serde(default)]
    pub success: Option<ObjectRef>,
    /// Conditional: run when the gate fails.
    #[serde(default)]
    pub failure: Option<ObjectRef>,
    /// Interaction: stop the loop after any choice.
    #[serde(default, deserialize_with = "truthy")]
    pub breakout: bool,
    /// Interaction: the options offered, by id.
    #[serde(default)]
    pub options: Vec<ObjectRef>,
    /// Interaction: printed when the loop ends.
    #[serde(default)]
    pub end_message: Option<String>,
}

/// A deferred menu-option record.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRecord {
    /// Unique id.
    pub id: Id,
    /// The label presented to the player.
    pub text: String,
    /// The event run when chosen.
    pub event: ObjectRef,
    /// The visibility gate (conditional options only).
    #[serde(default)]
    pub condition: Option<ObjectRef>,
    /// Whether choosing this option ends the interaction.
    #[serde(default, deserialize_with = "truthy")]
    pub breakout: bool,
}

/// A deferred question-condition record.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    /// Unique id.
    pub id: Id,
    /// The prompt to emit.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

/// A deferred item-possession condition record.
#[derive(Debug, Clone, Deserialize)]
pub struct HasItemRecord {
    /// Unique id.
    pub id: Id,
    /// The item to look for.
    pub item: ObjectRef,
    /// Where to look instead of the tested subject.
    #[serde(default)]
    pub container: Option<ObjectRef>,
}

/// A deferred effect-protection condition record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtectedRecord {
    /// Unique id.
    pub id: Id,
    /// Effect tags that must all be covered.
    #[serde(default)]
    pub effects: Vec<String>,
}

/// A deferred entity-active condition record.
#[derive(Debug, Clone, Deserialize)]
pub struct IsActiveRecord {
    /// Unique id.
    pub id: Id,
    /// The entity whose state is tested.
    pub target: ObjectRef,
}

fn default_true() -> bool {
    true
}

/// Accepts JSON booleans and 0/1 numbers for boolean fields.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct Truthy;

    impl Visitor<'_> for Truthy {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a boolean or 0/1")
        }

        fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<bool, E> {
            if value == 0.0 || value == 1.0 {
                Ok(value != 0.0)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(Truthy)
}
