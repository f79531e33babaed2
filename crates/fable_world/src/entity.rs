//! Entities: the objects that populate a world.

use std::collections::BTreeMap;
use std::fmt;

use fable_foundation::Id;

use crate::inventory::{Equipped, Inventory};

/// The three independent boolean states every entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct States {
    /// Whether the entity responds to interactions.
    pub active: bool,
    /// Whether the entity can be picked up.
    pub obtainable: bool,
    /// Whether the entity is excluded from normal listing.
    pub hidden: bool,
}

impl States {
    /// Flips the active state.
    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Flips the obtainable state.
    pub fn toggle_obtainable(&mut self) {
        self.obtainable = !self.obtainable;
    }

    /// Flips the hidden state.
    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }
}

impl Default for States {
    fn default() -> Self {
        Self {
            active: true,
            obtainable: true,
            hidden: false,
        }
    }
}

/// Where an entity currently is. The single-owner slot.
///
/// Every ownership mutation goes through `World::place`, `World::detach`,
/// `World::equip`, and `World::unequip`, which keep this in step with the
/// owning side's inventory or equipment map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Not owned by anything (pre-placement during build, or freshly
    /// displaced equipment awaiting a new home).
    Loose,
    /// Resident in the inventory of the given container.
    In(Id),
    /// Worn by the given character in the named slot.
    Worn {
        /// The wearing character.
        by: Id,
        /// The slot name it occupies.
        slot: String,
    },
}

/// Inventory plus worn equipment; what makes a character a character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// Carried items.
    pub inventory: Inventory,
    /// Worn equipment by slot.
    pub equipped: Equipped,
}

/// Equipment-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gear {
    /// The slot this piece goes in (head, hands, ...).
    pub slot: String,
    /// Effect tags this piece protects against.
    pub protects: Vec<String>,
    /// Whether protection counts only while worn.
    pub must_equip: bool,
    /// Whether the piece is currently worn.
    pub worn: bool,
}

impl Gear {
    /// Creates gear for the given slot with no protections.
    #[must_use]
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            protects: Vec::new(),
            must_equip: true,
            worn: false,
        }
    }
}

/// The closed set of entity kinds.
///
/// Collection and connection dispatch by matching on this enum, so adding a
/// kind is a compile-checked change everywhere it matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A plain object with no inventory.
    Thing,
    /// An object that holds other entities.
    Container(Inventory),
    /// A location; holds anything except another room.
    Room(Inventory),
    /// The player character.
    Player(Body),
    /// A non-player character.
    Npc(Body),
    /// A wearable object.
    Equipment(Gear),
}

/// Discriminator tags for type-directed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// Plain entity.
    Thing,
    /// Container.
    Container,
    /// Room.
    Room,
    /// Player.
    Player,
    /// Non-player character.
    Npc,
    /// Equipment.
    Equipment,
}

/// An entity that exists in the game world.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier within the world.
    pub id: Id,
    /// Short display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Interaction states.
    pub states: States,
    /// Where this entity currently is.
    pub placement: Placement,
    /// Kind-specific data.
    pub kind: Kind,
    /// Verb-keyed attached events.
    triggers: BTreeMap<String, Id>,
}

impl Entity {
    /// Creates a bare entity of the given kind.
    ///
    /// Rooms and characters start unobtainable; everything else starts with
    /// default states. Names and descriptions are filled in by the builder.
    #[must_use]
    pub fn new(id: Id, kind: Kind) -> Self {
        let mut states = States::default();
        if matches!(kind, Kind::Room(_) | Kind::Player(_) | Kind::Npc(_)) {
            states.obtainable = false;
        }
        Self {
            id,
            name: String::new(),
            description: String::new(),
            states,
            placement: Placement::Loose,
            kind,
            triggers: BTreeMap::new(),
        }
    }

    /// Returns this entity's type tag.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        match self.kind {
            Kind::Thing => TypeTag::Thing,
            Kind::Container(_) => TypeTag::Container,
            Kind::Room(_) => TypeTag::Room,
            Kind::Player(_) => TypeTag::Player,
            Kind::Npc(_) => TypeTag::Npc,
            Kind::Equipment(_) => TypeTag::Equipment,
        }
    }

    /// Returns the inventory if this entity can contain others.
    #[must_use]
    pub fn inventory(&self) -> Option<&Inventory> {
        match &self.kind {
            Kind::Container(inv) | Kind::Room(inv) => Some(inv),
            Kind::Player(body) | Kind::Npc(body) => Some(&body.inventory),
            Kind::Thing | Kind::Equipment(_) => None,
        }
    }

    /// Mutable access to the inventory, if any.
    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match &mut self.kind {
            Kind::Container(inv) | Kind::Room(inv) => Some(inv),
            Kind::Player(body) | Kind::Npc(body) => Some(&mut body.inventory),
            Kind::Thing | Kind::Equipment(_) => None,
        }
    }

    /// Returns the character body if this entity is a character.
    #[must_use]
    pub fn body(&self) -> Option<&Body> {
        match &self.kind {
            Kind::Player(body) | Kind::Npc(body) => Some(body),
            _ => None,
        }
    }

    /// Mutable access to the character body, if any.
    pub fn body_mut(&mut self) -> Option<&mut Body> {
        match &mut self.kind {
            Kind::Player(body) | Kind::Npc(body) => Some(body),
            _ => None,
        }
    }

    /// Returns the gear data if this entity is equipment.
    #[must_use]
    pub fn gear(&self) -> Option<&Gear> {
        match &self.kind {
            Kind::Equipment(gear) => Some(gear),
            _ => None,
        }
    }

    /// Mutable access to the gear data, if any.
    pub fn gear_mut(&mut self) -> Option<&mut Gear> {
        match &mut self.kind {
            Kind::Equipment(gear) => Some(gear),
            _ => None,
        }
    }

    /// Attaches an event for a verb.
    ///
    /// Returns false (without replacing) if the verb already has one.
    pub fn add_trigger(&mut self, verb: impl Into<String>, event: Id) -> bool {
        use std::collections::btree_map::Entry;
        match self.triggers.entry(verb.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(event);
                true
            }
        }
    }

    /// Returns the event attached for a verb, if any.
    #[must_use]
    pub fn trigger(&self, verb: &str) -> Option<&Id> {
        self.triggers.get(verb)
    }

    /// Returns true if an event is attached for the verb.
    #[must_use]
    pub fn has_trigger(&self, verb: &str) -> bool {
        self.triggers.contains_key(verb)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
