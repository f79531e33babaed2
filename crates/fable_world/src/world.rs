//! World tables and ownership operations.
//!
//! The world is two flat id-keyed tables (entities, events) plus a handful
//! of descriptive fields. All references between objects are ids into these
//! tables, so cyclic and forward references cost nothing, and every
//! ownership mutation funnels through [`World::place`] / [`World::detach`] /
//! [`World::equip`] / [`World::unequip`], which keep the owning side and the
//! entity's [`Placement`] in step.

use std::collections::HashMap;

use fable_foundation::{Error, Id, Result};

use crate::entity::{Entity, Kind, Placement, TypeTag};
use crate::event::Event;
use crate::search;

/// A game world: the entity and event tables plus its descriptive details.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// The world's name.
    pub name: String,
    /// The world's version string.
    pub version: String,
    /// Text shown when the game starts.
    pub welcome: String,
    /// Text opening the story.
    pub opening: String,
    player: Option<Id>,
    entities: HashMap<Id, Entity>,
    events: HashMap<Id, Event>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity to the entity table.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.id.clone(), entity);
    }

    /// Adds an event to the event table.
    pub fn add_event(&mut self, event: Event) {
        self.events.insert(event.id.clone(), event);
    }

    /// Records the distinguished player entity.
    pub fn set_player(&mut self, id: Id) {
        self.player = Some(id);
    }

    /// The player's id.
    ///
    /// # Errors
    ///
    /// Returns an internal error if no player was recorded; a built world
    /// always has one.
    pub fn player(&self) -> Result<&Id> {
        self.player
            .as_ref()
            .ok_or_else(|| Error::internal("world has no player"))
    }

    /// Number of entities in the table.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of events in the table.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// True if an entity with this id exists.
    #[must_use]
    pub fn has_entity(&self, id: &Id) -> bool {
        self.entities.contains_key(id)
    }

    /// True if an event with this id exists.
    #[must_use]
    pub fn has_event(&self, id: &Id) -> bool {
        self.events.contains_key(id)
    }

    /// Looks up an entity by id.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id is not in the table.
    pub fn entity(&self, id: &Id) -> Result<&Entity> {
        self.entities
            .get(id)
            .ok_or_else(|| Error::entity_not_found(id.clone()))
    }

    /// Looks up an entity mutably by id.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id is not in the table.
    pub fn entity_mut(&mut self, id: &Id) -> Result<&mut Entity> {
        self.entities
            .get_mut(id)
            .ok_or_else(|| Error::entity_not_found(id.clone()))
    }

    /// Looks up an event by id.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the id is not in the table.
    pub fn event(&self, id: &Id) -> Result<&Event> {
        self.events
            .get(id)
            .ok_or_else(|| Error::event_not_found(id.clone()))
    }

    /// Looks up an event mutably by id.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the id is not in the table.
    pub fn event_mut(&mut self, id: &Id) -> Result<&mut Event> {
        self.events
            .get_mut(id)
            .ok_or_else(|| Error::event_not_found(id.clone()))
    }

    // --- Ownership ---

    /// Moves an item into a destination container's inventory.
    ///
    /// This is the single legitimate path by which an entity changes
    /// container. Validation happens before any mutation, so a failed
    /// placement leaves both sides untouched:
    /// - the destination must be container-like;
    /// - a room can never be contained;
    /// - a player can only be placed in a room;
    /// - the destination must not already hold the id.
    ///
    /// On success the item is detached from wherever it currently is
    /// (inventory or worn slot) and its placement points at the
    /// destination.
    ///
    /// # Errors
    ///
    /// `ContainerType` or `DuplicateItem` on rule violations;
    /// `EntityNotFound` if either id is unknown.
    pub fn place(&mut self, item: &Id, destination: &Id) -> Result<()> {
        if item == destination {
            return Err(Error::container_type(
                destination.clone(),
                item.clone(),
                "an entity cannot contain itself",
            ));
        }

        let item_tag = self.entity(item)?.type_tag();
        let dest = self.entity(destination)?;
        let dest_tag = dest.type_tag();
        if dest.inventory().is_none() {
            return Err(Error::container_type(
                destination.clone(),
                item.clone(),
                "destination is not a container",
            ));
        }
        match item_tag {
            TypeTag::Room => {
                return Err(Error::container_type(
                    destination.clone(),
                    item.clone(),
                    "a room cannot be contained",
                ));
            }
            TypeTag::Player if dest_tag != TypeTag::Room => {
                return Err(Error::container_type(
                    destination.clone(),
                    item.clone(),
                    "a player can only be placed in a room",
                ));
            }
            _ => {}
        }
        if let Some(inventory) = self.entity(destination)?.inventory() {
            if inventory.contains(item) {
                return Err(Error::duplicate_item(destination.clone(), item.clone()));
            }
        }

        self.detach(item)?;
        match self.entity_mut(destination)?.inventory_mut() {
            Some(inventory) => {
                inventory.add(item.clone());
            }
            None => return Err(Error::internal("validated container lost its inventory")),
        }
        self.entity_mut(item)?.placement = Placement::In(destination.clone());
        Ok(())
    }

    /// Removes an item from its current placement and leaves it loose.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id is unknown.
    pub fn detach(&mut self, item: &Id) -> Result<()> {
        let placement = self.entity(item)?.placement.clone();
        match placement {
            Placement::Loose => {}
            Placement::In(owner) => {
                if let Ok(container) = self.entity_mut(&owner) {
                    if let Some(inventory) = container.inventory_mut() {
                        inventory.remove(item);
                    }
                }
            }
            Placement::Worn { by, slot } => {
                if let Ok(character) = self.entity_mut(&by) {
                    if let Some(body) = character.body_mut() {
                        body.equipped.clear(&slot);
                    }
                }
                if let Some(gear) = self.entity_mut(item)?.gear_mut() {
                    gear.worn = false;
                }
            }
        }
        self.entity_mut(item)?.placement = Placement::Loose;
        Ok(())
    }

    /// Equips an item on a character.
    ///
    /// The item is detached from wherever it currently is and placed into
    /// the slot its gear names. An occupant already in that slot is
    /// displaced: un-worn, left loose, and returned to the caller to find
    /// a new home for. Slot occupancy is not a failure.
    ///
    /// # Errors
    ///
    /// `NotACharacter` if the wearer cannot wear equipment; `NotEquipment`
    /// if the item is not equipment (distinct from displacement).
    pub fn equip(&mut self, character: &Id, item: &Id) -> Result<Option<Id>> {
        if self.entity(character)?.body().is_none() {
            return Err(Error::not_a_character(character.clone()));
        }
        let slot = match self.entity(item)?.gear() {
            Some(gear) => gear.slot.clone(),
            None => return Err(Error::not_equipment(item.clone())),
        };

        let mut displaced = self
            .entity(character)?
            .body()
            .and_then(|body| body.equipped.get(&slot).cloned());
        if displaced.as_ref() == Some(item) {
            // Already worn there; nothing to displace.
            displaced = None;
        }
        if let Some(old) = &displaced {
            self.detach(old)?;
        }

        self.detach(item)?;
        match self.entity_mut(character)?.body_mut() {
            Some(body) => {
                body.equipped.set(slot.clone(), item.clone());
            }
            None => return Err(Error::internal("validated character lost its body")),
        }
        let worn = self.entity_mut(item)?;
        if let Some(gear) = worn.gear_mut() {
            gear.worn = true;
        }
        worn.placement = Placement::Worn {
            by: character.clone(),
            slot,
        };
        Ok(displaced)
    }

    /// Removes whatever is worn in a character's slot.
    ///
    /// The removed piece is un-worn, left loose, and returned.
    ///
    /// # Errors
    ///
    /// `NotACharacter` if the entity cannot wear equipment.
    pub fn unequip(&mut self, character: &Id, slot: &str) -> Result<Option<Id>> {
        let occupant = match self.entity(character)?.body() {
            Some(body) => body.equipped.get(slot).cloned(),
            None => return Err(Error::not_a_character(character.clone())),
        };
        if let Some(id) = &occupant {
            self.detach(id)?;
        }
        Ok(occupant)
    }

    /// Id lookup scoped to a container's contained subtree.
    #[must_use]
    pub fn get_within(&self, container: &Id, id: &Id) -> Option<Id> {
        search::find_by_id(self, id, container)
    }

    /// True if the container's own inventory holds the id directly.
    #[must_use]
    pub fn holds_directly(&self, container: &Id, item: &Id) -> bool {
        self.entity(container)
            .ok()
            .and_then(Entity::inventory)
            .is_some_and(|inventory| inventory.contains(item))
    }

    /// Describes an entity.
    ///
    /// Rooms and containers append a listing of their visible contents;
    /// characters keep their contents to themselves. The player is never
    /// listed: a room description is addressed to them.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id is unknown.
    pub fn describe(&self, id: &Id) -> Result<String> {
        let entity = self.entity(id)?;
        let mut out = entity.description.clone();
        if let Kind::Room(inventory) | Kind::Container(inventory) = &entity.kind {
            let visible: Vec<&str> = inventory
                .iter()
                .filter_map(|item| self.entities.get(item))
                .filter(|item| !item.states.hidden && !matches!(item.kind, Kind::Player(_)))
                .map(|item| item.name.as_str())
                .collect();
            if !visible.is_empty() {
                out.push_str("\n\nThere is ...");
                for name in visible {
                    out.push_str("\n   ");
                    out.push_str(name);
                }
            }
        }
        Ok(out)
    }
}
