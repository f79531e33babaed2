//! Inventories and worn-equipment slots.

use std::collections::BTreeMap;

use fable_foundation::Id;

/// An insertion-ordered collection of contained entity ids.
///
/// Order matters for listing room contents, so ids are kept in the order
/// they were added. Inventories are small; membership checks are linear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Id>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if an item with the given id is present.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.items.iter().any(|item| item == id)
    }

    /// Adds an id at the end of the inventory.
    ///
    /// Returns false (and does not mutate) if the id is already present.
    pub fn add(&mut self, id: Id) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Removes and returns the id if present.
    pub fn remove(&mut self, id: &Id) -> Option<Id> {
        let index = self.items.iter().position(|item| item == id)?;
        Some(self.items.remove(index))
    }

    /// Iterates the contained ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Id;
    type IntoIter = std::slice::Iter<'a, Id>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Worn equipment, keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equipped {
    slots: BTreeMap<String, Id>,
}

impl Equipped {
    /// Creates an empty equipment set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is worn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the id worn in the given slot, if any.
    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&Id> {
        self.slots.get(slot)
    }

    /// Puts an id into a slot, returning the previous occupant if any.
    ///
    /// The caller owns the bookkeeping on both entities (worn flags,
    /// placement); `World::equip` is the only intended caller.
    pub fn set(&mut self, slot: impl Into<String>, id: Id) -> Option<Id> {
        self.slots.insert(slot.into(), id)
    }

    /// Clears a slot, returning its occupant if any.
    pub fn clear(&mut self, slot: &str) -> Option<Id> {
        self.slots.remove(slot)
    }

    /// Returns the slot in which the given id is worn, if any.
    #[must_use]
    pub fn slot_of(&self, id: &Id) -> Option<&str> {
        self.slots
            .iter()
            .find(|(_, worn)| *worn == id)
            .map(|(slot, _)| slot.as_str())
    }

    /// Iterates (slot, id) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Id)> {
        self.slots.iter().map(|(slot, id)| (slot.as_str(), id))
    }
}
