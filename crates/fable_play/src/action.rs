//! Verb-specific actions.
//!
//! Each action takes the player and an optional resolved target, performs
//! its side effects through the world, and returns player-facing text.
//! Outcomes like "you don't have it" are ordinary results, never errors.
//! After an action's own work, an event the target attaches under the same
//! verb runs and its text is appended.

use fable_foundation::{Error, Id, Result, text};
use fable_script::{execute, Console};
use fable_world::{Placement, World};

/// The verb-specific actions a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick an item up.
    Get,
    /// Put a carried item down in the current room.
    Drop,
    /// Use an item, running its attached event.
    Use,
    /// Describe an entity, or the room with no target.
    Look,
    /// List carried items, or check for one.
    Inventory,
    /// Talk to something, running its attached event.
    Talk,
    /// Wear a carried piece of equipment.
    Equip,
    /// Take off a worn piece of equipment.
    Remove,
    /// A verb with no behavior yet.
    Null,
}

impl Action {
    /// Maps a parsed verb onto its action.
    #[must_use]
    pub fn for_verb(verb: &str) -> Self {
        match verb {
            "get" | "take" => Action::Get,
            "drop" => Action::Drop,
            "use" => Action::Use,
            "look" => Action::Look,
            "inventory" => Action::Inventory,
            "talk" => Action::Talk,
            "equip" => Action::Equip,
            "remove" => Action::Remove,
            _ => Action::Null,
        }
    }

    /// The verb under which a target's attached event fires.
    #[must_use]
    fn verb(self) -> Option<&'static str> {
        match self {
            Action::Get => Some("get"),
            Action::Drop => Some("drop"),
            Action::Use => Some("use"),
            Action::Look => Some("look"),
            Action::Talk => Some("talk"),
            Action::Equip => Some("equip"),
            Action::Remove => Some("remove"),
            Action::Inventory | Action::Null => None,
        }
    }

    /// Narrows collected candidates before disambiguation.
    ///
    /// Get never offers the player themselves or anything they already
    /// hold; every other action takes the candidates as collected.
    #[must_use]
    pub fn filter_candidates(self, world: &World, player: &Id, candidates: Vec<Id>) -> Vec<Id> {
        match self {
            Action::Get => candidates
                .into_iter()
                .filter(|id| id != player && world.get_within(player, id).is_none())
                .collect(),
            _ => candidates,
        }
    }

    /// Performs the action and returns the result text.
    ///
    /// # Errors
    ///
    /// Only engine-level failures propagate; every gameplay outcome is a
    /// returned string.
    pub fn perform(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        match self {
            Action::Get => self.get(world, io, player, target),
            Action::Drop => self.drop(world, io, player, target),
            Action::Use => self.use_item(world, io, player, target),
            Action::Look => self.look(world, io, player, target),
            Action::Inventory => inventory(world, player, target),
            Action::Talk => self.talk(world, io, player, target),
            Action::Equip => self.equip(world, io, player, target),
            Action::Remove => self.remove(world, io, player, target),
            Action::Null => Ok("Nothing happens".to_string()),
        }
    }

    fn get(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("Get what?".to_string());
        };
        if world.get_within(player, target).is_some() {
            return Ok("You already have it".to_string());
        }
        if !world.entity(target)?.states.obtainable {
            return Ok("You can't take that".to_string());
        }
        world.place(target, player)?;
        let taken = format!("You take {}", world.entity(target)?.name);
        let hook = self.run_trigger(world, io, player, target)?.unwrap_or_default();
        Ok(text::join_lines([taken, hook]))
    }

    fn drop(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("Drop what?".to_string());
        };
        if !world.holds_directly(player, target) {
            return Ok("You don't have it".to_string());
        }
        let room = room_of(world, player)?;
        world.place(target, &room)?;
        let dropped = format!("You drop {}", world.entity(target)?.name);
        let hook = self.run_trigger(world, io, player, target)?.unwrap_or_default();
        Ok(text::join_lines([dropped, hook]))
    }

    fn use_item(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("Use what?".to_string());
        };
        if !world.entity(target)?.has_trigger("use") {
            return Ok("You can't use that".to_string());
        }
        let used = format!("You use {}", world.entity(target)?.name);
        let hook = self.run_trigger(world, io, player, target)?.unwrap_or_default();
        Ok(text::join_lines([used, hook]))
    }

    fn look(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            let room = room_of(world, player)?;
            return world.describe(&room);
        };
        let seen = format!("You see {}", world.describe(target)?);
        let hook = self.run_trigger(world, io, player, target)?.unwrap_or_default();
        Ok(text::join_lines([seen, hook]))
    }

    fn talk(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("To whom?".to_string());
        };
        match self.run_trigger(world, io, player, target)? {
            Some(result) => Ok(result),
            None => Ok("That doesn't talk".to_string()),
        }
    }

    fn equip(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("Equip what?".to_string());
        };
        if world.get_within(player, target).is_none() {
            return Ok("You don't have it".to_string());
        }
        if world.entity(target)?.gear().is_none() {
            return Ok("You can't equip that".to_string());
        }
        let displaced = world.equip(player, target)?;
        let mut parts = vec![format!("You equip {}", world.entity(target)?.name)];
        if let Some(old) = displaced {
            // The displaced piece goes back into the pack.
            world.place(&old, player)?;
            parts.push(format!("You stow {}", world.entity(&old)?.name));
        }
        if let Some(hook) = self.run_trigger(world, io, player, target)? {
            parts.push(hook);
        }
        Ok(text::join_lines(parts))
    }

    fn remove(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: Option<&Id>,
    ) -> Result<String> {
        let Some(target) = target else {
            return Ok("Remove what?".to_string());
        };
        let worn_by_player = matches!(
            &world.entity(target)?.placement,
            Placement::Worn { by, .. } if by == player
        );
        if !worn_by_player {
            return Ok("You are not wearing that".to_string());
        }
        world.place(target, player)?;
        let removed = format!("You remove {}", world.entity(target)?.name);
        let hook = self.run_trigger(world, io, player, target)?.unwrap_or_default();
        Ok(text::join_lines([removed, hook]))
    }

    /// Runs the event the target attaches under this action's verb, if
    /// both exist.
    fn run_trigger(
        self,
        world: &mut World,
        io: &mut dyn Console,
        player: &Id,
        target: &Id,
    ) -> Result<Option<String>> {
        let Some(verb) = self.verb() else {
            return Ok(None);
        };
        let Some(event) = world.entity(target)?.trigger(verb).cloned() else {
            return Ok(None);
        };
        execute(world, io, &event, player).map(Some)
    }
}

/// Lists the pack, or answers whether one item is in it.
fn inventory(world: &World, player: &Id, target: Option<&Id>) -> Result<String> {
    if let Some(target) = target {
        if world.holds_directly(player, target) {
            return Ok("You have that".to_string());
        }
        return Ok("You don't have that".to_string());
    }
    let mut lines = vec!["You are carrying ...".to_string()];
    let items: Vec<Id> = world
        .entity(player)?
        .inventory()
        .map(|inventory| inventory.iter().cloned().collect())
        .unwrap_or_default();
    if items.is_empty() {
        lines.push("Nothing".to_string());
    } else {
        for item in items {
            lines.push(world.describe(&item)?);
        }
    }
    Ok(lines.join("\n"))
}

fn room_of(world: &World, player: &Id) -> Result<Id> {
    match &world.entity(player)?.placement {
        Placement::In(room) => Ok(room.clone()),
        _ => Err(Error::internal("player is not in a room")),
    }
}
