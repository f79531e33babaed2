//! Turning parsed input into one performed action.

use fable_foundation::{Id, Result};
use fable_script::{Choice, Console};
use fable_world::{search, Placement, World};

use crate::action::Action;
use crate::parse::ParsedInput;

/// Resolves parsed input against the world and performs the action.
///
/// With no object text the action runs untargeted. Otherwise candidates
/// are collected from the player's current room, narrowed by the action,
/// and disambiguated: zero matches is a polite refusal, one match runs
/// directly, several go to a menu. Every one of those outcomes is a
/// returned string; the turn loop never sees them as failures.
///
/// # Errors
///
/// Only engine-level failures (broken world state) propagate.
pub fn resolve(world: &mut World, io: &mut dyn Console, parsed: &ParsedInput) -> Result<String> {
    let player = world.player()?.clone();
    let action = Action::for_verb(&parsed.verb);

    let object = parsed.object.trim();
    if object.is_empty() {
        return action.perform(world, io, &player, None);
    }

    let room = current_room(world, &player)?;
    let candidates = search::collect_matching(world, object, &room);
    let candidates = action.filter_candidates(world, &player, candidates);

    match candidates.as_slice() {
        [] => Ok(format!("There is no {object}")),
        [only] => {
            let only = only.clone();
            action.perform(world, io, &player, Some(&only))
        }
        many => {
            let labels: Vec<String> = many
                .iter()
                .map(|id| world.entity(id).map(|entity| entity.name.clone()))
                .collect::<Result<_>>()?;
            match io.menu(&labels) {
                Choice::Picked(index) if index < many.len() => {
                    let chosen = many[index].clone();
                    action.perform(world, io, &player, Some(&chosen))
                }
                Choice::Picked(_) | Choice::Invalid => Ok("That is not a choice".to_string()),
                Choice::Cancelled => Ok("Cancelled".to_string()),
            }
        }
    }
}

fn current_room(world: &World, player: &Id) -> Result<Id> {
    match &world.entity(player)?.placement {
        Placement::In(room) => Ok(room.clone()),
        _ => Err(fable_foundation::Error::internal("player is not in a room")),
    }
}
