//! Condition predicates: boolean tests over entities.

use fable_foundation::Id;
use fable_world::{Condition, World};

use crate::io::Console;

/// Evaluates a condition against a subject entity.
///
/// An id that fails to resolve makes the predicate false rather than an
/// error; the builder validates every configured id, so a miss here means
/// the subject simply does not qualify.
pub fn test(world: &World, io: &mut dyn Console, condition: &Condition, subject: &Id) -> bool {
    match condition {
        Condition::Question { question, answer } => {
            io.line(question);
            let reply = io.prompt("Answer: ");
            reply.trim() == answer
        }
        Condition::HasItem { item, container } => {
            let root = container.as_ref().unwrap_or(subject);
            world.get_within(root, item).is_some()
        }
        Condition::Protected { effects } => protected(world, subject, effects),
        Condition::IsActive { target } => world
            .entity(target)
            .is_ok_and(|entity| entity.states.active),
    }
}

/// Every listed effect must be covered by a worn item, or by a carried
/// item that does not insist on being worn. One uncovered effect fails
/// the whole predicate.
fn protected(world: &World, subject: &Id, effects: &[String]) -> bool {
    let Some(body) = world.entity(subject).ok().and_then(|entity| entity.body().cloned()) else {
        return false;
    };
    effects.iter().all(|effect| {
        let worn_covers = body
            .equipped
            .iter()
            .filter_map(|(_, id)| world.entity(id).ok())
            .filter_map(fable_world::Entity::gear)
            .any(|gear| gear.protects.iter().any(|tag| tag == effect));
        let carried_covers = body
            .inventory
            .iter()
            .filter_map(|id| world.entity(id).ok())
            .filter_map(fable_world::Entity::gear)
            .any(|gear| !gear.must_equip && gear.protects.iter().any(|tag| tag == effect));
        worn_covers || carried_covers
    })
}
