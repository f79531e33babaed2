//! The event interpreter.
//!
//! Events are records in the world's event table; running one means
//! snapshotting its wiring, performing the kind-specific side effects
//! against the world, and writing completion state back. Composites run
//! their members by recursing through the table, so an event shared by
//! several owners has exactly one completion state no matter who runs it.

use fable_foundation::{Id, Result, text};
use fable_world::{EventKind, Opt, World};

use crate::condition;
use crate::io::{Choice, Console};

/// Executes an event against an affected entity and returns the result
/// text.
///
/// A finished once-only event yields an empty string. Plain completion is
/// "once-only events retire after a run"; ordered groups and conditionals
/// carry their own completion rules.
///
/// # Errors
///
/// An unknown event id, or an ownership-invariant violation during a move,
/// is fatal: both indicate a broken blueprint, not a recoverable play
/// outcome.
pub fn execute(world: &mut World, io: &mut dyn Console, event: &Id, affected: &Id) -> Result<String> {
    let snapshot = world.event(event)?.clone();
    if snapshot.is_done {
        return Ok(String::new());
    }
    let base = snapshot.message.clone().unwrap_or_default();

    match snapshot.kind {
        EventKind::Plain => {
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::Move { destination } => {
            world.place(affected, &destination)?;
            let scene = world.describe(&destination)?;
            let hook = world.entity(&destination)?.trigger("enter").cloned();
            let hook_text = match hook {
                Some(hook) => execute(world, io, &hook, affected)?,
                None => String::new(),
            };
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(text::join_blocks([base, scene, hook_text]))
        }
        EventKind::Give { item, owner } => {
            if world.holds_directly(&owner, &item) {
                world.place(&item, affected)?;
            }
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::Take { item, new_owner } => {
            if world.holds_directly(affected, &item) {
                world.place(&item, &new_owner)?;
            }
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::ToggleActive { target } => {
            world.entity_mut(&target)?.states.toggle_active();
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::ToggleObtainable { target } => {
            world.entity_mut(&target)?.states.toggle_obtainable();
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::ToggleHidden { target } => {
            let target = target.unwrap_or_else(|| affected.clone());
            world.entity_mut(&target)?.states.toggle_hidden();
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::EndGame => {
            world.entity_mut(affected)?.states.hidden = true;
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(base)
        }
        EventKind::Group { members } => {
            let mut parts = vec![base];
            for member in &members {
                parts.push(execute(world, io, member, affected)?);
            }
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(text::join_lines(parts))
        }
        EventKind::Ordered { members, cursor } => {
            let Some(current) = members.get(cursor).cloned() else {
                retire_if_once(world, event, snapshot.only_once)?;
                return Ok(base);
            };
            let result = execute(world, io, &current, affected)?;

            let mut done = false;
            let mut next = cursor;
            if cursor + 1 < members.len() {
                next = cursor + 1;
            } else if snapshot.only_once || world.event(&current)?.is_done {
                done = true;
            }
            let stored = world.event_mut(event)?;
            if done {
                stored.is_done = true;
            }
            if let EventKind::Ordered { cursor, .. } = &mut stored.kind {
                *cursor = next;
            }
            Ok(text::join_lines([base, result]))
        }
        EventKind::Conditional {
            condition,
            success,
            failure,
            passed: _,
        } => {
            let succeeded = condition::test(world, io, &condition, affected);
            let result = if succeeded {
                execute(world, io, &success, affected)?
            } else if let Some(failure) = &failure {
                execute(world, io, failure, affected)?
            } else {
                String::new()
            };
            let stored = world.event_mut(event)?;
            if let EventKind::Conditional { passed, .. } = &mut stored.kind {
                *passed = succeeded;
            }
            if succeeded && snapshot.only_once {
                stored.is_done = true;
            }
            Ok(text::join_lines([base, result]))
        }
        EventKind::Interaction {
            options,
            break_out,
            end_message,
        } => {
            // The opening line prints before the loop; the interaction's
            // returned result is always empty.
            if !base.is_empty() {
                io.line(&base);
            }
            interact(world, io, affected, &options, break_out, end_message.as_deref())?;
            retire_if_once(world, event, snapshot.only_once)?;
            Ok(String::new())
        }
    }
}

/// Runs the menu loop of an interaction. All output goes through the
/// console; the interaction's own result text is always empty.
fn interact(
    world: &mut World,
    io: &mut dyn Console,
    affected: &Id,
    options: &[Opt],
    break_out: bool,
    end_message: Option<&str>,
) -> Result<()> {
    loop {
        let visible = visible_options(world, io, affected, options);
        let labels: Vec<String> = visible.iter().map(|opt| opt.text.clone()).collect();

        match io.menu(&labels) {
            Choice::Cancelled => {
                if end_message.is_none() {
                    io.line("Cancelled");
                }
                break;
            }
            Choice::Invalid => {
                io.line("Not a valid choice!");
            }
            Choice::Picked(index) => {
                let Some(chosen) = visible.get(index) else {
                    io.line("Not a valid choice!");
                    continue;
                };
                let result = execute(world, io, &chosen.event, affected)?;
                io.line(&result);
                if break_out || chosen.breakout {
                    break;
                }
            }
        }
    }
    if let Some(end) = end_message {
        if !end.trim().is_empty() {
            io.line(end);
        }
    }
    Ok(())
}

/// An option is offered while its event is still live and its gate, if
/// any, passes. Visibility is re-evaluated every pass around the loop.
fn visible_options(
    world: &World,
    io: &mut dyn Console,
    affected: &Id,
    options: &[Opt],
) -> Vec<Opt> {
    let mut visible = Vec::new();
    for opt in options {
        let live = world.event(&opt.event).is_ok_and(|event| !event.is_done);
        if !live {
            continue;
        }
        let gated_out = opt
            .condition
            .as_ref()
            .is_some_and(|gate| !condition::test(world, io, gate, affected));
        if gated_out {
            continue;
        }
        visible.push(opt.clone());
    }
    visible
}

fn retire_if_once(world: &mut World, event: &Id, only_once: bool) -> Result<()> {
    if only_once {
        world.event_mut(event)?.is_done = true;
    }
    Ok(())
}
