//! The two-phase world builder.

use std::path::Path;

use fable_foundation::{Error, Id, Result};
use fable_world::{Body, Condition, Entity, Event, EventKind, Gear, Inventory, Kind, Opt, World};

use crate::blueprint::{
    Blueprint, EntityRecord, EventRecord, ObjectRef, OptionRecord, Record,
};

/// Reads, parses, and builds a world from a JSON file.
///
/// # Errors
///
/// I/O failures, malformed JSON, and blueprint errors all abort the build.
pub fn load(path: &Path) -> Result<World> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| Error::io(format!("{}: {err}", path.display())))?;
    from_json(&contents)
}

/// Parses and builds a world from JSON text.
///
/// # Errors
///
/// Malformed JSON and blueprint errors abort the build.
pub fn from_json(json: &str) -> Result<World> {
    let blueprint: Blueprint =
        serde_json::from_str(json).map_err(|err| Error::malformed(err.to_string()))?;
    build(&blueprint)
}

/// Builds a world from a blueprint.
///
/// Phase one creates every entity and event as a bare object and registers
/// it in the world tables; deferred records (conditions, options) are
/// skipped. Phase two wires every id reference, which at that point either
/// resolves or is a reportable blueprint error. No ordering between records
/// matters and no cycle detection is needed.
///
/// # Errors
///
/// Any blueprint error aborts: a missing player or required field, an
/// unresolved reference, a kind mismatch, or an id that disagrees with its
/// map key.
pub fn build(blueprint: &Blueprint) -> Result<World> {
    let mut world = World::new();

    create_objects(&mut world, blueprint)?;
    connect_objects(&mut world, blueprint)?;

    world.name = blueprint.name.clone();
    world.version = blueprint.version.clone();
    world.welcome = blueprint.welcome.clone();
    world.opening = blueprint.opening.clone();
    Ok(world)
}

fn create_objects(world: &mut World, blueprint: &Blueprint) -> Result<()> {
    for (key, record) in &blueprint.objects {
        if record.id() != key {
            return Err(Error::malformed(format!(
                "record {} filed under key {key}",
                record.id()
            )));
        }
        match record {
            Record::Entity(rec) => world.add_entity(create_entity(rec, Kind::Thing)),
            Record::Container(rec) => {
                world.add_entity(create_entity(rec, Kind::Container(Inventory::new())));
            }
            Record::Room(rec) => {
                world.add_entity(create_entity(rec, Kind::Room(Inventory::new())));
            }
            Record::Player(rec) => {
                if world.player().is_ok() {
                    return Err(Error::malformed(format!(
                        "second player record {}",
                        rec.id
                    )));
                }
                world.add_entity(create_entity(rec, Kind::Player(Body::default())));
                world.set_player(rec.id.clone());
            }
            Record::Npc(rec) => world.add_entity(create_entity(rec, Kind::Npc(Body::default()))),
            Record::Equipment(rec) => {
                let slot = rec
                    .slot
                    .as_ref()
                    .ok_or_else(|| Error::missing_field(rec.id.clone(), "slot"))?;
                let mut gear = Gear::new(slot.clone());
                gear.protects.clone_from(&rec.protects);
                gear.must_equip = rec.must_equip;
                world.add_entity(create_entity(rec, Kind::Equipment(gear)));
            }
            Record::Event(rec)
            | Record::Move(rec)
            | Record::Give(rec)
            | Record::Take(rec)
            | Record::ToggleActive(rec)
            | Record::ToggleObtainable(rec)
            | Record::ToggleHidden(rec)
            | Record::EndGame(rec)
            | Record::Group(rec)
            | Record::Ordered(rec)
            | Record::Conditional(rec)
            | Record::Interaction(rec) => {
                let mut event = Event::new(rec.id.clone());
                event.only_once = rec.once;
                event.message.clone_from(&rec.message);
                world.add_event(event);
            }
            Record::Option(_)
            | Record::ConditionalOption(_)
            | Record::Question(_)
            | Record::HasItem(_)
            | Record::Protected(_)
            | Record::IsActive(_) => {}
        }
    }
    if world.player().is_err() {
        return Err(Error::malformed("blueprint has no player"));
    }
    Ok(())
}

fn create_entity(rec: &EntityRecord, kind: Kind) -> Entity {
    let mut entity = Entity::new(rec.id.clone(), kind);
    entity.name.clone_from(&rec.name);
    entity.description.clone_from(&rec.description);
    // Rooms are always active and visible; the player likewise. Their
    // state flags come from the entity model, not the file.
    if !matches!(entity.kind, Kind::Room(_) | Kind::Player(_)) {
        entity.states.active = rec.active;
        entity.states.obtainable = rec.obtainable;
        entity.states.hidden = rec.hidden;
    }
    entity
}

fn connect_objects(world: &mut World, blueprint: &Blueprint) -> Result<()> {
    for record in blueprint.objects.values() {
        match record {
            Record::Entity(rec)
            | Record::Container(rec)
            | Record::Room(rec)
            | Record::Npc(rec)
            | Record::Equipment(rec) => connect_entity(world, rec)?,
            Record::Player(rec) => {
                connect_entity(world, rec)?;
                let start = rec
                    .start
                    .as_ref()
                    .ok_or_else(|| Error::missing_field(rec.id.clone(), "start"))?;
                resolve_entity(world, &rec.id, &start.id)?;
                world.place(&rec.id, &start.id)?;
            }
            Record::Event(rec) => connect_event(world, rec, EventKind::Plain)?,
            Record::Move(rec) => {
                let destination = required(rec, rec.destination.as_ref(), "destination")?;
                resolve_entity(world, &rec.id, &destination)?;
                connect_event(world, rec, EventKind::Move { destination })?;
            }
            Record::Give(rec) => {
                let item = required(rec, rec.item.as_ref(), "item")?;
                let owner = required(rec, rec.item_owner.as_ref(), "item_owner")?;
                resolve_entity(world, &rec.id, &item)?;
                resolve_entity(world, &rec.id, &owner)?;
                connect_event(world, rec, EventKind::Give { item, owner })?;
            }
            Record::Take(rec) => {
                let item = required(rec, rec.item.as_ref(), "item")?;
                let new_owner = required(rec, rec.new_owner.as_ref(), "new_owner")?;
                resolve_entity(world, &rec.id, &item)?;
                resolve_entity(world, &rec.id, &new_owner)?;
                connect_event(world, rec, EventKind::Take { item, new_owner })?;
            }
            Record::ToggleActive(rec) => {
                let target = required(rec, rec.target.as_ref(), "target")?;
                resolve_entity(world, &rec.id, &target)?;
                connect_event(world, rec, EventKind::ToggleActive { target })?;
            }
            Record::ToggleObtainable(rec) => {
                let target = required(rec, rec.target.as_ref(), "target")?;
                resolve_entity(world, &rec.id, &target)?;
                connect_event(world, rec, EventKind::ToggleObtainable { target })?;
            }
            Record::ToggleHidden(rec) => {
                let target = rec.target.as_ref().map(|r| r.id.clone());
                if let Some(target) = &target {
                    resolve_entity(world, &rec.id, target)?;
                }
                connect_event(world, rec, EventKind::ToggleHidden { target })?;
            }
            Record::EndGame(rec) => connect_event(world, rec, EventKind::EndGame)?,
            Record::Group(rec) => {
                let members = member_events(world, rec)?;
                connect_event(world, rec, EventKind::Group { members })?;
            }
            Record::Ordered(rec) => {
                let members = member_events(world, rec)?;
                // Each step retires when taken, so the group advances past
                // it; only the final member may repeat.
                for member in members.iter().rev().skip(1) {
                    world.event_mut(member)?.only_once = true;
                }
                connect_event(world, rec, EventKind::Ordered { members, cursor: 0 })?;
            }
            Record::Conditional(rec) => {
                let condition = required(rec, rec.condition.as_ref(), "condition")?;
                let condition = build_condition(world, blueprint, &rec.id, &condition)?;
                let success = required(rec, rec.success.as_ref(), "success")?;
                resolve_event(world, &rec.id, &success)?;
                let failure = rec.failure.as_ref().map(|r| r.id.clone());
                if let Some(failure) = &failure {
                    resolve_event(world, &rec.id, failure)?;
                }
                connect_event(
                    world,
                    rec,
                    EventKind::Conditional {
                        condition,
                        success,
                        failure,
                        passed: false,
                    },
                )?;
            }
            Record::Interaction(rec) => {
                let mut options = Vec::new();
                for reference in &rec.options {
                    options.push(build_option(world, blueprint, &rec.id, &reference.id)?);
                }
                connect_event(
                    world,
                    rec,
                    EventKind::Interaction {
                        options,
                        break_out: rec.breakout,
                        end_message: rec.end_message.clone(),
                    },
                )?;
            }
            Record::Option(_)
            | Record::ConditionalOption(_)
            | Record::Question(_)
            | Record::HasItem(_)
            | Record::Protected(_)
            | Record::IsActive(_) => {}
        }
    }
    Ok(())
}

/// Attaches verb-keyed events and inserts contained items, all by id
/// lookup against the now-populated tables.
fn connect_entity(world: &mut World, rec: &EntityRecord) -> Result<()> {
    for trigger in &rec.events {
        resolve_event(world, &rec.id, &trigger.id)?;
        let added = world
            .entity_mut(&rec.id)?
            .add_trigger(trigger.verb.clone(), trigger.id.clone());
        if !added {
            return Err(Error::malformed(format!(
                "entity {} attaches two events to verb {}",
                rec.id, trigger.verb
            )));
        }
    }
    for item in &rec.items {
        resolve_entity(world, &rec.id, &item.id)?;
        world.place(&item.id, &rec.id)?;
    }
    Ok(())
}

/// Applies the shared event wiring (subjects) and installs the kind.
fn connect_event(world: &mut World, rec: &EventRecord, kind: EventKind) -> Result<()> {
    let mut subjects = Vec::new();
    for subject in &rec.subjects {
        resolve_event(world, &rec.id, &subject.id)?;
        subjects.push(subject.id.clone());
    }
    let event = world.event_mut(&rec.id)?;
    for subject in subjects {
        event.register(subject);
    }
    event.kind = kind;
    Ok(())
}

fn member_events(world: &World, rec: &EventRecord) -> Result<Vec<Id>> {
    let mut members = Vec::new();
    for member in &rec.events {
        resolve_event(world, &rec.id, &member.id)?;
        if members.contains(&member.id) {
            return Err(Error::malformed(format!(
                "group {} lists member {} twice",
                rec.id, member.id
            )));
        }
        members.push(member.id.clone());
    }
    Ok(members)
}

/// Builds a condition from its deferred record, resolving every id it
/// references against the full blueprint map.
fn build_condition(
    world: &World,
    blueprint: &Blueprint,
    referrer: &Id,
    reference: &Id,
) -> Result<Condition> {
    let record = blueprint
        .objects
        .get(reference)
        .ok_or_else(|| Error::unresolved(referrer.clone(), reference.clone()))?;
    match record {
        Record::Question(rec) => Ok(Condition::Question {
            question: rec.question.clone(),
            answer: rec.answer.clone(),
        }),
        Record::HasItem(rec) => {
            resolve_entity(world, &rec.id, &rec.item.id)?;
            let container = rec.container.as_ref().map(|r| r.id.clone());
            if let Some(container) = &container {
                resolve_entity(world, &rec.id, container)?;
            }
            Ok(Condition::HasItem {
                item: rec.item.id.clone(),
                container,
            })
        }
        Record::Protected(rec) => Ok(Condition::Protected {
            effects: rec.effects.clone(),
        }),
        Record::IsActive(rec) => {
            resolve_entity(world, &rec.id, &rec.target.id)?;
            Ok(Condition::IsActive {
                target: rec.target.id.clone(),
            })
        }
        other => Err(Error::unknown_kind(reference.clone(), other.kind_name())),
    }
}

/// Builds an interaction option from its deferred record.
fn build_option(
    world: &World,
    blueprint: &Blueprint,
    referrer: &Id,
    reference: &Id,
) -> Result<Opt> {
    let record = blueprint
        .objects
        .get(reference)
        .ok_or_else(|| Error::unresolved(referrer.clone(), reference.clone()))?;
    match record {
        Record::Option(rec) => {
            resolve_event(world, &rec.id, &rec.event.id)?;
            Ok(Opt {
                text: rec.text.clone(),
                event: rec.event.id.clone(),
                condition: None,
                breakout: rec.breakout,
            })
        }
        Record::ConditionalOption(rec) => {
            resolve_event(world, &rec.id, &rec.event.id)?;
            let gate = option_condition(rec)?;
            let condition = build_condition(world, blueprint, &rec.id, &gate)?;
            Ok(Opt {
                text: rec.text.clone(),
                event: rec.event.id.clone(),
                condition: Some(condition),
                breakout: rec.breakout,
            })
        }
        other => Err(Error::unknown_kind(reference.clone(), other.kind_name())),
    }
}

fn option_condition(rec: &OptionRecord) -> Result<Id> {
    rec.condition
        .as_ref()
        .map(|r| r.id.clone())
        .ok_or_else(|| Error::missing_field(rec.id.clone(), "condition"))
}

fn required(rec: &EventRecord, reference: Option<&ObjectRef>, field: &str) -> Result<Id> {
    reference
        .map(|r| r.id.clone())
        .ok_or_else(|| Error::missing_field(rec.id.clone(), field))
}

fn resolve_entity(world: &World, referrer: &Id, reference: &Id) -> Result<()> {
    if world.has_entity(reference) {
        Ok(())
    } else {
        Err(Error::unresolved(referrer.clone(), reference.clone()))
    }
}

fn resolve_event(world: &World, referrer: &Id, reference: &Id) -> Result<()> {
    if world.has_event(reference) {
        Ok(())
    } else {
        Err(Error::unresolved(referrer.clone(), reference.clone()))
    }
}
