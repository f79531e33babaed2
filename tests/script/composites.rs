//! Integration tests for composite events
//!
//! Tests groups, ordered groups, conditionals, and interactions against a
//! small world, driving them through the public interpreter entry point.

use fable_foundation::Id;
use fable_script::{execute, Choice, ScriptedConsole};
use fable_world::{Body, Condition, Entity, Event, EventKind, Inventory, Kind, Opt, World};

fn base_world() -> World {
    let mut world = World::new();
    world.add_entity(Entity::new(Id::new("room"), Kind::Room(Inventory::new())));
    world.add_entity(Entity::new(Id::new("hero"), Kind::Player(Body::default())));
    world.set_player(Id::new("hero"));
    world.place(&Id::new("hero"), &Id::new("room")).unwrap();
    world
}

fn event(id: &str, once: bool, message: Option<&str>, kind: EventKind) -> Event {
    let mut event = Event::new(Id::new(id));
    event.only_once = once;
    event.message = message.map(ToString::to_string);
    event.kind = kind;
    event
}

fn run(world: &mut World, id: &str) -> String {
    let mut console = ScriptedConsole::new();
    execute(world, &mut console, &Id::new(id), &Id::new("hero")).unwrap()
}

// =============================================================================
// Ordered groups
// =============================================================================

#[test]
fn ordered_group_walks_its_members_in_sequence() {
    let mut world = base_world();
    world.add_event(event("a", true, Some("first"), EventKind::Plain));
    world.add_event(event("b", false, Some("second"), EventKind::Plain));
    world.add_event(event(
        "seq",
        false,
        None,
        EventKind::Ordered {
            members: vec![Id::new("a"), Id::new("b")],
            cursor: 0,
        },
    ));

    assert_eq!(run(&mut world, "seq"), "first");
    assert_eq!(run(&mut world, "seq"), "second");
    // The open-ended last member repeats forever.
    assert_eq!(run(&mut world, "seq"), "second");
    assert!(!world.event(&Id::new("seq")).unwrap().is_done);
}

#[test]
fn ordered_group_with_side_effects_applies_them_stepwise() {
    let mut world = base_world();
    world.add_entity(Entity::new(Id::new("lamp"), Kind::Thing));
    world.add_event(event(
        "lit",
        true,
        Some("The lamp flickers on."),
        EventKind::ToggleActive {
            target: Id::new("lamp"),
        },
    ));
    world.add_event(event("hum", false, Some("It hums."), EventKind::Plain));
    world.add_event(event(
        "seq",
        false,
        None,
        EventKind::Ordered {
            members: vec![Id::new("lit"), Id::new("hum")],
            cursor: 0,
        },
    ));

    assert_eq!(run(&mut world, "seq"), "The lamp flickers on.");
    assert!(!world.entity(&Id::new("lamp")).unwrap().states.active);
    assert_eq!(run(&mut world, "seq"), "It hums.");
    // The toggle ran exactly once.
    assert!(!world.entity(&Id::new("lamp")).unwrap().states.active);
}

// =============================================================================
// Conditionals
// =============================================================================

#[test]
fn conditional_branches_follow_the_world_state() {
    let mut world = base_world();
    world.add_entity(Entity::new(Id::new("key"), Kind::Thing));
    world.place(&Id::new("key"), &Id::new("room")).unwrap();
    world.add_event(event("open", false, Some("It opens."), EventKind::Plain));
    world.add_event(event("shut", false, Some("Locked."), EventKind::Plain));
    world.add_event(event(
        "door",
        false,
        None,
        EventKind::Conditional {
            condition: Condition::HasItem {
                item: Id::new("key"),
                container: None,
            },
            success: Id::new("open"),
            failure: Some(Id::new("shut")),
            passed: false,
        },
    ));

    assert_eq!(run(&mut world, "door"), "Locked.");
    world.place(&Id::new("key"), &Id::new("hero")).unwrap();
    assert_eq!(run(&mut world, "door"), "It opens.");
}

#[test]
fn once_only_conditional_retires_only_on_success() {
    let mut world = base_world();
    world.add_event(event("open", false, Some("It opens."), EventKind::Plain));
    world.add_event(event(
        "door",
        true,
        None,
        EventKind::Conditional {
            condition: Condition::IsActive {
                target: Id::new("latch"),
            },
            success: Id::new("open"),
            failure: None,
            passed: false,
        },
    ));
    world.add_entity(Entity::new(Id::new("latch"), Kind::Thing));
    world.entity_mut(&Id::new("latch")).unwrap().states.active = false;

    // Failing runs never spend the event.
    assert_eq!(run(&mut world, "door"), "");
    assert_eq!(run(&mut world, "door"), "");
    assert!(!world.event(&Id::new("door")).unwrap().is_done);

    world.entity_mut(&Id::new("latch")).unwrap().states.active = true;
    assert_eq!(run(&mut world, "door"), "It opens.");
    assert!(world.event(&Id::new("door")).unwrap().is_done);
    assert_eq!(run(&mut world, "door"), "");
}

#[test]
fn question_condition_reads_the_console() {
    let mut world = base_world();
    world.add_event(event("yes", false, Some("Correct."), EventKind::Plain));
    world.add_event(event("no", false, Some("Wrong."), EventKind::Plain));
    world.add_event(event(
        "riddle",
        false,
        None,
        EventKind::Conditional {
            condition: Condition::Question {
                question: "What walks on four legs in the morning?".to_string(),
                answer: "man".to_string(),
            },
            success: Id::new("yes"),
            failure: Some(Id::new("no")),
            passed: false,
        },
    ));

    let mut console = ScriptedConsole::new();
    console.push_answer("man");
    let out = execute(&mut world, &mut console, &Id::new("riddle"), &Id::new("hero")).unwrap();
    assert_eq!(out, "Correct.");

    let mut console = ScriptedConsole::new();
    console.push_answer("sphinx");
    let out = execute(&mut world, &mut console, &Id::new("riddle"), &Id::new("hero")).unwrap();
    assert_eq!(out, "Wrong.");
}

// =============================================================================
// Mixed nesting
// =============================================================================

#[test]
fn a_group_can_nest_a_conditional_and_a_move() {
    let mut world = base_world();
    let mut hall = Entity::new(Id::new("hall"), Kind::Room(Inventory::new()));
    hall.description = "A bright hall".to_string();
    world.add_entity(hall);
    world.add_event(event("praise", false, Some("Well done."), EventKind::Plain));
    world.add_event(event(
        "check",
        false,
        None,
        EventKind::Conditional {
            condition: Condition::HasItem {
                item: Id::new("badge"),
                container: None,
            },
            success: Id::new("praise"),
            failure: None,
            passed: false,
        },
    ));
    world.add_event(event(
        "walk",
        false,
        Some("You go in."),
        EventKind::Move {
            destination: Id::new("hall"),
        },
    ));
    world.add_event(event(
        "both",
        false,
        None,
        EventKind::Group {
            members: vec![Id::new("walk"), Id::new("check")],
        },
    ));
    world.add_entity(Entity::new(Id::new("badge"), Kind::Thing));
    world.place(&Id::new("badge"), &Id::new("hero")).unwrap();

    let out = run(&mut world, "both");
    assert_eq!(out, "You go in.\n\nA bright hall\nWell done.");
    assert!(world.holds_directly(&Id::new("hall"), &Id::new("hero")));
}

#[test]
fn interaction_menus_reflect_condition_gates() {
    let mut world = base_world();
    world.add_entity(Entity::new(Id::new("pass"), Kind::Thing));
    world.add_event(event("enter", false, Some("In you go."), EventKind::Plain));
    world.add_event(event("chat", false, Some("Nice day."), EventKind::Plain));
    world.add_event(event(
        "gatekeeper",
        false,
        None,
        EventKind::Interaction {
            options: vec![
                Opt {
                    text: "Show your pass".to_string(),
                    event: Id::new("enter"),
                    condition: Some(Condition::HasItem {
                        item: Id::new("pass"),
                        container: None,
                    }),
                    breakout: true,
                },
                Opt {
                    text: "Make small talk".to_string(),
                    event: Id::new("chat"),
                    condition: None,
                    breakout: false,
                },
            ],
            break_out: false,
            end_message: None,
        },
    ));

    // Without the pass only small talk is offered.
    let mut console = ScriptedConsole::new();
    console.push_choice(Choice::Cancelled);
    execute(&mut world, &mut console, &Id::new("gatekeeper"), &Id::new("hero")).unwrap();
    assert_eq!(console.menus()[0], vec!["Make small talk".to_string()]);

    world.place(&Id::new("pass"), &Id::new("hero")).unwrap();
    let mut console = ScriptedConsole::new();
    console.push_choice(Choice::Picked(0));
    execute(&mut world, &mut console, &Id::new("gatekeeper"), &Id::new("hero")).unwrap();
    assert_eq!(
        console.menus()[0],
        vec!["Show your pass".to_string(), "Make small talk".to_string()]
    );
    assert!(console.output().contains(&"In you go.".to_string()));
}
