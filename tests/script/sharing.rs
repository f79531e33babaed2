//! Integration tests for shared event state
//!
//! Events live in the world table, so one event attached to several
//! entities or composites has a single completion state.

use fable_foundation::Id;
use fable_script::{execute, ScriptedConsole};
use fable_world::{Body, Entity, Event, EventKind, Inventory, Kind, World};

fn base_world() -> World {
    let mut world = World::new();
    world.add_entity(Entity::new(Id::new("room"), Kind::Room(Inventory::new())));
    world.add_entity(Entity::new(Id::new("hero"), Kind::Player(Body::default())));
    world.set_player(Id::new("hero"));
    world.place(&Id::new("hero"), &Id::new("room")).unwrap();
    world
}

fn run(world: &mut World, id: &str) -> String {
    let mut console = ScriptedConsole::new();
    execute(world, &mut console, &Id::new(id), &Id::new("hero")).unwrap()
}

#[test]
fn one_event_on_two_entities_is_spent_once() {
    let mut world = base_world();
    let mut event = Event::new(Id::new("secret"));
    event.only_once = true;
    event.message = Some("A hidden latch clicks.".to_string());
    world.add_event(event);

    let mut lever = Entity::new(Id::new("lever"), Kind::Thing);
    lever.add_trigger("use", Id::new("secret"));
    let mut panel = Entity::new(Id::new("panel"), Kind::Thing);
    panel.add_trigger("use", Id::new("secret"));
    world.add_entity(lever);
    world.add_entity(panel);

    // Whichever entity fires it first spends the shared state.
    let lever_event = world
        .entity(&Id::new("lever"))
        .unwrap()
        .trigger("use")
        .cloned()
        .unwrap();
    let panel_event = world
        .entity(&Id::new("panel"))
        .unwrap()
        .trigger("use")
        .cloned()
        .unwrap();
    assert_eq!(lever_event, panel_event);

    assert_eq!(run(&mut world, "secret"), "A hidden latch clicks.");
    assert_eq!(run(&mut world, "secret"), "");
}

#[test]
fn a_member_spent_inside_a_group_is_spent_everywhere() {
    let mut world = base_world();
    let mut once = Event::new(Id::new("flash"));
    once.only_once = true;
    once.message = Some("A bright flash.".to_string());
    world.add_event(once);
    let mut wrapper = Event::new(Id::new("wrapper"));
    wrapper.kind = EventKind::Group {
        members: vec![Id::new("flash")],
    };
    world.add_event(wrapper);

    assert_eq!(run(&mut world, "wrapper"), "A bright flash.");
    // Directly or through the group, it stays spent.
    assert_eq!(run(&mut world, "flash"), "");
    assert_eq!(run(&mut world, "wrapper"), "");
}

#[test]
fn subjects_are_registered_but_never_invoked() {
    let mut world = base_world();
    let mut observer = Event::new(Id::new("observer"));
    observer.only_once = true;
    observer.message = Some("Noticed.".to_string());
    world.add_event(observer);
    let mut watched = Event::new(Id::new("watched"));
    watched.message = Some("Something happens.".to_string());
    watched.register(Id::new("observer"));
    world.add_event(watched);

    assert_eq!(run(&mut world, "watched"), "Something happens.");
    // Registration alone does not run or spend the observer.
    assert!(!world.event(&Id::new("observer")).unwrap().is_done);
    assert_eq!(
        world.event(&Id::new("watched")).unwrap().subjects,
        vec![Id::new("observer")]
    );
}
