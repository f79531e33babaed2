//! Integration tests for target disambiguation
//!
//! Ambiguous object text goes through a numbered menu; the scripted
//! console supplies the picks.

use fable_build::from_json;
use fable_foundation::Id;
use fable_play::Game;
use fable_script::{Choice, ScriptedConsole};

fn red_things_world() -> &'static str {
    r#"{
        "name": "Red Things",
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "r1": {"id": "r1", "type": "room", "name": "storeroom",
                   "description": "A storeroom",
                   "items": [{"id": "ball"}, {"id": "box"}]},
            "ball": {"id": "ball", "type": "entity", "name": "a red ball",
                     "description": "A red rubber ball", "active": 1,
                     "obtainable": 1, "hidden": 0},
            "box": {"id": "box", "type": "container", "name": "a red box",
                    "description": "A red cardboard box", "active": 1,
                    "obtainable": 1, "hidden": 0}
        }
    }"#
}

#[test]
fn an_ambiguous_get_offers_a_menu_and_takes_the_pick() {
    let world = from_json(red_things_world()).unwrap();
    let mut game = Game::new(world);
    let mut console = ScriptedConsole::new();
    console.push_answer("get red");
    console.push_choice(Choice::Picked(0));
    console.push_answer("quit");
    game.run(&mut console).unwrap();

    assert_eq!(
        console.menus(),
        [vec!["a red ball".to_string(), "a red box".to_string()]]
    );
    assert!(console.output().contains(&"You take a red ball".to_string()));
    assert!(game
        .world()
        .holds_directly(&Id::new("p1"), &Id::new("ball")));
}

#[test]
fn cancelling_the_menu_takes_nothing() {
    let world = from_json(red_things_world()).unwrap();
    let mut game = Game::new(world);
    let mut console = ScriptedConsole::new();
    console.push_answer("get red");
    console.push_choice(Choice::Cancelled);
    console.push_answer("quit");
    game.run(&mut console).unwrap();

    assert!(console.output().contains(&"Cancelled".to_string()));
    assert!(!game
        .world()
        .holds_directly(&Id::new("p1"), &Id::new("ball")));
    assert!(!game.world().holds_directly(&Id::new("p1"), &Id::new("box")));
}

#[test]
fn an_out_of_range_pick_is_not_a_choice() {
    let world = from_json(red_things_world()).unwrap();
    let mut game = Game::new(world);
    let mut console = ScriptedConsole::new();
    console.push_answer("get red");
    console.push_choice(Choice::Invalid);
    console.push_answer("quit");
    game.run(&mut console).unwrap();

    assert!(console
        .output()
        .contains(&"That is not a choice".to_string()));
}

#[test]
fn taking_one_red_thing_narrows_the_next_get() {
    let world = from_json(red_things_world()).unwrap();
    let mut game = Game::new(world);
    let mut console = ScriptedConsole::new();
    console.push_answer("get ball");
    console.push_answer("get red");
    console.push_answer("quit");
    game.run(&mut console).unwrap();

    // Only the box is left to take; no menu is needed.
    assert!(console.menus().is_empty());
    assert!(console.output().contains(&"You take a red box".to_string()));
    assert!(game.world().holds_directly(&Id::new("p1"), &Id::new("box")));
}
