//! Integration tests for blueprint failures
//!
//! Every broken blueprint should fail the whole build with an error that
//! names the offending record.

use fable_build::from_json;
use fable_foundation::{ErrorKind, Id};

#[test]
fn json_syntax_errors_are_malformed() {
    let err = from_json("{not json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[test]
fn a_world_without_a_player_does_not_build() {
    let json = r#"{
        "objects": {
            "r1": {"id": "r1", "type": "room", "name": "room", "description": ""}
        }
    }"#;
    assert!(from_json(json).is_err());
}

#[test]
fn a_player_without_a_start_room_does_not_build() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you", "description": ""},
            "r1": {"id": "r1", "type": "room", "name": "room", "description": ""}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    let ErrorKind::MissingField { id, field } = err.kind else {
        panic!("expected a missing field");
    };
    assert_eq!(id, Id::new("p1"));
    assert_eq!(field, "start");
}

#[test]
fn dangling_references_name_referrer_and_target() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "r1": {"id": "r1", "type": "room", "name": "room", "description": ""},
            "e1": {"id": "e1", "type": "move", "once": 0,
                   "destination": {"id": "nowhere"}}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    let ErrorKind::UnresolvedReference { id, reference } = err.kind else {
        panic!("expected an unresolved reference");
    };
    assert_eq!(id, Id::new("e1"));
    assert_eq!(reference, Id::new("nowhere"));
}

#[test]
fn a_key_that_disagrees_with_its_record_id_is_rejected() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "wrong": {"id": "r1", "type": "room", "name": "room", "description": ""}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[test]
fn two_events_on_one_verb_are_rejected() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "r1": {"id": "r1", "type": "room", "name": "room",
                   "description": "", "items": [{"id": "i1"}]},
            "i1": {"id": "i1", "type": "entity", "name": "widget",
                   "description": "", "active": 1, "obtainable": 1, "hidden": 0,
                   "events": [{"id": "e1", "verb": "use"}, {"id": "e2", "verb": "use"}]},
            "e1": {"id": "e1", "type": "event", "once": 0},
            "e2": {"id": "e2", "type": "event", "once": 0}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[test]
fn an_unknown_record_type_is_rejected() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "r1": {"id": "r1", "type": "room", "name": "room", "description": ""},
            "x": {"id": "x", "type": "teleporter"}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[test]
fn an_interaction_option_must_be_an_option_record() {
    let json = r#"{
        "objects": {
            "p1": {"id": "p1", "type": "player", "name": "you",
                   "description": "", "start": {"id": "r1"}},
            "r1": {"id": "r1", "type": "room", "name": "room", "description": ""},
            "e1": {"id": "e1", "type": "event", "once": 0},
            "talk": {"id": "talk", "type": "interaction", "once": 0,
                     "options": [{"id": "e1"}]}
        }
    }"#;
    let err = from_json(json).unwrap_err();
    let ErrorKind::UnknownKind { id, kind } = err.kind else {
        panic!("expected a kind mismatch");
    };
    assert_eq!(id, Id::new("e1"));
    assert_eq!(kind, "event");
}
