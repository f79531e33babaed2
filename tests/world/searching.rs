//! Integration tests for search
//!
//! Tests the three collectors over a nested world: name matching, typed
//! collection, and scoped id lookup.

use fable_foundation::Id;
use fable_world::{search, Body, Entity, Gear, Inventory, Kind, TypeTag, World};

fn named(id: &str, name: &str, kind: Kind) -> Entity {
    let mut entity = Entity::new(Id::new(id), kind);
    entity.name = name.to_string();
    entity
}

/// A cellar holding a chest (with a silver key inside), the player (carrying
/// a silver coin, wearing a silver ring), and a guard (carrying a silver
/// dagger, wearing a silver badge).
fn nested_world() -> World {
    let mut world = World::new();
    world.add_entity(named("cellar", "dusty cellar", Kind::Room(Inventory::new())));
    world.add_entity(named("chest", "oak chest", Kind::Container(Inventory::new())));
    world.add_entity(named("key", "silver key", Kind::Thing));
    world.add_entity(named("hero", "you", Kind::Player(Body::default())));
    world.add_entity(named("coin", "silver coin", Kind::Thing));
    world.add_entity(named("ring", "silver ring", Kind::Equipment(Gear::new("finger"))));
    world.add_entity(named("guard", "silver guard", Kind::Npc(Body::default())));
    world.add_entity(named("dagger", "silver dagger", Kind::Thing));
    world.add_entity(named("badge", "silver badge", Kind::Equipment(Gear::new("chest"))));
    world.set_player(Id::new("hero"));

    world.place(&Id::new("chest"), &Id::new("cellar")).unwrap();
    world.place(&Id::new("key"), &Id::new("chest")).unwrap();
    world.place(&Id::new("hero"), &Id::new("cellar")).unwrap();
    world.place(&Id::new("coin"), &Id::new("hero")).unwrap();
    world.equip(&Id::new("hero"), &Id::new("ring")).unwrap();
    world.place(&Id::new("guard"), &Id::new("cellar")).unwrap();
    world.place(&Id::new("dagger"), &Id::new("guard")).unwrap();
    world.equip(&Id::new("guard"), &Id::new("badge")).unwrap();
    world
}

// =============================================================================
// Name matching
// =============================================================================

#[test]
fn matching_reaches_containers_and_the_player_but_not_npc_pockets() {
    let world = nested_world();
    let found = search::collect_matching(&world, "silver", &Id::new("cellar"));

    assert!(found.contains(&Id::new("key")));
    assert!(found.contains(&Id::new("coin")));
    assert!(found.contains(&Id::new("ring")));
    assert!(found.contains(&Id::new("guard")));
    assert!(found.contains(&Id::new("badge")));
    // The guard's carried dagger stays out of reach.
    assert!(!found.contains(&Id::new("dagger")));
}

#[test]
fn matching_never_returns_the_root() {
    let world = nested_world();
    let found = search::collect_matching(&world, "cellar", &Id::new("cellar"));
    assert!(found.is_empty());
}

#[test]
fn matching_ignores_case() {
    let world = nested_world();
    let upper = search::collect_matching(&world, "SILVER KEY", &Id::new("cellar"));
    let lower = search::collect_matching(&world, "silver key", &Id::new("cellar"));
    assert_eq!(upper, lower);
    assert_eq!(upper, vec![Id::new("key")]);
}

// =============================================================================
// Typed collection
// =============================================================================

#[test]
fn typed_collection_includes_the_root_and_npc_pockets() {
    let world = nested_world();

    let rooms = search::collect_typed(&world, &[TypeTag::Room], &Id::new("cellar"));
    assert_eq!(rooms, vec![Id::new("cellar")]);

    let things = search::collect_typed(&world, &[TypeTag::Thing], &Id::new("cellar"));
    assert!(things.contains(&Id::new("key")));
    assert!(things.contains(&Id::new("coin")));
    assert!(things.contains(&Id::new("dagger")));
}

#[test]
fn typed_collection_accepts_several_tags() {
    let world = nested_world();
    let characters = search::collect_typed(
        &world,
        &[TypeTag::Player, TypeTag::Npc],
        &Id::new("cellar"),
    );
    assert!(characters.contains(&Id::new("hero")));
    assert!(characters.contains(&Id::new("guard")));
    assert_eq!(characters.len(), 2);
}

// =============================================================================
// Scoped id lookup
// =============================================================================

#[test]
fn find_by_id_sees_only_the_subtree() {
    let world = nested_world();

    assert!(search::find_by_id(&world, &Id::new("key"), &Id::new("cellar")).is_some());
    assert!(search::find_by_id(&world, &Id::new("key"), &Id::new("chest")).is_some());
    assert!(search::find_by_id(&world, &Id::new("key"), &Id::new("hero")).is_none());
    assert!(search::find_by_id(&world, &Id::new("ring"), &Id::new("hero")).is_some());
}

#[test]
fn get_within_wraps_the_scoped_lookup() {
    let world = nested_world();
    assert!(world.get_within(&Id::new("hero"), &Id::new("coin")).is_some());
    assert!(world.get_within(&Id::new("hero"), &Id::new("dagger")).is_none());
}
