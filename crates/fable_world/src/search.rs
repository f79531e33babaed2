//! Read-only traversals over the containment graph.
//!
//! Each collector walks the subtree rooted at some container, dispatching on
//! the runtime kind of each entity it visits. The kind set is closed, so the
//! dispatch is a plain match rather than anything dynamic. Matching is
//! case-insensitive substring search throughout.

use fable_foundation::{Id, text};

use crate::entity::{Kind, TypeTag};
use crate::world::World;

/// Collects every entity under `root` whose name contains `needle`.
///
/// The root itself is never a result. Containers and the player's
/// inventory and equipped items are descended; an npc is matched as a
/// unit, with its equipped items surfaced but its carried items kept
/// out of reach.
#[must_use]
pub fn collect_matching(world: &World, needle: &str, root: &Id) -> Vec<Id> {
    let mut results = Vec::new();
    walk_matching(world, needle, root, &mut results);
    results.retain(|id| id != root);
    results
}

fn walk_matching(world: &World, needle: &str, id: &Id, results: &mut Vec<Id>) {
    let Ok(entity) = world.entity(id) else {
        return;
    };
    if text::matches_search(&entity.name, needle) {
        results.push(id.clone());
    }
    match &entity.kind {
        Kind::Room(inventory) | Kind::Container(inventory) => {
            for item in inventory {
                walk_matching(world, needle, item, results);
            }
        }
        Kind::Player(body) => {
            for item in &body.inventory {
                walk_matching(world, needle, item, results);
            }
            for (_, item) in body.equipped.iter() {
                walk_matching(world, needle, item, results);
            }
        }
        Kind::Npc(body) => {
            for (_, item) in body.equipped.iter() {
                walk_matching(world, needle, item, results);
            }
        }
        Kind::Thing | Kind::Equipment(_) => {}
    }
}

/// Collects every entity under (and including) `root` whose type tag is
/// in `tags`. Unlike text search, npc inventories are descended.
#[must_use]
pub fn collect_typed(world: &World, tags: &[TypeTag], root: &Id) -> Vec<Id> {
    let mut results = Vec::new();
    walk_typed(world, tags, root, &mut results);
    results
}

fn walk_typed(world: &World, tags: &[TypeTag], id: &Id, results: &mut Vec<Id>) {
    let Ok(entity) = world.entity(id) else {
        return;
    };
    if tags.contains(&entity.type_tag()) {
        results.push(id.clone());
    }
    match &entity.kind {
        Kind::Room(inventory) | Kind::Container(inventory) => {
            for item in inventory {
                walk_typed(world, tags, item, results);
            }
        }
        Kind::Player(body) | Kind::Npc(body) => {
            for item in &body.inventory {
                walk_typed(world, tags, item, results);
            }
            for (_, item) in body.equipped.iter() {
                walk_typed(world, tags, item, results);
            }
        }
        Kind::Thing | Kind::Equipment(_) => {}
    }
}

/// Finds an entity by id in the subtree rooted at (and including)
/// `root`, short-circuiting on the first hit.
#[must_use]
pub fn find_by_id(world: &World, wanted: &Id, root: &Id) -> Option<Id> {
    let entity = world.entity(root).ok()?;
    if root == wanted {
        return Some(root.clone());
    }
    let children: Vec<Id> = match &entity.kind {
        Kind::Room(inventory) | Kind::Container(inventory) => inventory.iter().cloned().collect(),
        Kind::Player(body) | Kind::Npc(body) => body
            .inventory
            .iter()
            .cloned()
            .chain(body.equipped.iter().map(|(_, id)| id.clone()))
            .collect(),
        Kind::Thing | Kind::Equipment(_) => Vec::new(),
    };
    for child in children {
        if let Some(found) = find_by_id(world, wanted, &child) {
            return Some(found);
        }
    }
    None
}
