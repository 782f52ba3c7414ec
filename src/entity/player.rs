//! Player spawn helper.

use glam::Vec2;

use crate::entity::{Entity, EntityId, EntityKind, EntityStore};
use crate::sprite::character_sprite;

/// Spawns the player at `position` and returns its id.
pub fn spawn(store: &mut EntityStore, position: Vec2) -> EntityId {
    store.spawn(|id| Entity {
        id,
        position,
        width: 16.0,
        height: 16.0,
        collidable: true,
        sprite: character_sprite(),
        kind: EntityKind::Player,
    })
}
