//! Food spawn helper.

use glam::Vec2;

use crate::entity::{Entity, EntityId, EntityKind, EntityStore};
use crate::sprite::{food_sprite, FoodKind};

/// Spawns a food pickup at `position`. Hidden foods exist in the store but
/// are neither drawn nor edible until revealed.
pub fn spawn(store: &mut EntityStore, position: Vec2, kind: FoodKind, visible: bool) -> EntityId {
    store.spawn(|id| Entity {
        id,
        position,
        width: 16.0,
        height: 16.0,
        collidable: false,
        sprite: food_sprite(kind),
        kind: EntityKind::Food { kind, visible },
    })
}
