//! Obstacle spawn helpers.

use glam::{IVec2, Vec2};
use std::collections::HashMap;

use crate::constants::TILE_SIZE;
use crate::entity::{Entity, EntityId, EntityKind, EntityStore};
use crate::sprite::{AnimationName, SpriteAnimation, SpriteAnimationFrame, SpriteData};
use crate::render::Rect;

/// Spawns one invisible 16x16 blocker.
pub fn spawn(store: &mut EntityStore, position: Vec2) -> EntityId {
    let frames = vec![SpriteAnimationFrame {
        rect: Rect::new(32.0, 32.0, 16.0, 16.0),
        duration: 1,
    }];
    let animations = HashMap::from([(AnimationName::IdleDown, SpriteAnimation::new(frames))]);

    store.spawn(|id| Entity {
        id,
        position,
        width: 16.0,
        height: 16.0,
        collidable: true,
        sprite: SpriteData::new(AnimationName::IdleDown, animations),
        kind: EntityKind::Obstacle,
    })
}

/// Rings a `size`-tile grid with blockers one tile outside it, so movers
/// cannot leave the canvas through the open grass at its edges.
pub fn spawn_border(store: &mut EntityStore, size: IVec2) {
    let tile = TILE_SIZE as f32;
    for x in -1..=size.x {
        spawn(store, Vec2::new(x as f32 * tile, -tile));
        spawn(store, Vec2::new(x as f32 * tile, size.y as f32 * tile));
    }
    for y in 0..size.y {
        spawn(store, Vec2::new(-tile, y as f32 * tile));
        spawn(store, Vec2::new(size.x as f32 * tile, y as f32 * tile));
    }
}
