//! Environment prop spawn helper.

use glam::Vec2;
use std::collections::HashMap;

use crate::entity::{Entity, EntityId, EntityKind, EntityStore};
use crate::map::TileKind;
use crate::sprite::{AnimationName, SpriteAnimation, SpriteAnimationFrame, SpriteData};
use crate::render::Rect;

/// Spawns a terrain prop as a standalone entity.
///
/// Solidity follows the tile table, so a spawned tree blocks movement the
/// same way a tree baked into the grid does.
pub fn spawn(store: &mut EntityStore, position: Vec2, kind: TileKind) -> EntityId {
    let info = kind.info();
    let frames = (0..info.frames)
        .map(|i| SpriteAnimationFrame {
            rect: Rect::new((info.atlas_col * 16) as f32, (i * 16) as f32, 16.0, 16.0),
            duration: info.rate.max(1),
        })
        .collect();
    let animations = HashMap::from([(AnimationName::IdleDown, SpriteAnimation::new(frames))]);

    store.spawn(|id| Entity {
        id,
        position,
        width: 16.0,
        height: 16.0,
        collidable: info.solid,
        sprite: SpriteData::new(AnimationName::IdleDown, animations),
        kind: EntityKind::Environment { kind },
    })
}
