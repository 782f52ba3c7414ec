//! Pet spawn helper and state accessors.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::mechanics;
use crate::entity::{Entity, EntityId, EntityKind, EntityStore};
use crate::sprite::{character_sprite, FoodKind};

/// Spawns the pet one tile above `player_position` with a full happiness
/// bar and the given wants queue.
pub fn spawn(store: &mut EntityStore, player_position: Vec2, wants: SmallVec<[FoodKind; 3]>) -> EntityId {
    store.spawn(|id| Entity {
        id,
        position: player_position - Vec2::new(0.0, 16.0),
        width: 16.0,
        height: 16.0,
        collidable: false,
        sprite: character_sprite(),
        kind: EntityKind::Pet {
            wants,
            hp: mechanics::PET_MAX_HP,
            max_hp: mechanics::PET_MAX_HP,
        },
    })
}

impl Entity {
    /// The pet's wants queue, if this entity is the pet.
    pub fn wants(&self) -> Option<&SmallVec<[FoodKind; 3]>> {
        match &self.kind {
            EntityKind::Pet { wants, .. } => Some(wants),
            _ => None,
        }
    }

    /// The pet's current and maximum happiness.
    pub fn happiness(&self) -> Option<(f32, f32)> {
        match &self.kind {
            EntityKind::Pet { hp, max_hp, .. } => Some((*hp, *max_hp)),
            _ => None,
        }
    }
}
