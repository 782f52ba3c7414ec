//! The id-addressed entity store and per-kind spawn helpers.

pub mod environment;
pub mod food;
pub mod obstacle;
pub mod pet;
pub mod player;

use std::collections::HashMap;

use glam::Vec2;
use smallvec::SmallVec;

use crate::map::TileKind;
use crate::render::Rect;
use crate::sprite::{FoodKind, SpriteData};

/// Process-lifetime unique entity handle.
pub type EntityId = u32;

/// Per-kind state. Everything positional lives on [`Entity`] itself.
#[derive(Debug, Clone)]
pub enum EntityKind {
    Player,
    Pet {
        wants: SmallVec<[FoodKind; 3]>,
        hp: f32,
        max_hp: f32,
    },
    Food {
        kind: FoodKind,
        visible: bool,
    },
    /// A decorative solid placed on top of the terrain grid.
    Environment {
        kind: TileKind,
    },
    /// An invisible collidable block; fences off the canvas edges.
    Obstacle,
}

/// One live game object.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub collidable: bool,
    pub sprite: SpriteData,
    pub kind: EntityKind,
}

impl Entity {
    /// The entity's pixel-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}

/// All live entities, addressed by id.
///
/// Ids are handed out from a counter that survives [`EntityStore::clear`],
/// so a handle from a previous round can never alias a fresh entity.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: HashMap<EntityId, Entity>,
    next_id: EntityId,
}

impl EntityStore {
    /// Reserves an id, builds the entity with it, and inserts it.
    pub fn spawn(&mut self, build: impl FnOnce(EntityId) -> Entity) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(id, build(id));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Removes every entity without resetting the id counter.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::character_sprite;

    fn dummy(id: EntityId) -> Entity {
        Entity {
            id,
            position: Vec2::ZERO,
            width: 16.0,
            height: 16.0,
            collidable: false,
            sprite: character_sprite(),
            kind: EntityKind::Player,
        }
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut store = EntityStore::default();
        let first = store.spawn(dummy);
        let second = store.spawn(dummy);
        assert_ne!(first, second);

        store.clear();
        assert!(store.is_empty());

        let third = store.spawn(dummy);
        assert_ne!(third, first);
        assert_ne!(third, second);
    }

    #[test]
    fn test_remove_then_get_is_none() {
        let mut store = EntityStore::default();
        let id = store.spawn(dummy);
        assert!(store.get(id).is_some());
        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.remove(id).is_none());
    }
}
