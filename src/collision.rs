//! Entity-to-entity collision queries.
//!
//! Terrain collision lives on the tilemap (`predict_collision`); this
//! module answers which *entity* is flush against another and from which
//! side, so movement can be rejected per direction.

use crate::entity::{EntityId, EntityStore};
use crate::map::Direction;
use crate::render::Rect;

/// The side of `bounds` that a target rect is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl CollisionDirection {
    /// Whether contact on this side rejects a step in `direction`.
    ///
    /// Sides are named from the blocker's perspective: contact on its top
    /// edge means the mover is above it, so the mover's downward step is
    /// the one rejected.
    pub const fn blocks(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (CollisionDirection::Top, Direction::Down)
                | (CollisionDirection::Bottom, Direction::Up)
                | (CollisionDirection::Left, Direction::Right)
                | (CollisionDirection::Right, Direction::Left)
        )
    }
}

/// Whether two rects overlap (strict, edges touching do not count).
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// If `target` sits exactly one pixel away from `bounds` on some side,
/// returns which side of `bounds` it touches.
///
/// "One pixel away" matches the unit-step movement model: a mover is
/// blocked the frame before its next step would overlap. Vertical edges
/// are checked first, so a corner-adjacent rect reads as Top/Bottom.
pub fn collision_direction(target: Rect, bounds: Rect) -> Option<CollisionDirection> {
    let overlaps_x = target.x < bounds.x + bounds.width && target.x + target.width > bounds.x;
    let overlaps_y = target.y < bounds.y + bounds.height && target.y + target.height > bounds.y;

    if overlaps_x {
        if target.y + target.height == bounds.y + 1.0 {
            return Some(CollisionDirection::Top);
        }
        if target.y == bounds.y + bounds.height - 1.0 {
            return Some(CollisionDirection::Bottom);
        }
    }
    if overlaps_y {
        if target.x + target.width == bounds.x + 1.0 {
            return Some(CollisionDirection::Left);
        }
        if target.x == bounds.x + bounds.width - 1.0 {
            return Some(CollisionDirection::Right);
        }
    }
    None
}

/// Checks `id` against every collidable entity in the store and returns
/// the side of the first one it is flush against, if any.
///
/// The side is reported from the *blocker's* perspective: `Top` means the
/// mover is pressed against the blocker's top edge, so its downward step
/// is the one to reject.
pub fn blocked_direction(store: &EntityStore, id: EntityId) -> Option<CollisionDirection> {
    let target = store.get(id)?.bounds();
    store
        .iter()
        .filter(|other| other.id != id && other.collidable)
        .find_map(|other| collision_direction(target, other.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(overlaps(a, Rect::new(8.0, 8.0, 16.0, 16.0)));
        assert!(overlaps(a, a));
        // Sharing an edge is not an overlap.
        assert!(!overlaps(a, Rect::new(16.0, 0.0, 16.0, 16.0)));
        assert!(!overlaps(a, Rect::new(0.0, 16.0, 16.0, 16.0)));
    }

    #[test]
    fn test_flush_sides_are_detected() {
        let bounds = Rect::new(32.0, 32.0, 16.0, 16.0);

        // One pixel above, below, left, right of the blocker.
        let above = Rect::new(32.0, 17.0, 16.0, 16.0);
        let below = Rect::new(32.0, 47.0, 16.0, 16.0);
        let left = Rect::new(17.0, 32.0, 16.0, 16.0);
        let right = Rect::new(47.0, 32.0, 16.0, 16.0);

        assert_eq!(collision_direction(above, bounds), Some(CollisionDirection::Top));
        assert_eq!(collision_direction(below, bounds), Some(CollisionDirection::Bottom));
        assert_eq!(collision_direction(left, bounds), Some(CollisionDirection::Left));
        assert_eq!(collision_direction(right, bounds), Some(CollisionDirection::Right));
    }

    #[test]
    fn test_tree_prop_blocks_upward_step() {
        use glam::{IVec2, Vec2};

        use crate::entity::{environment, obstacle, player, EntityStore};
        use crate::map::TileKind;

        let mut store = EntityStore::default();
        let id = player::spawn(&mut store, Vec2::new(64.0, 64.0));
        environment::spawn(&mut store, Vec2::new(64.0, 49.0), TileKind::Tree);

        let blocked = blocked_direction(&store, id).unwrap();
        assert_eq!(blocked, CollisionDirection::Bottom);
        assert!(blocked.blocks(Direction::Up));
        assert!(!blocked.blocks(Direction::Down));

        // Grass props never register.
        let mut store = EntityStore::default();
        let id = player::spawn(&mut store, Vec2::new(64.0, 64.0));
        environment::spawn(&mut store, Vec2::new(64.0, 49.0), TileKind::Grass1);
        assert_eq!(blocked_direction(&store, id), None);

        // A border fence reads the same as any other blocker.
        let mut store = EntityStore::default();
        obstacle::spawn_border(&mut store, IVec2::new(2, 2));
        let id = player::spawn(&mut store, Vec2::new(0.0, 17.0));
        let blocked = blocked_direction(&store, id).unwrap();
        assert!(blocked.blocks(Direction::Down));
    }

    #[test]
    fn test_distant_rects_do_not_collide() {
        let bounds = Rect::new(32.0, 32.0, 16.0, 16.0);
        assert_eq!(collision_direction(Rect::new(32.0, 0.0, 16.0, 16.0), bounds), None);
        assert_eq!(collision_direction(Rect::new(100.0, 32.0, 16.0, 16.0), bounds), None);
        // Two pixels away is not flush.
        assert_eq!(collision_direction(Rect::new(32.0, 14.0, 16.0, 16.0), bounds), None);
    }
}
