//! Frame-sequenced sprite animation for characters and props.

use std::collections::HashMap;

use strum_macros::{AsRefStr, EnumIter};

use crate::constants::{animation, TILE_SIZE};
use crate::map::Direction;
use crate::render::Rect;

/// One frame of an animation: a source rect and how many ticks it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAnimationFrame {
    pub rect: Rect,
    pub duration: u32,
}

/// A looping sequence of frames with its own tick counter.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    frames: Vec<SpriteAnimationFrame>,
    index: usize,
    counter: u32,
}

impl SpriteAnimation {
    pub fn new(frames: Vec<SpriteAnimationFrame>) -> Self {
        Self {
            frames,
            index: 0,
            counter: 0,
        }
    }

    /// Advances the counter by one tick, stepping to the next frame when
    /// the current frame's duration divides the counter.
    pub fn tick(&mut self) {
        self.counter = self.counter.wrapping_add(1);
        let duration = self.frames[self.index].duration.max(1);
        if self.counter % duration == 0 {
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    /// The source rect of the current frame.
    pub fn frame(&self) -> Rect {
        self.frames[self.index].rect
    }
}

/// Names for every character animation, one per posture and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AnimationName {
    IdleUp,
    IdleDown,
    IdleLeft,
    IdleRight,
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
}

impl AnimationName {
    pub const fn idle(direction: Direction) -> AnimationName {
        match direction {
            Direction::Up => AnimationName::IdleUp,
            Direction::Down => AnimationName::IdleDown,
            Direction::Left => AnimationName::IdleLeft,
            Direction::Right => AnimationName::IdleRight,
        }
    }

    pub const fn walk(direction: Direction) -> AnimationName {
        match direction {
            Direction::Up => AnimationName::WalkUp,
            Direction::Down => AnimationName::WalkDown,
            Direction::Left => AnimationName::WalkLeft,
            Direction::Right => AnimationName::WalkRight,
        }
    }

    /// The facing this animation represents.
    pub const fn direction(self) -> Direction {
        match self {
            AnimationName::IdleUp | AnimationName::WalkUp => Direction::Up,
            AnimationName::IdleDown | AnimationName::WalkDown => Direction::Down,
            AnimationName::IdleLeft | AnimationName::WalkLeft => Direction::Left,
            AnimationName::IdleRight | AnimationName::WalkRight => Direction::Right,
        }
    }

    pub const fn is_walk(self) -> bool {
        matches!(
            self,
            AnimationName::WalkUp | AnimationName::WalkDown | AnimationName::WalkLeft | AnimationName::WalkRight
        )
    }
}

/// An entity's animation set plus which one is currently playing.
///
/// `next_idle` remembers the facing to fall back to when movement stops,
/// so a walking character does not snap back to a default pose.
#[derive(Debug, Clone)]
pub struct SpriteData {
    pub animation: AnimationName,
    pub next_idle: Option<AnimationName>,
    animations: HashMap<AnimationName, SpriteAnimation>,
}

impl SpriteData {
    pub fn new(animation: AnimationName, animations: HashMap<AnimationName, SpriteAnimation>) -> Self {
        Self {
            animation,
            next_idle: None,
            animations,
        }
    }

    /// Switches to the walking animation for `direction` and records the
    /// matching idle pose for when movement stops.
    pub fn set_walk(&mut self, direction: Direction) {
        self.animation = AnimationName::walk(direction);
        self.next_idle = Some(AnimationName::idle(direction));
    }

    /// Drops back to the most recent facing's idle pose.
    pub fn stop(&mut self) {
        if let Some(idle) = self.next_idle.take() {
            self.animation = idle;
        }
    }

    /// Advances the active animation by one tick.
    pub fn tick(&mut self) {
        if let Some(active) = self.animations.get_mut(&self.animation) {
            active.tick();
        }
    }

    /// The current frame's source rect.
    pub fn current(&self) -> Rect {
        self.animations
            .get(&self.animation)
            .map(SpriteAnimation::frame)
            .unwrap_or(Rect::new(0.0, 0.0, TILE_SIZE as f32, TILE_SIZE as f32))
    }
}

/// The six foods the pet may ask for, in sprite sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum FoodKind {
    Cherry,
    Banana,
    Apple,
    Blueberry,
    Plum,
    Raspberry,
}

impl FoodKind {
    /// Column in the food sheet; one 16x16 cell per kind.
    pub const fn atlas_col(self) -> u32 {
        self as u32
    }
}

fn strip(start_col: u32, count: u32, duration: u32) -> SpriteAnimation {
    let frames = (0..count)
        .map(|i| SpriteAnimationFrame {
            rect: Rect::new(
                ((start_col + i) * TILE_SIZE) as f32,
                0.0,
                TILE_SIZE as f32,
                TILE_SIZE as f32,
            ),
            duration,
        })
        .collect();
    SpriteAnimation::new(frames)
}

/// Builds the full idle/walk animation set shared by the player and pet
/// sheets. Each call returns fresh counters so entities animate
/// independently.
pub fn character_sprite() -> SpriteData {
    let animations = HashMap::from([
        (AnimationName::IdleLeft, strip(0, 2, animation::IDLE_FRAME_DURATION)),
        (AnimationName::IdleDown, strip(2, 2, animation::IDLE_FRAME_DURATION)),
        (AnimationName::IdleRight, strip(4, 2, animation::IDLE_FRAME_DURATION)),
        (AnimationName::IdleUp, strip(6, 2, animation::IDLE_FRAME_DURATION)),
        (AnimationName::WalkLeft, strip(8, 8, animation::WALK_FRAME_DURATION)),
        (AnimationName::WalkDown, strip(16, 8, animation::WALK_FRAME_DURATION)),
        (AnimationName::WalkRight, strip(24, 8, animation::WALK_FRAME_DURATION)),
        (AnimationName::WalkUp, strip(32, 8, animation::WALK_FRAME_DURATION)),
    ]);
    SpriteData::new(AnimationName::IdleDown, animations)
}

/// Builds the single-frame sprite for one food kind.
pub fn food_sprite(kind: FoodKind) -> SpriteData {
    let animations = HashMap::from([(AnimationName::IdleDown, strip(kind.atlas_col(), 1, 0))]);
    SpriteData::new(AnimationName::IdleDown, animations)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_animation_advances_on_duration_boundary() {
        let mut anim = strip(0, 2, 4);
        for _ in 0..3 {
            anim.tick();
            assert_eq!(anim.frame().x, 0.0);
        }
        anim.tick();
        assert_eq!(anim.frame().x, 16.0);
        for _ in 0..4 {
            anim.tick();
        }
        assert_eq!(anim.frame().x, 0.0, "two-frame strip wraps");
    }

    #[test]
    fn test_single_frame_sprite_never_moves() {
        let mut sprite = food_sprite(FoodKind::Plum);
        let rect = sprite.current();
        assert_eq!(rect.x, (FoodKind::Plum.atlas_col() * TILE_SIZE) as f32);
        for _ in 0..100 {
            sprite.tick();
        }
        assert_eq!(sprite.current(), rect);
    }

    #[test]
    fn test_stop_restores_last_facing() {
        let mut sprite = character_sprite();
        sprite.set_walk(Direction::Left);
        assert_eq!(sprite.animation, AnimationName::WalkLeft);
        sprite.stop();
        assert_eq!(sprite.animation, AnimationName::IdleLeft);
        // A second stop without movement keeps the pose.
        sprite.stop();
        assert_eq!(sprite.animation, AnimationName::IdleLeft);
    }

    #[test]
    fn test_walk_and_idle_share_facing() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(AnimationName::walk(direction).direction(), direction);
            assert_eq!(AnimationName::idle(direction).direction(), direction);
            assert!(AnimationName::walk(direction).is_walk());
            assert!(!AnimationName::idle(direction).is_walk());
        }
    }
}
