//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2, Vec2};

/// Target duration of one tick of the fixed-step loop (60 Hz).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: u32 = 16;
/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(256, 144);

/// The player's fixed starting position, in pixels.
pub const PLAYER_START: Vec2 = Vec2::new(128.0, 64.0);

/// Gameplay tuning values.
pub mod mechanics {
    /// Sideways speed while moving diagonally, as a fraction of the unit
    /// step. Applied through the fractional step bank in `GameState`.
    pub const DIAGONAL_FACTOR: f32 = 0.6;
    /// Happiness lost per decay tick while the pet is still hungry.
    pub const HP_DECAY: f32 = 0.5;
    /// Decay fires on frames where `frame % HP_DECAY_INTERVAL == 0`.
    pub const HP_DECAY_INTERVAL: u64 = 2;
    /// The pet's maximum happiness.
    pub const PET_MAX_HP: f32 = 32.0;
    /// How many foods the pet asks for per round.
    pub const WANTS_COUNT: usize = 3;
}

/// Animation timing values, all in ticks at 60 ticks/sec.
pub mod animation {
    /// Frame duration for idle character animations.
    pub const IDLE_FRAME_DURATION: u32 = 32;
    /// Frame duration for walking character animations.
    pub const WALK_FRAME_DURATION: u32 = 4;
    /// Tick divisor for the water tiles' two-frame shimmer.
    pub const WATER_RATE: u32 = 32;
    /// Tick divisor for the tree tiles' two-frame sway.
    pub const TREE_RATE: u32 = 16;
    /// Period of the "press start" blink; visible for the first half.
    pub const BLINK_PERIOD: u64 = 64;
}

/// The overworld terrain, one character per tile. Characters outside the
/// legend (including the padding spaces) are skipped by the parser.
pub const LEVEL_0: &str = "
l l . . . . . ' . . . . . . r r
. \" ' * . . ' p t t . . . . ' l
. r \" r . . . l . . r ' \" . . .
. . p . . . . l . \" . \" . . * .
. . . . * l . ' . . . p r . . .
. . . . . . . . . . . r p . . .
\" t . . . . . ╭ ╴ ╴ ╴ ╴ ╴ ╮ . .
* l . ' t p * ╷ ~ ~ ~ ~ ~ ╵ . t
. . ' \" p . . ╰ ╶ ╶ ╶ ╶ ╶ ╯ t t
";

/// Open tile coordinates where food may be placed.
pub const FOOD_SPAWN_TILES: [IVec2; 8] = [
    IVec2::new(2, 2),
    IVec2::new(14, 7),
    IVec2::new(0, 6),
    IVec2::new(5, 8),
    IVec2::new(9, 2),
    IVec2::new(14, 1),
    IVec2::new(0, 1),
    IVec2::new(13, 5),
];
