//! The terrain tile table: per-kind sprite offsets, animation and solidity.

use crate::constants::animation;

/// An enum representing the different kinds of terrain tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass1,
    Grass2,
    Grass3,
    Grass4,
    Tree,
    Log,
    Rock,
    Pebbles,
    WaterTopLeft,
    WaterTop,
    WaterTopRight,
    WaterRight,
    WaterBottomRight,
    WaterBottom,
    WaterBottomLeft,
    WaterLeft,
    WaterMiddle,
}

/// Static display/solidity data for one tile kind.
///
/// `atlas_col` is the column in the environment sheet (each column is one
/// tile wide; animation frames stack downwards). A `rate` of 0 means the
/// tile is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInfo {
    pub atlas_col: u32,
    pub rate: u32,
    pub frames: u32,
    pub solid: bool,
}

const fn tile(atlas_col: u32, rate: u32, frames: u32, solid: bool) -> TileInfo {
    TileInfo {
        atlas_col,
        rate,
        frames,
        solid,
    }
}

impl TileKind {
    /// Looks up the static table entry for this kind.
    pub const fn info(self) -> TileInfo {
        match self {
            TileKind::Grass1 => tile(0, 0, 1, false),
            TileKind::Grass2 => tile(1, 0, 1, false),
            TileKind::Grass3 => tile(2, 0, 1, false),
            TileKind::Grass4 => tile(3, 0, 1, false),
            TileKind::Tree => tile(13, animation::TREE_RATE, 2, true),
            TileKind::Rock => tile(14, 0, 1, true),
            TileKind::Log => tile(15, 0, 1, true),
            TileKind::Pebbles => tile(16, 0, 1, true),
            TileKind::WaterTopLeft => tile(4, animation::WATER_RATE, 2, true),
            TileKind::WaterTop => tile(5, animation::WATER_RATE, 2, true),
            TileKind::WaterTopRight => tile(6, animation::WATER_RATE, 2, true),
            TileKind::WaterRight => tile(7, animation::WATER_RATE, 2, true),
            TileKind::WaterLeft => tile(8, animation::WATER_RATE, 2, true),
            TileKind::WaterBottomLeft => tile(9, animation::WATER_RATE, 2, true),
            TileKind::WaterBottom => tile(10, animation::WATER_RATE, 2, true),
            TileKind::WaterBottomRight => tile(11, animation::WATER_RATE, 2, true),
            TileKind::WaterMiddle => tile(12, animation::WATER_RATE, 2, true),
        }
    }

    /// Whether entities are blocked by this tile.
    pub const fn is_solid(self) -> bool {
        self.info().solid
    }

    /// Parses a single legend character into a tile kind.
    ///
    /// Returns `None` for characters outside the legend; the parser skips
    /// those rather than failing.
    pub fn from_legend(c: char) -> Option<TileKind> {
        match c {
            '.' => Some(TileKind::Grass1),
            '\'' => Some(TileKind::Grass2),
            '"' => Some(TileKind::Grass3),
            '*' => Some(TileKind::Grass4),
            't' => Some(TileKind::Tree),
            'l' => Some(TileKind::Log),
            'r' => Some(TileKind::Rock),
            'p' => Some(TileKind::Pebbles),
            '╭' => Some(TileKind::WaterTopLeft),
            '╴' => Some(TileKind::WaterTop),
            '╮' => Some(TileKind::WaterTopRight),
            '╵' => Some(TileKind::WaterRight),
            '╯' => Some(TileKind::WaterBottomRight),
            '╶' => Some(TileKind::WaterBottom),
            '╰' => Some(TileKind::WaterBottomLeft),
            '╷' => Some(TileKind::WaterLeft),
            '~' => Some(TileKind::WaterMiddle),
            _ => None,
        }
    }
}
