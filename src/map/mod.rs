//! The level grid and everything that hangs off it.

pub mod direction;
pub mod tile;
pub mod tilemap;

pub use direction::Direction;
pub use tile::TileKind;
pub use tilemap::Tilemap;
