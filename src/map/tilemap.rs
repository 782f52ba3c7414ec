//! The tile grid: parsing, solidity queries and swept collision prediction.

use glam::{IVec2, Vec2};
use tracing::debug;

use crate::constants::TILE_SIZE;
use crate::map::tile::TileKind;
use crate::render::{Rect, Renderer, Spritesheet};

/// The terrain grid for one level.
///
/// Tiles are stored row-major. The map carries its own frame counter so
/// animated tiles (water, trees) shimmer in lockstep regardless of how many
/// times a scene has been entered.
#[derive(Debug, Clone)]
pub struct Tilemap {
    size: IVec2,
    tiles: Vec<TileKind>,
    frame: u32,
}

impl Tilemap {
    /// Parses level text into a tile grid.
    ///
    /// One recognized character per tile; newlines end a row. Anything
    /// outside the legend (padding spaces included) is skipped, so levels
    /// can be spaced out for readability. Rows with no recognized
    /// characters are dropped. The grid width is taken from the first
    /// populated row; a short row leaves trailing tiles owned by the next
    /// row, so level text is expected to be rectangular.
    pub fn parse(text: &str) -> Tilemap {
        let mut tiles = Vec::new();
        let mut width = 0usize;
        let mut rows = 0usize;

        for line in text.lines() {
            let start = tiles.len();
            tiles.extend(line.chars().filter_map(TileKind::from_legend));
            let found = tiles.len() - start;
            if found == 0 {
                continue;
            }
            if width == 0 {
                width = found;
            }
            rows += 1;
        }

        debug!(width, height = rows, tiles = tiles.len(), "parsed level");

        Tilemap {
            size: IVec2::new(width as i32, rows as i32),
            tiles,
            frame: 0,
        }
    }

    /// Grid dimensions, in tiles.
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// The tile at a grid coordinate, or `None` outside the grid.
    pub fn kind_at(&self, pos: IVec2) -> Option<TileKind> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }
        self.tiles.get((pos.y * self.size.x + pos.x) as usize).copied()
    }

    /// Whether the tile at a grid coordinate blocks movement.
    ///
    /// Coordinates outside the grid are not solid; the canvas edge is the
    /// level designer's problem, not the collision system's.
    pub fn solid_at(&self, pos: IVec2) -> bool {
        self.kind_at(pos).is_some_and(TileKind::is_solid)
    }

    /// Whether moving `rect` by `delta` would land any of its corners on a
    /// solid tile.
    ///
    /// Right and bottom edges are pulled in by one pixel so a rect flush
    /// against a tile boundary does not probe the neighboring tile. With a
    /// zero delta this degenerates to "is the rect currently overlapping
    /// anything solid".
    pub fn predict_collision(&self, rect: Rect, delta: Vec2) -> bool {
        let left = rect.x + delta.x;
        let top = rect.y + delta.y;
        let right = left + rect.width - 1.0;
        let bottom = top + rect.height - 1.0;

        let corners = [
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(left, bottom),
            Vec2::new(right, bottom),
        ];

        corners
            .into_iter()
            .any(|corner| self.solid_at((corner / TILE_SIZE as f32).floor().as_ivec2()))
    }

    /// Draws every tile, offset by `origin`, and advances the shared
    /// animation counter by one tick.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, origin: Vec2) {
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let Some(kind) = self.kind_at(IVec2::new(x, y)) else {
                    continue;
                };
                let info = kind.info();
                let frame = if info.rate == 0 {
                    0
                } else {
                    (self.frame / info.rate) % info.frames
                };
                let src = Rect::new(
                    (info.atlas_col * TILE_SIZE) as f32,
                    (frame * TILE_SIZE) as f32,
                    TILE_SIZE as f32,
                    TILE_SIZE as f32,
                );
                let pos = origin + Vec2::new((x as u32 * TILE_SIZE) as f32, (y as u32 * TILE_SIZE) as f32);
                renderer.draw_sprite(Spritesheet::Environment, src, pos);
            }
        }
        self.frame = self.frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FOOD_SPAWN_TILES, LEVEL_0};

    #[test]
    fn test_shipped_level_dimensions() {
        let map = Tilemap::parse(LEVEL_0);
        assert_eq!(map.size(), IVec2::new(16, 9));
    }

    #[test]
    fn test_food_spawn_tiles_are_open() {
        let map = Tilemap::parse(LEVEL_0);
        for tile in FOOD_SPAWN_TILES {
            assert!(!map.solid_at(tile), "spawn tile {tile} is solid");
        }
    }

    #[test]
    fn test_out_of_bounds_is_not_solid() {
        let map = Tilemap::parse(LEVEL_0);
        assert!(!map.solid_at(IVec2::new(-1, 0)));
        assert!(!map.solid_at(IVec2::new(0, -1)));
        assert!(!map.solid_at(IVec2::new(16, 0)));
        assert!(!map.solid_at(IVec2::new(0, 9)));
        assert_eq!(map.kind_at(IVec2::new(16, 0)), None);
    }

    #[test]
    fn test_predict_collision_edges_inclusive() {
        let map = Tilemap::parse(LEVEL_0);
        assert!(map.solid_at(IVec2::new(7, 6)), "pond bank missing");

        // Open grass at tile (6, 5); a tile-aligned 16x16 rect occupies
        // exactly that tile because its right/bottom edges pull in a pixel.
        let rect = Rect::new(96.0, 80.0, 16.0, 16.0);
        assert!(!map.predict_collision(rect, Vec2::ZERO));
        // One tile down and right lands every corner on the pond bank.
        assert!(map.predict_collision(rect, Vec2::new(16.0, 16.0)));
    }

    #[test]
    fn test_zero_delta_matches_corner_solidity() {
        let map = Tilemap::parse(LEVEL_0);
        let rect = Rect::new(128.0, 112.0, 16.0, 16.0);
        let expected = map.solid_at(IVec2::new(8, 7));
        assert_eq!(map.predict_collision(rect, Vec2::ZERO), expected);
    }
}
