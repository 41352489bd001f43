//! Static arena geometry: the perimeter wall as an immutable barrier set.
//!
//! The wall is generated once at startup from the arena dimensions and tile
//! size, then shared read-only with every behaviour system for the lifetime
//! of the run.

use bevy::prelude::Resource;
use glam::Vec2;

use crate::config::ArenaConfig;
use crate::geometry::Rect;

/// Immutable set of impassable tiles ringing the arena.
///
/// Inserted as a resource by the simulation plugin; never mutated after
/// construction, so all systems may read it concurrently without
/// coordination.
#[derive(Resource, Debug, Clone)]
pub struct BarrierField {
    rects: Vec<Rect>,
}

impl BarrierField {
    /// Builds the barrier field for an arena's perimeter wall.
    #[must_use]
    pub fn perimeter(arena: &ArenaConfig) -> Self {
        Self {
            rects: build_perimeter(arena),
        }
    }

    /// The barrier rectangles, in generation order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Arena dimensions are pixel counts far below f32's exact integer range."
)]
const fn tile_rect(x: u32, y: u32, tile_size: u32) -> Rect {
    Rect::new(
        Vec2::new(x as f32, y as f32),
        Vec2::new(tile_size as f32, tile_size as f32),
    )
}

/// Emits one tile-sized rectangle per tile step along each arena edge.
///
/// Top and bottom rows cover every tile column; left and right columns cover
/// every tile row. Corner tiles are emitted by both passes, which is
/// harmless: coverage is what matters, and the set stays small. Every point
/// within `tile_size` of an edge is covered and the interior is left empty.
///
/// # Examples
/// ```
/// use paddock::arena::build_perimeter;
/// use paddock::config::ArenaConfig;
///
/// let arena = ArenaConfig { width: 64, height: 48, tile_size: 16 };
/// let wall = build_perimeter(&arena);
/// assert!(wall.iter().all(|r| r.size.x == 16.0 && r.size.y == 16.0));
/// ```
#[must_use]
pub fn build_perimeter(arena: &ArenaConfig) -> Vec<Rect> {
    let tile = arena.tile_size;
    let mut rects = Vec::new();

    let mut x = 0;
    while x < arena.width {
        rects.push(tile_rect(x, 0, tile));
        rects.push(tile_rect(x, arena.height - tile, tile));
        x += tile;
    }

    let mut y = 0;
    while y < arena.height {
        rects.push(tile_rect(0, y, tile));
        rects.push(tile_rect(arena.width - tile, y, tile));
        y += tile;
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::collides_any;

    fn arena() -> ArenaConfig {
        ArenaConfig {
            width: 96,
            height: 64,
            tile_size: 16,
        }
    }

    #[test]
    fn tiles_are_uniform_and_axis_aligned_to_the_grid() {
        for rect in build_perimeter(&arena()) {
            assert_eq!(rect.size, Vec2::splat(16.0));
            assert_eq!(rect.pos.x % 16.0, 0.0);
            assert_eq!(rect.pos.y % 16.0, 0.0);
        }
    }

    #[test]
    fn every_edge_tile_is_covered() {
        let wall = build_perimeter(&arena());
        // Probe a small box just inside each edge midpoint.
        let probe = Vec2::splat(2.0);
        let probes = [
            Vec2::new(48.0, 1.0),  // top
            Vec2::new(48.0, 61.0), // bottom
            Vec2::new(1.0, 32.0),  // left
            Vec2::new(93.0, 32.0), // right
        ];
        for pos in probes {
            assert!(
                collides_any(&Rect::new(pos, probe), &wall),
                "edge probe at {pos:?} found no barrier"
            );
        }
    }

    #[test]
    fn interior_is_empty() {
        let wall = build_perimeter(&arena());
        // A box strictly more than one tile from every edge touches nothing.
        let inner = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(56.0, 24.0));
        assert!(!collides_any(&inner, &wall));
    }

    #[test]
    fn barrier_field_resource_exposes_the_same_set() {
        let field = BarrierField::perimeter(&arena());
        assert_eq!(field.rects(), build_perimeter(&arena()).as_slice());
    }
}
