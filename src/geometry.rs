//! Axis-aligned box geometry and the shared collision test.
//!
//! Both agent kinds gate their movement through the same overlap check, so
//! these helpers operate on plain values and carry no simulation state. They
//! are reused by the ECS systems and by standalone unit tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle whose position is its top-left corner.
///
/// The extent of an entity's rectangle is fixed at construction; only the
/// position moves. Screen coordinates are used throughout: `y` grows
/// downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Returns a copy shifted by `delta`, keeping the extent.
    ///
    /// Used to build candidate boxes for collision-gated moves.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.pos + delta, self.size)
    }

    /// Reports whether two rectangles overlap with positive area.
    ///
    /// The comparison is strict on both axes, so rectangles that merely share
    /// an edge or a corner do not overlap.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use paddock::geometry::Rect;
    ///
    /// let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
    /// let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
    /// let c = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c)); // touching edges only
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// Reports whether `rect` overlaps any barrier in the set.
///
/// Linear in the number of barriers; the perimeter-only barrier sets this
/// simulation targets stay small enough that no spatial index is needed.
#[must_use]
pub fn collides_any(rect: &Rect, barriers: &[Rect]) -> bool {
    barriers.iter().any(|barrier| rect.overlaps(barrier))
}
