//! Motion and animation state machine shared by both agent kinds.
//!
//! An entity is either `Idle` or `Moving`; paired with its orientation that
//! selects a frame cycle, an ordered cyclic sequence of sprite handles. The
//! core never loads or decodes images: the asset collaborator supplies the
//! cycles at spawn time and the renderer resolves handles back to pixels.

use bevy::prelude::Component;
use serde::Serialize;

use crate::config::ConfigError;

/// Opaque identifier of one sprite in the external atlas.
///
/// The rendering collaborator owns the mapping from handle to image; the
/// simulation only ever stores and compares handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SpriteHandle(pub u32);

/// Whether an entity's displacement was accepted this tick.
///
/// `Moving` is entered on every accepted displacement and `Idle` on every
/// tick without one (no intent, rejection, or out of flee range).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MotionState {
    /// No displacement was accepted this tick.
    #[default]
    Idle,
    /// A displacement (possibly zero-length) was accepted this tick.
    Moving,
}

/// Discretised heading of a grazer, selecting a sprite-sheet row.
///
/// The vertical rows follow the screen (`South` is down), but the sheet's
/// horizontal row labels run opposite to the travel direction: a grazer
/// moving screen-right shows the `West` row. The mapping from a heading
/// vector lives in [`crate::steering::orientation_for`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Orientation {
    /// Heading up the screen.
    North,
    /// Heading down the screen; the spawn default.
    #[default]
    South,
    /// The row shown while heading screen-left.
    East,
    /// The row shown while heading screen-right.
    West,
}

/// Left/right facing of the herder.
///
/// The herder's sprite cycle is direction-agnostic; only a horizontal flip
/// at draw time distinguishes left from right. Vertical movement never
/// changes facing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    /// Facing screen-left, the atlas art's native direction.
    Left,
    /// Facing screen-right; the spawn default.
    #[default]
    Right,
}

impl Facing {
    /// Whether the renderer must mirror the sprite horizontally.
    ///
    /// The atlas art faces left, so a right-facing herder is drawn flipped.
    #[must_use]
    pub const fn flip_x(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Non-empty ordered cyclic sequence of sprite handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCycle {
    frames: Vec<SpriteHandle>,
}

impl FrameCycle {
    /// Wraps a frame sequence, rejecting empty ones up front.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyFrameCycle`] when `frames` is empty; a
    /// cycle with nothing to show is a construction-time programming error.
    pub fn new(frames: Vec<SpriteHandle>) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::EmptyFrameCycle);
        }
        Ok(Self { frames })
    }

    /// Builds a cycle from at least one frame, making emptiness
    /// unrepresentable.
    #[must_use]
    pub fn of(first: SpriteHandle, rest: impl IntoIterator<Item = SpriteHandle>) -> Self {
        let mut frames = vec![first];
        frames.extend(rest);
        Self { frames }
    }

    /// Number of frames in the cycle, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; retained for interface completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The handle at `index`, wrapping cyclically.
    #[must_use]
    pub fn frame(&self, index: usize) -> SpriteHandle {
        let wrapped = index % self.frames.len();
        // The constructor guarantees at least one frame.
        self.frames.get(wrapped).copied().unwrap_or_default()
    }
}

/// One frame cycle per orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrientedCycles {
    north: FrameCycle,
    south: FrameCycle,
    east: FrameCycle,
    west: FrameCycle,
}

impl OrientedCycles {
    fn uniform(cycle: FrameCycle) -> Self {
        Self {
            north: cycle.clone(),
            south: cycle.clone(),
            east: cycle.clone(),
            west: cycle,
        }
    }

    const fn get(&self, orientation: Orientation) -> &FrameCycle {
        match orientation {
            Orientation::North => &self.north,
            Orientation::South => &self.south,
            Orientation::East => &self.east,
            Orientation::West => &self.west,
        }
    }
}

/// Per-entity table mapping `(MotionState, Orientation)` to a frame cycle.
///
/// Supplied once at spawn by the asset collaborator. The herder's table is
/// uniform across orientations because its facing is a render-time flip
/// rather than a distinct cycle.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FrameCycles {
    moving: OrientedCycles,
    idle: OrientedCycles,
}

impl FrameCycles {
    /// Builds a table that shows the same cycles regardless of orientation.
    #[must_use]
    pub fn uniform(moving: FrameCycle, idle: FrameCycle) -> Self {
        Self {
            moving: OrientedCycles::uniform(moving),
            idle: OrientedCycles::uniform(idle),
        }
    }

    /// Builds a table with distinct cycles per orientation.
    ///
    /// Cycles are given in `[North, South, East, West]` order, moving first.
    #[must_use]
    pub fn oriented(moving: [FrameCycle; 4], idle: [FrameCycle; 4]) -> Self {
        let [moving_n, moving_s, moving_e, moving_w] = moving;
        let [idle_n, idle_s, idle_e, idle_w] = idle;
        Self {
            moving: OrientedCycles {
                north: moving_n,
                south: moving_s,
                east: moving_e,
                west: moving_w,
            },
            idle: OrientedCycles {
                north: idle_n,
                south: idle_s,
                east: idle_e,
                west: idle_w,
            },
        }
    }

    /// Selects the active cycle for a motion state and orientation.
    #[must_use]
    pub const fn cycle(&self, state: MotionState, orientation: Orientation) -> &FrameCycle {
        match state {
            MotionState::Moving => self.moving.get(orientation),
            MotionState::Idle => self.idle.get(orientation),
        }
    }
}

/// Frame-cycling clock advanced once per tick.
///
/// While `Moving`, the frame index steps forward every `ticks_per_frame`
/// ticks and wraps at the active cycle's length; while `Idle`, the clock
/// rests on the idle cycle's first frame. The index therefore never leaves
/// `[0, frame_count)`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationClock {
    frame_index: usize,
    tick_counter: u32,
    ticks_per_frame: u32,
}

impl AnimationClock {
    /// Creates a clock at frame zero.
    ///
    /// `ticks_per_frame` comes from validated configuration and is at least
    /// one.
    #[must_use]
    pub const fn new(ticks_per_frame: u32) -> Self {
        Self {
            frame_index: 0,
            tick_counter: 0,
            ticks_per_frame,
        }
    }

    /// Advances one `Moving` tick against a cycle of `frame_count` frames.
    pub fn advance(&mut self, frame_count: usize) {
        self.tick_counter += 1;
        if self.tick_counter >= self.ticks_per_frame {
            self.tick_counter = 0;
            self.frame_index = (self.frame_index + 1) % frame_count.max(1);
        }
    }

    /// Rests on the idle cycle's single frame.
    ///
    /// Also clears the tick counter so a later burst of movement starts a
    /// full frame interval from scratch.
    pub const fn rest(&mut self) {
        self.frame_index = 0;
        self.tick_counter = 0;
    }

    /// Index of the frame to draw this tick.
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }
}
