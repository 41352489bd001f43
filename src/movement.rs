//! Directional intent and the collision-gated displacement both agent kinds
//! share.
//!
//! Moves are all-or-nothing: a candidate box that clips a barrier rejects
//! the whole displacement, with no sliding along the unblocked axis. That
//! keeps the collision contract identical for the herder and the grazers at
//! the cost of agents visibly sticking to walls, an accepted trade-off.

use bevy::prelude::Resource;
use glam::Vec2;
use serde::Serialize;

use crate::geometry::{collides_any, Rect};

/// The already-decoded directional intent for the controlled agent.
///
/// Written once per tick by the input collaborator; the simulation never
/// polls the keyboard itself. Only one axis moves per tick, so there is no
/// diagonal variant.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DirectionIntent {
    /// No movement requested this tick.
    #[default]
    None,
    /// Step up the screen.
    Up,
    /// Step down the screen.
    Down,
    /// Step screen-left.
    Left,
    /// Step screen-right.
    Right,
}

impl DirectionIntent {
    /// The unit step for this intent, or `None` when idle.
    ///
    /// Screen coordinates: up is negative `y`.
    #[must_use]
    pub const fn step(self) -> Option<Vec2> {
        match self {
            Self::None => None,
            Self::Up => Some(Vec2::new(0.0, -1.0)),
            Self::Down => Some(Vec2::new(0.0, 1.0)),
            Self::Left => Some(Vec2::new(-1.0, 0.0)),
            Self::Right => Some(Vec2::new(1.0, 0.0)),
        }
    }
}

/// Applies the shared all-or-nothing collision gate to a displacement.
///
/// Builds the candidate box at `position + delta` and returns its position
/// when it clears every barrier, or `None` when the whole displacement must
/// be discarded.
#[must_use]
pub fn gated_destination(
    position: Vec2,
    footprint: Vec2,
    delta: Vec2,
    barriers: &[Rect],
) -> Option<Vec2> {
    let candidate = Rect::new(position, footprint).translated(delta);
    if collides_any(&candidate, barriers) {
        None
    } else {
        Some(candidate.pos)
    }
}
