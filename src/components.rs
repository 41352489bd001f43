//! ECS component types shared between the behaviour systems.
//!
//! Motion-state, orientation, and animation components live in
//! [`crate::animation`]; this module holds the spatial and kind-specific
//! data every agent carries.

use bevy::prelude::Component;
use glam::Vec2;
use serde::Serialize;

use crate::geometry::Rect;

/// Authoritative top-left position of an entity.
///
/// The collision/render box is always derived from this together with
/// [`Footprint`], so the two can never drift apart.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position(pub Vec2);

/// Fixed collision/render extent of an entity.
///
/// Never mutated after spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint(pub Vec2);

impl Footprint {
    /// The entity's box at the given position.
    #[must_use]
    pub const fn rect_at(&self, position: Position) -> Rect {
        Rect::new(position.0, self.0)
    }
}

/// Per-tick movement speeds.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speed {
    /// Undisturbed displacement per tick.
    pub base: f32,
    /// Displacement applied this tick; equals `base` except for a fleeing
    /// grazer inside its flee radius.
    pub current: f32,
}

impl Speed {
    /// Starts an agent at its base speed.
    #[must_use]
    pub const fn settled(base: f32) -> Self {
        Self {
            base,
            current: base,
        }
    }
}

/// Marker for the single player-controlled agent.
#[derive(Component, Debug, Clone, Copy, Default, Serialize)]
pub struct Herder;

/// Flee parameters of an autonomous grazer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Skittish {
    /// Distance at which the grazer starts reacting to the threat.
    pub flee_radius: f32,
    /// Speed reached when the threat is at distance zero.
    pub max_speed: f32,
}
