//! Simulation defaults used across systems.
//!
//! Together these describe the demo scenario: a 944x512 pixel arena ringed
//! by 16 px wall tiles, one herder, and a handful of grazers.
use glam::Vec2;

/// Default arena width in pixels.
pub const DEFAULT_ARENA_WIDTH: u32 = 944;
/// Default arena height in pixels.
pub const DEFAULT_ARENA_HEIGHT: u32 = 512;
/// Default edge length of one wall tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;
/// Default number of ticks between animation frame steps.
pub const DEFAULT_TICKS_PER_FRAME: u32 = 10;
/// Default tick cadence for the demo pacer, in ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 30;
/// Herder displacement per accepted tick.
pub const HERDER_BASE_SPEED: f32 = 5.0;
/// Herder collision footprint, matching its sprite extent.
pub const HERDER_SIZE: Vec2 = Vec2::new(46.0, 27.0);
/// Grazer amble speed outside the flee radius.
pub const GRAZER_BASE_SPEED: f32 = 3.0;
/// Grazer panic speed when the herder is on top of it.
pub const GRAZER_MAX_SPEED: f32 = 5.0;
/// Distance at which a grazer starts reacting to the herder.
pub const GRAZER_FLEE_RADIUS: f32 = 100.0;
/// Grazer collision footprint, matching its sprite extent.
pub const GRAZER_SIZE: Vec2 = Vec2::new(128.0, 128.0);
