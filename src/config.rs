//! Construction-time simulation configuration.
//!
//! All tunables are fixed before the first tick: arena dimensions, per-agent
//! speeds and footprints, flee parameters, and the animation cadence.
//! Malformed values are programming errors rejected up front rather than
//! runtime conditions, so validation happens once here and the behaviour
//! systems assume well-formed inputs.

use std::fs;
use std::path::Path;

use anyhow::Context;
use bevy::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arena::build_perimeter;
use crate::constants::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_TICKS_PER_FRAME, DEFAULT_TICKS_PER_SECOND,
    DEFAULT_TILE_SIZE, GRAZER_BASE_SPEED, GRAZER_FLEE_RADIUS, GRAZER_MAX_SPEED, GRAZER_SIZE,
    HERDER_BASE_SPEED, HERDER_SIZE,
};
use crate::geometry::{collides_any, Rect};

/// Rejected configuration values.
///
/// Each variant is fatal: the simulation refuses to construct rather than
/// limp along with a nonsensical parameter.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The tile size must be a positive number of pixels.
    #[error("tile size must be positive")]
    ZeroTileSize,
    /// The arena must be able to hold its perimeter wall.
    #[error("arena {width}x{height} cannot hold two rows of {tile_size} px wall tiles")]
    ArenaTooSmall {
        /// Configured arena width in pixels.
        width: u32,
        /// Configured arena height in pixels.
        height: u32,
        /// Configured wall tile size in pixels.
        tile_size: u32,
    },
    /// Every agent needs a positive base speed.
    #[error("base speed must be positive, got {0}")]
    NonPositiveBaseSpeed(f32),
    /// An agent footprint must have positive width and height.
    #[error("footprint must have positive extent, got {0}x{1}")]
    NonPositiveFootprint(f32, f32),
    /// A grazer's reaction distance must be positive.
    #[error("flee radius must be positive, got {0}")]
    NonPositiveFleeRadius(f32),
    /// A grazer may never flee slower than it ambles.
    #[error("max speed {max} is below base speed {base}")]
    MaxSpeedBelowBase {
        /// Configured amble speed.
        base: f32,
        /// Configured panic speed.
        max: f32,
    },
    /// The animation clock needs at least one tick per frame.
    #[error("animation cadence must be at least one tick per frame")]
    ZeroAnimationCadence,
    /// The demo pacer needs a positive tick rate.
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    /// An agent must spawn clear of the perimeter wall.
    #[error("spawn box at ({x}, {y}) overlaps the perimeter wall")]
    SpawnInsideBarrier {
        /// Spawn x coordinate.
        x: f32,
        /// Spawn y coordinate.
        y: f32,
    },
    /// A frame cycle with no frames cannot animate anything.
    #[error("frame cycle must contain at least one frame")]
    EmptyFrameCycle,
}

/// Arena dimensions and wall tile size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width in pixels.
    pub width: u32,
    /// Arena height in pixels.
    pub height: u32,
    /// Edge length of one wall tile in pixels.
    pub tile_size: u32,
}

/// Spawn parameters for the controlled herder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HerderConfig {
    /// Top-left spawn position.
    pub spawn: Vec2,
    /// Collision footprint (width, height).
    pub size: Vec2,
    /// Displacement per accepted tick.
    pub base_speed: f32,
}

/// Spawn parameters for one skittish grazer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrazerConfig {
    /// Top-left spawn position.
    pub spawn: Vec2,
    /// Collision footprint (width, height).
    pub size: Vec2,
    /// Speed while undisturbed or at the flee radius boundary.
    pub base_speed: f32,
    /// Distance at which the grazer starts reacting to the herder.
    pub flee_radius: f32,
    /// Speed reached when the herder is on top of the grazer.
    pub max_speed: f32,
}

/// Complete static configuration for one simulation run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena and wall geometry.
    pub arena: ArenaConfig,
    /// The single controlled agent.
    pub herder: HerderConfig,
    /// Autonomous fleeing agents.
    pub grazers: Vec<GrazerConfig>,
    /// Ticks between animation frame steps.
    pub ticks_per_frame: u32,
    /// Tick cadence used by the demo pacer.
    pub ticks_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig {
                width: DEFAULT_ARENA_WIDTH,
                height: DEFAULT_ARENA_HEIGHT,
                tile_size: DEFAULT_TILE_SIZE,
            },
            herder: HerderConfig {
                spawn: Vec2::new(100.0, 100.0),
                size: HERDER_SIZE,
                base_speed: HERDER_BASE_SPEED,
            },
            grazers: vec![
                GrazerConfig {
                    spawn: Vec2::new(200.0, 200.0),
                    size: GRAZER_SIZE,
                    base_speed: GRAZER_BASE_SPEED,
                    flee_radius: GRAZER_FLEE_RADIUS,
                    max_speed: GRAZER_MAX_SPEED,
                },
                GrazerConfig {
                    spawn: Vec2::new(300.0, 300.0),
                    size: GRAZER_SIZE,
                    base_speed: GRAZER_BASE_SPEED,
                    flee_radius: GRAZER_FLEE_RADIUS,
                    max_speed: GRAZER_MAX_SPEED,
                },
                GrazerConfig {
                    spawn: Vec2::new(400.0, 350.0),
                    size: GRAZER_SIZE,
                    base_speed: GRAZER_BASE_SPEED,
                    flee_radius: GRAZER_FLEE_RADIUS,
                    max_speed: GRAZER_MAX_SPEED,
                },
            ],
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl SimConfig {
    /// Checks every construction-time invariant.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found; see the variant docs for the
    /// individual rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena.validate()?;
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::ZeroAnimationCadence);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let wall = build_perimeter(&self.arena);
        validate_agent(self.herder.spawn, self.herder.size, self.herder.base_speed, &wall)?;
        for grazer in &self.grazers {
            validate_agent(grazer.spawn, grazer.size, grazer.base_speed, &wall)?;
            if grazer.flee_radius <= 0.0 {
                return Err(ConfigError::NonPositiveFleeRadius(grazer.flee_radius));
            }
            if grazer.max_speed < grazer.base_speed {
                return Err(ConfigError::MaxSpeedBelowBase {
                    base: grazer.base_speed,
                    max: grazer.max_speed,
                });
            }
        }
        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, is not valid JSON for this
    /// schema, or violates a [`ConfigError`] rule.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading simulation config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing simulation config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating simulation config from {}", path.display()))?;
        Ok(config)
    }
}

impl ArenaConfig {
    /// Checks that the arena can carry its perimeter wall.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTileSize`] or [`ConfigError::ArenaTooSmall`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.width < 2 * self.tile_size || self.height < 2 * self.tile_size {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                tile_size: self.tile_size,
            });
        }
        Ok(())
    }
}

fn validate_agent(
    spawn: Vec2,
    size: Vec2,
    base_speed: f32,
    wall: &[Rect],
) -> Result<(), ConfigError> {
    if base_speed <= 0.0 {
        return Err(ConfigError::NonPositiveBaseSpeed(base_speed));
    }
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(ConfigError::NonPositiveFootprint(size.x, size.y));
    }
    if collides_any(&Rect::new(spawn, size), wall) {
        return Err(ConfigError::SpawnInsideBarrier {
            x: spawn.x,
            y: spawn.y,
        });
    }
    Ok(())
}
