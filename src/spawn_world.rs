//! Startup spawn of the configured world into the ECS.
//!
//! The frame-cycle tables installed here stand in for the asset
//! collaborator: the handles are stable ids into an external atlas and no
//! image is ever loaded or decoded by the simulation.

use bevy::prelude::*;
use log::info;

use crate::animation::{
    AnimationClock, Facing, FrameCycle, FrameCycles, MotionState, Orientation, SpriteHandle,
};
use crate::components::{Footprint, Herder, Position, Skittish, Speed};
use crate::config::SimConfig;

/// First atlas handle of the herder's sheet: three walk frames, one idle.
const HERDER_SHEET_BASE: u32 = 0;
/// First atlas handle of the grazer walk sheet: four rows of four frames.
const GRAZER_WALK_BASE: u32 = 100;
/// First atlas handle of the grazer grazing sheet, of which only the first
/// frame per row is shown while idle.
const GRAZER_IDLE_BASE: u32 = 200;

fn handle_run(start: u32, len: u32) -> FrameCycle {
    FrameCycle::of(
        SpriteHandle(start),
        (start + 1..start + len).map(SpriteHandle),
    )
}

fn herder_cycles() -> FrameCycles {
    FrameCycles::uniform(
        handle_run(HERDER_SHEET_BASE, 3),
        handle_run(HERDER_SHEET_BASE + 3, 1),
    )
}

fn grazer_cycles() -> FrameCycles {
    // Atlas rows run North, West, South, East; the table wants N, S, E, W.
    let walk = |row: u32| handle_run(GRAZER_WALK_BASE + row * 4, 4);
    let graze = |row: u32| handle_run(GRAZER_IDLE_BASE + row * 4, 1);
    FrameCycles::oriented(
        [walk(0), walk(2), walk(3), walk(1)],
        [graze(0), graze(2), graze(3), graze(1)],
    )
}

/// Spawns the herder and every configured grazer.
///
/// All entities start `Idle` at their configured positions with their base
/// speed; the configuration was validated at plugin construction, so every
/// spawn box is already clear of the perimeter wall.
pub fn spawn_world_system(mut commands: Commands, config: Res<SimConfig>) {
    commands.spawn((
        Herder,
        Position(config.herder.spawn),
        Footprint(config.herder.size),
        Speed::settled(config.herder.base_speed),
        MotionState::default(),
        Facing::default(),
        herder_cycles(),
        AnimationClock::new(config.ticks_per_frame),
    ));
    info!("spawned herder at {:?}", config.herder.spawn);

    for grazer in &config.grazers {
        commands.spawn((
            Position(grazer.spawn),
            Footprint(grazer.size),
            Speed::settled(grazer.base_speed),
            Skittish {
                flee_radius: grazer.flee_radius,
                max_speed: grazer.max_speed,
            },
            MotionState::default(),
            Orientation::default(),
            grazer_cycles(),
            AnimationClock::new(config.ticks_per_frame),
        ));
    }
    info!("spawned {} grazers", config.grazers.len());
}
