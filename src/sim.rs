//! Behaviour systems and the plugin that wires them into the app.
//!
//! [`HerdingPlugin`] installs the barrier field, the intent and draw-list
//! resources, the startup spawn, and one chained `Update` sequence: herder
//! movement, then flee steering, then animation, then draw-list collection.
//! The chain guarantees that grazers react to the herder's position from the
//! current tick and that every entity is written by exactly one behaviour
//! system per tick.

use bevy::prelude::*;
use log::debug;

use crate::animation::{AnimationClock, Facing, FrameCycles, MotionState, Orientation};
use crate::arena::BarrierField;
use crate::components::{Footprint, Herder, Position, Skittish, Speed};
use crate::config::{ConfigError, SimConfig};
use crate::movement::{gated_destination, DirectionIntent};
use crate::presentation::{collect_draw_list_system, DrawList};
use crate::spawn_world::spawn_world_system;
use crate::steering;

/// Bevy plugin running the herding simulation.
///
/// Construction validates the configuration, so an installed plugin can
/// assume every parameter is well-formed.
#[derive(Debug, Clone)]
pub struct HerdingPlugin {
    config: SimConfig,
}

impl HerdingPlugin {
    /// Validates `config` and wraps it for installation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] the configuration violates.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Plugin for HerdingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(BarrierField::perimeter(&self.config.arena))
            .insert_resource(self.config.clone())
            .init_resource::<DirectionIntent>()
            .init_resource::<DrawList>()
            .add_systems(Startup, spawn_world_system)
            .add_systems(
                Update,
                (
                    drive_herder_system,
                    flee_system,
                    animate_system,
                    collect_draw_list_system,
                )
                    .chain(),
            );
    }
}

/// Resolves the tick's directional intent into a herder displacement.
///
/// Moves a single axis by `base_speed`, gated all-or-nothing against the
/// barrier field. Accepted moves enter `Moving` and update the facing from
/// the horizontal sign; rejected moves and idle ticks enter `Idle` and leave
/// position and facing untouched.
pub fn drive_herder_system(
    intent: Res<DirectionIntent>,
    barriers: Res<BarrierField>,
    mut herders: Query<
        (
            &mut Position,
            &Footprint,
            &Speed,
            &mut MotionState,
            &mut Facing,
        ),
        With<Herder>,
    >,
) {
    let Ok((mut position, footprint, speed, mut state, mut facing)) = herders.single_mut() else {
        return;
    };

    let Some(step) = intent.step() else {
        *state = MotionState::Idle;
        return;
    };

    let delta = step * speed.base;
    match gated_destination(position.0, footprint.0, delta, barriers.rects()) {
        Some(destination) => {
            position.0 = destination;
            *state = MotionState::Moving;
            if step.x > 0.0 {
                *facing = Facing::Right;
            } else if step.x < 0.0 {
                *facing = Facing::Left;
            }
        }
        None => {
            debug!("herder move by {delta:?} blocked by the wall");
            *state = MotionState::Idle;
        }
    }
}

/// Steers every grazer away from the herder's current position.
///
/// Runs after [`drive_herder_system`], so the threat position is the one
/// committed this tick. Outside the flee radius a grazer settles back to its
/// base speed and idles; inside it, speed interpolates with proximity and
/// the full displacement is either applied or discarded. The orientation
/// follows the intended heading even when the wall discards the move, but an
/// exactly-cornered grazer (distance zero) keeps its previous orientation.
pub fn flee_system(
    barriers: Res<BarrierField>,
    herders: Query<&Position, With<Herder>>,
    mut grazers: Query<
        (
            &mut Position,
            &Footprint,
            &mut Speed,
            &Skittish,
            &mut MotionState,
            &mut Orientation,
        ),
        Without<Herder>,
    >,
) {
    let Ok(threat) = herders.single() else {
        return;
    };
    let threat_position = threat.0;

    for (mut position, footprint, mut speed, skittish, mut state, mut orientation) in &mut grazers {
        let distance = position.0.distance(threat_position);
        if distance >= skittish.flee_radius {
            speed.current = speed.base;
            *state = MotionState::Idle;
            continue;
        }

        speed.current = steering::flee_speed(
            distance,
            skittish.flee_radius,
            speed.base,
            skittish.max_speed,
        );
        let away = steering::away_heading(position.0, threat_position);
        debug!(
            "grazer at {:?}: threat distance {distance:.2}, fleeing at {:.2}",
            position.0, speed.current
        );

        match gated_destination(position.0, footprint.0, away * speed.current, barriers.rects()) {
            Some(destination) => {
                position.0 = destination;
                *state = MotionState::Moving;
            }
            None => {
                debug!("grazer at {:?} cornered, displacement discarded", position.0);
                *state = MotionState::Idle;
            }
        }

        if let Some(heading) = steering::orientation_for(away) {
            *orientation = heading;
        }
    }
}

/// Advances every entity's animation clock for the tick.
///
/// `Moving` entities cycle through the frames of their active
/// `(state, orientation)` cycle; `Idle` entities rest on the idle frame.
/// Entities without an [`Orientation`] component (the herder) use the
/// default, matching their orientation-uniform cycle tables.
pub fn animate_system(
    mut clocks: Query<(
        &MotionState,
        Option<&Orientation>,
        &FrameCycles,
        &mut AnimationClock,
    )>,
) {
    for (state, orientation, cycles, mut clock) in &mut clocks {
        match state {
            MotionState::Moving => {
                let heading = orientation.copied().unwrap_or_default();
                let frame_count = cycles.cycle(MotionState::Moving, heading).len();
                clock.advance(frame_count);
            }
            MotionState::Idle => clock.rest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed_app() -> App {
        let plugin =
            HerdingPlugin::new(SimConfig::default()).expect("default config must validate");
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);
        app.update();
        app
    }

    #[test]
    fn plugin_installs_resources() {
        let app = installed_app();
        assert!(app.world().contains_resource::<BarrierField>());
        assert!(app.world().contains_resource::<DirectionIntent>());
        assert!(app.world().contains_resource::<DrawList>());
        assert!(app.world().contains_resource::<SimConfig>());
    }

    #[test]
    fn plugin_spawns_the_configured_agents() {
        let mut app = installed_app();
        let mut herder_query = app.world_mut().query_filtered::<(), With<Herder>>();
        let herders = herder_query.iter(app.world()).count();
        let mut grazer_query = app.world_mut().query_filtered::<(), With<Skittish>>();
        let grazers = grazer_query.iter(app.world()).count();
        assert_eq!(herders, 1);
        assert_eq!(grazers, SimConfig::default().grazers.len());
    }

    #[test]
    fn plugin_construction_rejects_invalid_config() {
        let mut config = SimConfig::default();
        config.ticks_per_frame = 0;
        assert!(HerdingPlugin::new(config).is_err());
    }
}
