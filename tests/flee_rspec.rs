//! Behaviour tests for flee steering using rust-rspec.
//!
//! Verifies that a grazer accelerates monotonically as the herder closes in
//! and calms down once the threat withdraws.

use std::fmt;
use std::sync::{Arc, Mutex};

use glam::Vec2;

mod common;

use common::{compact_config, HerdingTestApp};
use paddock::MotionState;

#[derive(Clone)]
struct ChaseWorld {
    sim: Arc<Mutex<Option<HerdingTestApp>>>,
    speeds: Arc<Mutex<Vec<f32>>>,
}

impl fmt::Debug for ChaseWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaseWorld")
            .field("speeds", &self.speeds)
            .finish()
    }
}

impl Default for ChaseWorld {
    fn default() -> Self {
        Self {
            sim: Arc::new(Mutex::new(None)),
            speeds: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ChaseWorld {
    fn setup(&mut self) {
        let mut slot = self.sim.lock().expect("sim lock");
        if slot.is_none() {
            *slot = Some(HerdingTestApp::new(compact_config()));
        }
    }

    /// Pins the herder at `gap` pixels due north of the grazer, ticks once,
    /// and records the grazer's resulting speed.
    fn press_from(&self, gap: f32) {
        let mut slot = self.sim.lock().expect("sim lock");
        let sim = slot.as_mut().expect("sim not set up");
        let grazer = sim.grazer();
        let herder = sim.herder();
        let position = sim.position(grazer);
        sim.place(herder, Vec2::new(position.x, position.y - gap));
        sim.tick();
        self.speeds
            .lock()
            .expect("speeds lock")
            .push(sim.speed(grazer).current);
    }

    /// Runs the press sequence once, no matter how often rspec re-enters
    /// the hook.
    fn press_once(&self, gaps: &[f32]) {
        if self.recorded_speeds().is_empty() {
            for &gap in gaps {
                self.press_from(gap);
            }
        }
    }

    fn recorded_speeds(&self) -> Vec<f32> {
        self.speeds.lock().expect("speeds lock").clone()
    }

    fn grazer_state(&self) -> MotionState {
        let mut slot = self.sim.lock().expect("sim lock");
        let sim = slot.as_mut().expect("sim not set up");
        let grazer = sim.grazer();
        sim.motion_state(grazer)
    }
}

#[test]
fn grazer_accelerates_as_the_herder_closes_in() {
    rspec::run(&rspec::given(
        "a grazer with the herder pressing in from the north",
        ChaseWorld::default(),
        |ctx| {
            ctx.before_each(|world| world.setup());
            ctx.when("the herder presses from 90, 60, then 30 pixels", |ctx| {
                ctx.before_each(|world| world.press_once(&[90.0, 60.0, 30.0]));
                ctx.then(
                    "the grazer keeps fleeing and its speed rises strictly within bounds",
                    |world| {
                        assert_eq!(world.grazer_state(), MotionState::Moving);
                        let speeds = world.recorded_speeds();
                        assert_eq!(speeds.len(), 3);
                        assert!(
                            speeds.windows(2).all(|pair| pair[0] < pair[1]),
                            "speeds should rise strictly, got {speeds:?}"
                        );
                        assert!(speeds.iter().all(|speed| (3.0..=5.0).contains(speed)));
                    },
                );
            });
        },
    ));
}

#[test]
fn grazer_settles_once_the_herder_withdraws() {
    rspec::run(&rspec::given(
        "a fleeing grazer whose threat then withdraws",
        ChaseWorld::default(),
        |ctx| {
            ctx.before_each(|world| world.setup());
            ctx.when("a close press is followed by a long retreat", |ctx| {
                ctx.before_each(|world| world.press_once(&[30.0, 250.0]));
                ctx.then("the grazer settles back to its base speed", |world| {
                    let speeds = world.recorded_speeds();
                    assert_eq!(speeds.last().copied(), Some(3.0));
                    assert_eq!(world.grazer_state(), MotionState::Idle);
                });
            });
        },
    ));
}
