//! Shared fixtures and helpers for simulation integration tests.

use bevy::prelude::*;
use paddock::{
    AnimationClock, ArenaConfig, DirectionIntent, Facing, GrazerConfig, Herder, HerderConfig,
    HerdingPlugin, MotionState, Orientation, Position, SimConfig, Skittish, Speed,
};

/// A compact test scenario: 320x320 arena, 16 px walls, one 20x20 herder in
/// the north-west corner and one 20x20 grazer in the south-east, far enough
/// apart that nothing reacts until a test moves them.
#[must_use]
pub fn compact_config() -> SimConfig {
    SimConfig {
        arena: ArenaConfig {
            width: 320,
            height: 320,
            tile_size: 16,
        },
        herder: HerderConfig {
            spawn: Vec2::new(40.0, 40.0),
            size: Vec2::splat(20.0),
            base_speed: 5.0,
        },
        grazers: vec![GrazerConfig {
            spawn: Vec2::new(240.0, 240.0),
            size: Vec2::splat(20.0),
            base_speed: 3.0,
            flee_radius: 100.0,
            max_speed: 5.0,
        }],
        ticks_per_frame: 10,
        ticks_per_second: 30,
    }
}

/// Test harness owning an app with `MinimalPlugins` and the herding plugin.
///
/// Construction runs one priming update so the spawned entities exist; with
/// the default idle intent and [`compact_config`] separations, that update
/// moves nothing.
pub struct HerdingTestApp {
    app: App,
}

impl HerdingTestApp {
    /// Builds and primes an app for the given configuration.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let plugin = HerdingPlugin::new(config).expect("test config must validate");
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);
        app.update();
        Self { app }
    }

    /// Sets the directional intent consumed on subsequent ticks.
    pub fn set_intent(&mut self, intent: DirectionIntent) {
        self.app.insert_resource(intent);
    }

    /// Runs exactly one simulation tick.
    pub fn tick(&mut self) {
        self.app.update();
    }

    /// Runs `count` simulation ticks.
    pub fn ticks(&mut self, count: usize) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// The single herder entity.
    pub fn herder(&mut self) -> Entity {
        let mut query = self.app.world_mut().query_filtered::<Entity, With<Herder>>();
        query
            .single(self.app.world())
            .expect("exactly one herder must exist")
    }

    /// Every grazer entity, in query order.
    pub fn grazers(&mut self) -> Vec<Entity> {
        let mut query = self
            .app
            .world_mut()
            .query_filtered::<Entity, With<Skittish>>();
        query.iter(self.app.world()).collect()
    }

    /// The first grazer entity.
    pub fn grazer(&mut self) -> Entity {
        *self
            .grazers()
            .first()
            .expect("at least one grazer must exist")
    }

    /// Teleports an entity, bypassing collision; a test device only.
    pub fn place(&mut self, entity: Entity, position: Vec2) {
        let mut slot = self
            .app
            .world_mut()
            .get_mut::<Position>(entity)
            .expect("entity must have a Position");
        slot.0 = position;
    }

    /// Current top-left position of an entity.
    pub fn position(&self, entity: Entity) -> Vec2 {
        self.component::<Position>(entity).0
    }

    /// Current motion state of an entity.
    pub fn motion_state(&self, entity: Entity) -> MotionState {
        *self.component::<MotionState>(entity)
    }

    /// Current orientation of a grazer.
    pub fn orientation(&self, entity: Entity) -> Orientation {
        *self.component::<Orientation>(entity)
    }

    /// Current facing of the herder.
    pub fn facing(&self, entity: Entity) -> Facing {
        *self.component::<Facing>(entity)
    }

    /// Current speeds of an entity.
    pub fn speed(&self, entity: Entity) -> Speed {
        *self.component::<Speed>(entity)
    }

    /// Current animation frame index of an entity.
    pub fn frame_index(&self, entity: Entity) -> usize {
        self.component::<AnimationClock>(entity).frame_index()
    }

    /// Read-only access to the underlying world for bespoke assertions.
    #[must_use]
    pub fn world(&self) -> &World {
        self.app.world()
    }

    fn component<C: Component>(&self, entity: Entity) -> &C {
        self.app
            .world()
            .get::<C>(entity)
            .expect("entity must carry the requested component")
    }
}
