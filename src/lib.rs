//! Core logic for the paddock herding simulation.
//!
//! A player-controlled herder and a handful of skittish grazers move inside
//! a walled arena. The crate owns the motion, collision, and behaviour-state
//! core: the shared AABB collision gate, flee steering with distance-scaled
//! speed, and the Idle/Moving animation state machine. Input decoding, asset
//! loading, and rendering are external collaborators that talk to the
//! simulation through resources.
pub mod animation;
pub mod arena;
pub mod components;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod logging;
pub mod movement;
pub mod presentation;
pub mod sim;
pub mod spawn_world;
pub mod steering;
pub use constants::*;

// Re-export commonly used items
pub use animation::{
    AnimationClock, Facing, FrameCycle, FrameCycles, MotionState, Orientation, SpriteHandle,
};
pub use arena::{build_perimeter, BarrierField};
pub use components::{Footprint, Herder, Position, Skittish, Speed};
pub use config::{ArenaConfig, ConfigError, GrazerConfig, HerderConfig, SimConfig};
pub use geometry::{collides_any, Rect};
pub use logging::init as init_logging;
pub use movement::{gated_destination, DirectionIntent};
pub use presentation::{collect_draw_list_system, DrawCommand, DrawList};
pub use sim::{animate_system, drive_herder_system, flee_system, HerdingPlugin};
pub use spawn_world::spawn_world_system;
pub use steering::{away_heading, flee_speed, orientation_for};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use paddock::prelude::*;
    //! ```

    pub use crate::animation::{Facing, MotionState, Orientation};
    pub use crate::arena::BarrierField;
    pub use crate::components::{Herder, Position, Skittish};
    pub use crate::config::SimConfig;
    pub use crate::movement::DirectionIntent;
    pub use crate::presentation::DrawList;
    pub use crate::sim::HerdingPlugin;
}
