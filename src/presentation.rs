//! Draw-list publication for the external rendering collaborator.
//!
//! The simulation never blits anything itself. After the behaviour systems
//! finish a tick, [`collect_draw_list_system`] rebuilds the [`DrawList`]
//! resource: one command per entity naming the sprite handle to show, the
//! box to place it in, and whether to mirror it horizontally. The renderer
//! remains a passive observer of simulation state.

use bevy::prelude::*;
use serde::Serialize;

use crate::animation::{AnimationClock, Facing, FrameCycles, MotionState, Orientation, SpriteHandle};
use crate::components::{Footprint, Position};
use crate::geometry::Rect;

/// One sprite to blit this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    /// Atlas handle of the frame to show.
    pub sprite: SpriteHandle,
    /// Placement box; top-left equals the entity's position.
    pub rect: Rect,
    /// Whether the renderer must mirror the sprite horizontally.
    pub flip_x: bool,
}

/// Per-tick draw commands, rebuilt after every behaviour pass.
///
/// Commands are ordered by entity id, which for this simulation (no
/// despawns) matches spawn order: the herder first, then the grazers.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// The commands for the most recently completed tick.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Publishes the tick's draw commands into the [`DrawList`] resource.
pub fn collect_draw_list_system(
    mut draw_list: ResMut<DrawList>,
    entities: Query<(
        Entity,
        &Position,
        &Footprint,
        &MotionState,
        Option<&Orientation>,
        Option<&Facing>,
        &FrameCycles,
        &AnimationClock,
    )>,
) {
    let mut rows: Vec<_> = entities.iter().collect();
    rows.sort_by_key(|(entity, ..)| *entity);

    draw_list.commands.clear();
    for (_, position, footprint, state, orientation, facing, cycles, clock) in rows {
        let heading = orientation.copied().unwrap_or_default();
        let cycle = cycles.cycle(*state, heading);
        draw_list.commands.push(DrawCommand {
            sprite: cycle.frame(clock.frame_index()),
            rect: footprint.rect_at(*position),
            flip_x: facing.copied().is_some_and(Facing::flip_x),
        });
    }
}
