//! Flee-steering math: speed interpolation and heading discretisation.
//!
//! These functions are pure so the interpolation curve and the orientation
//! mapping can be exercised without an ECS world; the [`crate::sim`] systems
//! feed them live positions each tick.

use glam::Vec2;

use crate::animation::Orientation;

/// Interpolates a grazer's speed from its distance to the threat.
///
/// At or beyond `flee_radius` the grazer ambles at `base_speed`. Inside the
/// radius the speed climbs linearly, reaching `max_speed` when the threat is
/// on top of the grazer. With validated configuration the result always lies
/// in `[base_speed, max_speed]`.
///
/// # Examples
/// ```
/// use paddock::steering::flee_speed;
///
/// assert_eq!(flee_speed(150.0, 100.0, 3.0, 5.0), 3.0);
/// assert_eq!(flee_speed(50.0, 100.0, 3.0, 5.0), 4.0);
/// assert_eq!(flee_speed(0.0, 100.0, 3.0, 5.0), 5.0);
/// ```
#[must_use]
pub fn flee_speed(distance: f32, flee_radius: f32, base_speed: f32, max_speed: f32) -> f32 {
    if distance >= flee_radius {
        return base_speed;
    }
    let urgency = (flee_radius - distance) / flee_radius;
    base_speed + urgency * (max_speed - base_speed)
}

/// Unit vector pointing from the threat towards the agent.
///
/// Checks that the offset is finite and non-zero before normalising;
/// otherwise returns the zero vector, in which case the agent has no heading
/// this tick.
#[must_use]
pub fn away_heading(position: Vec2, threat: Vec2) -> Vec2 {
    let offset = position - threat;
    if !offset.is_finite() {
        return Vec2::ZERO;
    }
    offset.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Discretises a heading vector into one of the four sprite orientations.
///
/// Horizontal wins strictly (`|dx| > |dy|`); the sheet's west row faces
/// screen-right, so positive `dx` maps to `West`. Returns `None` for the
/// zero vector: an agent sitting exactly on the threat keeps its previous
/// orientation.
#[must_use]
pub fn orientation_for(heading: Vec2) -> Option<Orientation> {
    if heading == Vec2::ZERO {
        return None;
    }
    let orientation = if heading.x.abs() > heading.y.abs() {
        if heading.x > 0.0 {
            Orientation::West
        } else {
            Orientation::East
        }
    } else if heading.y > 0.0 {
        Orientation::South
    } else {
        Orientation::North
    };
    Some(orientation)
}
