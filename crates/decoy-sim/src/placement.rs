//! Spawn location search and destination finding.
//!
//! The spawn search walks a fixed fan of probe directions in front of the
//! viewer and accepts the first point with line of sight and room for a
//! medium-sized body.

use glam::{Quat, Vec3};

use decoy_core::constants::*;
use decoy_core::types::{Transform, FORWARD};
use decoy_geometry::{ProbeError, SpatialProbe};

/// One probe direction of the spawn fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeTuple {
    pub distance: f32,
    pub yaw_degrees: f32,
    pub pitch_down_degrees: f32,
}

/// Probe tuples in evaluation order: distance, then yaw, then pitch.
pub fn scan_pattern(looking_down: bool) -> impl Iterator<Item = ProbeTuple> {
    let distances = if looking_down {
        SCAN_DISTANCES_LOOKING_DOWN
    } else {
        SCAN_DISTANCES_NORMAL
    };
    distances.into_iter().flat_map(|distance| {
        SCAN_YAW_DEGREES.into_iter().flat_map(move |yaw_degrees| {
            SCAN_PITCH_DOWN_DEGREES
                .into_iter()
                .map(move |pitch_down_degrees| ProbeTuple {
                    distance,
                    yaw_degrees,
                    pitch_down_degrees,
                })
        })
    })
}

/// Direction of `tuple` relative to `view`'s facing.
pub fn tuple_direction(view: &Transform, tuple: &ProbeTuple) -> Vec3 {
    let turn = Quat::from_rotation_z(-tuple.yaw_degrees.to_radians())
        * Quat::from_rotation_x(-tuple.pitch_down_degrees.to_radians());
    view.rotation * turn * FORWARD
}

/// Point `distance` along `direction` from `from`, if the way is unobstructed
/// and a medium capsule fits there.
pub fn can_move_to(
    probe: &dyn SpatialProbe,
    from: Vec3,
    direction: Vec3,
    distance: f32,
) -> Result<Option<Vec3>, ProbeError> {
    let direction = decoy_geometry::probe::unit_direction(direction)?;
    if !probe.has_line_of_sight(from, direction, distance)? {
        return Ok(None);
    }
    let location = from + direction * distance;
    if !probe.has_clearance(location, CLEARANCE_RADIUS, CLEARANCE_HALF_HEIGHT)? {
        return Ok(None);
    }
    Ok(Some(location))
}

/// First point of the scan fan the decoy can appear at.
pub fn find_spawn_point(
    probe: &dyn SpatialProbe,
    view: &Transform,
    looking_down: bool,
) -> Result<Option<Vec3>, ProbeError> {
    for tuple in scan_pattern(looking_down) {
        let direction = tuple_direction(view, &tuple);
        if let Some(location) = can_move_to(probe, view.position, direction, tuple.distance)? {
            return Ok(Some(location));
        }
    }
    Ok(None)
}

/// Where the decoy heads: the first surface along the view ray, pulled back
/// slightly, or the end of the ray when nothing is hit.
pub fn find_final_destination(
    probe: &dyn SpatialProbe,
    view: &Transform,
) -> Result<Vec3, ProbeError> {
    let forward = view.forward();
    let reach = match probe.raycast(view.position, forward, DESTINATION_MAX_RANGE)? {
        Some(hit) => hit.distance - DESTINATION_PULLBACK,
        None => DESTINATION_MAX_RANGE,
    };
    Ok(view.position + forward * reach)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_pattern_order() {
        let tuples: Vec<_> = scan_pattern(false).collect();
        assert_eq!(tuples.len(), 54);
        assert_eq!(
            tuples[0],
            ProbeTuple {
                distance: 1.8,
                yaw_degrees: 0.0,
                pitch_down_degrees: 25.0
            }
        );
        assert_eq!(tuples[1].pitch_down_degrees, 0.0);
        assert_eq!(tuples[3].yaw_degrees, 5.0);
        assert_eq!(tuples[27].distance, 2.8);

        let far: Vec<_> = scan_pattern(true).collect();
        assert_eq!(far[0].distance, 3.0);
        assert_eq!(far[53].distance, 4.0);
    }

    #[test]
    fn test_tuple_direction_is_relative_to_view() {
        let view = Transform::facing(Vec3::ZERO, 90.0, 0.0);
        let tuple = ProbeTuple {
            distance: 1.0,
            yaw_degrees: 0.0,
            pitch_down_degrees: 25.0,
        };
        let dir = tuple_direction(&view, &tuple);
        assert!(dir.x > 0.8, "follows the view yaw");
        assert!(dir.z < -0.4, "tilts down");
    }
}
