//! Motor system: hostile creatures walk toward their target.

use glam::Vec3;
use hecs::{Entity, World};

use decoy_core::components::{Body, Dead, Motor, PointLight, Presence, Senses};
use decoy_core::constants::{CLEARANCE_HALF_HEIGHT, CLEARANCE_RADIUS, MOTOR_STOP_DISTANCE};
use decoy_core::types::Transform;
use decoy_geometry::SpatialProbe;

/// Step every active hostile motor toward its target, stopping short of it.
/// A step into a spot without clearance is skipped, leaving the walker stalled.
pub fn run(world: &mut World, probe: &dyn SpatialProbe, dt: f32) {
    let mut moves: Vec<(Entity, Vec3)> = Vec::new();
    {
        let mut query = world
            .query::<(&Transform, &Motor, &Senses, Option<&Presence>, Option<&Body>)>()
            .without::<&Dead>();
        for (entity, (transform, motor, senses, presence, body)) in query.iter() {
            if !motor.hostile || !presence.map_or(true, |p| p.active) {
                continue;
            }
            let Some(target) = senses.target else {
                continue;
            };
            let Ok(goal) = world.get::<&Transform>(target).map(|t| t.position) else {
                continue;
            };

            let mut offset = goal - transform.position;
            if !motor.flying {
                offset.z = 0.0;
            }
            let distance = offset.length();
            if distance <= MOTOR_STOP_DISTANCE {
                continue;
            }
            let step = (motor.speed * dt).min(distance - MOTOR_STOP_DISTANCE);
            let next = transform.position + offset / distance * step;

            let (radius, half_height) =
                body.map_or((CLEARANCE_RADIUS, CLEARANCE_HALF_HEIGHT), |b| {
                    (b.radius, b.half_height)
                });
            match probe.has_clearance(next, radius, half_height) {
                Ok(true) => moves.push((entity, next)),
                Ok(false) => {}
                Err(e) => log::warn!("motor clearance check failed for {:?}: {}", entity, e),
            }
        }
    }

    for (entity, next) in moves {
        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            transform.position = next;
        }
    }

    follow_parents(world);
}

/// Keep attached lights at their offset from the entity carrying them.
pub fn follow_parents(world: &mut World) {
    let mut updates = Vec::new();
    for (entity, light) in world.query::<&PointLight>().iter() {
        if let Ok(parent) = world.get::<&Transform>(light.parent) {
            updates.push((entity, parent.position + parent.rotation * light.offset));
        }
    }
    for (entity, position) in updates {
        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            transform.position = position;
        }
    }
}
