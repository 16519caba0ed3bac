//! Projectile kinematics: flight, child parts, impact and expiry.

use hecs::{Entity, World};

use decoy_core::components::{Body, Collider, Dead, Projectile, Velocity};
use decoy_core::types::Transform;

use crate::collisions::CollisionFilter;

/// Move projectiles and their parts, then consume the ones that struck a
/// body or ran out of time. Returns the despawned projectiles.
pub fn run(world: &mut World, collisions: &mut CollisionFilter, dt: f32) -> Vec<Entity> {
    let mut finished = Vec::new();
    for (entity, (transform, velocity, projectile)) in
        world.query_mut::<(&mut Transform, Option<&Velocity>, &mut Projectile)>()
    {
        if let Some(velocity) = velocity {
            transform.position += velocity.0 * dt;
        }
        projectile.lifetime_secs -= dt;
        if projectile.lifetime_secs <= 0.0 {
            finished.push(entity);
        }
    }

    follow_parts(world);

    for (entity, (transform, collider, projectile)) in world
        .query::<(&Transform, &Collider, &Projectile)>()
        .iter()
    {
        if finished.contains(&entity) {
            continue;
        }
        let struck = world
            .query::<(&Transform, &Body)>()
            .without::<&Dead>()
            .iter()
            .any(|(body_entity, (body_transform, body))| {
                body.enabled
                    && Some(body_entity) != projectile.launcher
                    && !collisions.is_suppressed(entity, body_entity)
                    && body_transform.position.distance(transform.position)
                        < body.radius + collider.radius
            });
        if struck {
            finished.push(entity);
        }
    }

    for &projectile in &finished {
        despawn_with_parts(world, collisions, projectile);
    }
    finished
}

/// Child colliders ride along with their parent.
fn follow_parts(world: &mut World) {
    let mut updates = Vec::new();
    for (entity, collider) in world.query::<&Collider>().iter() {
        if let Some(parent) = collider.parent {
            if let Ok(t) = world.get::<&Transform>(parent) {
                updates.push((entity, t.position + t.rotation * collider.offset));
            }
        }
    }
    for (entity, position) in updates {
        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            transform.position = position;
        }
    }
}

/// Remove a projectile, its child parts, and every collision pair naming them.
pub fn despawn_with_parts(world: &mut World, collisions: &mut CollisionFilter, projectile: Entity) {
    let parts: Vec<Entity> = world
        .query::<&Collider>()
        .iter()
        .filter(|(_, c)| c.parent == Some(projectile))
        .map(|(e, _)| e)
        .collect();
    for part in parts {
        collisions.forget(part);
        let _ = world.despawn(part);
    }
    collisions.forget(projectile);
    let _ = world.despawn(projectile);
}
