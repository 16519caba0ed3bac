//! Spatial lookups over entity positions.

use glam::Vec3;
use hecs::{Entity, World};

use decoy_core::components::{Collider, Combatant, Dead, Presence};
use decoy_core::enums::CollisionLayer;
use decoy_core::types::Transform;

/// Active, living creatures within `radius` of `center`.
pub fn find_nearby_entities(world: &World, center: Vec3, radius: f32) -> Vec<Entity> {
    let mut nearby: Vec<Entity> = world
        .query::<(&Transform, &Combatant, Option<&Presence>)>()
        .without::<&Dead>()
        .iter()
        .filter(|(_, (transform, _, presence))| {
            presence.map_or(true, |p| p.active) && transform.position.distance(center) <= radius
        })
        .map(|(entity, _)| entity)
        .collect();
    nearby.sort_by_key(|e| e.to_bits());
    nearby
}

/// Collision volumes on `layer` overlapping the sphere at `center`.
pub fn overlap_colliders(
    world: &World,
    center: Vec3,
    radius: f32,
    layer: CollisionLayer,
) -> Vec<Entity> {
    let mut hits: Vec<Entity> = world
        .query::<(&Transform, &Collider)>()
        .iter()
        .filter(|(_, (transform, collider))| {
            collider.layer == layer
                && transform.position.distance(center) <= radius + collider.radius
        })
        .map(|(entity, _)| entity)
        .collect();
    hits.sort_by_key(|e| e.to_bits());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_skips_inactive_dead_and_far() {
        let mut world = World::new();
        let near = world.spawn((Transform::at(Vec3::new(1.0, 0.0, 0.0)), Combatant::default()));
        world.spawn((
            Transform::at(Vec3::new(1.0, 1.0, 0.0)),
            Combatant::default(),
            Presence { active: false },
        ));
        world.spawn((Transform::at(Vec3::new(0.5, 0.0, 0.0)), Combatant::default(), Dead));
        world.spawn((Transform::at(Vec3::new(9.0, 0.0, 0.0)), Combatant::default()));
        world.spawn((Transform::at(Vec3::ZERO),));

        assert_eq!(find_nearby_entities(&world, Vec3::ZERO, 3.0), vec![near]);
    }

    #[test]
    fn test_overlap_counts_collider_radius() {
        let mut world = World::new();
        let edge = world.spawn((
            Transform::at(Vec3::new(5.2, 0.0, 0.0)),
            Collider {
                layer: CollisionLayer::Projectiles,
                radius: 0.3,
                parent: None,
                offset: Vec3::ZERO,
            },
        ));
        world.spawn((
            Transform::at(Vec3::new(1.0, 0.0, 0.0)),
            Collider {
                layer: CollisionLayer::Enemies,
                radius: 0.3,
                parent: None,
                offset: Vec3::ZERO,
            },
        ));

        let hits = overlap_colliders(&world, Vec3::ZERO, 5.0, CollisionLayer::Projectiles);
        assert_eq!(hits, vec![edge]);
    }
}
