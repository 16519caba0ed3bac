//! Projectile interception: collision suppression, lateral dodges and the
//! per-projectile decoy trackers.

use hecs::{Entity, World};

use decoy_behavior::dice::{success_roll, Dice};
use decoy_behavior::formulas::{dodge_axis, dodge_distance};
use decoy_core::components::{Body, Collider, Projectile, ProjectileDecoys, Senses, Vitals};
use decoy_core::constants::{DODGE_MIN_LAUNCHER_DISTANCE, PROJECTILE_SCAN_RADIUS};
use decoy_core::enums::CollisionLayer;
use decoy_core::types::Transform;
use decoy_geometry::SpatialProbe;

use crate::collisions::CollisionFilter;
use crate::error::DecoyError;
use crate::placement::can_move_to;
use crate::systems::proximity::overlap_colliders;

/// Projectile owning `collider`: the collider itself, or the parent of a child part.
pub fn owning_projectile(world: &World, collider: Entity) -> Option<Entity> {
    if world.satisfies::<&Projectile>(collider).unwrap_or(false) {
        return Some(collider);
    }
    let parent = world.get::<&Collider>(collider).ok()?.parent?;
    world
        .satisfies::<&Projectile>(parent)
        .unwrap_or(false)
        .then_some(parent)
}

/// Scan around the decoy for projectiles, divert each new one and record the
/// decoy on its tracker.
pub fn check_for_projectiles(
    world: &mut World,
    probe: &dyn SpatialProbe,
    dice: &mut dyn Dice,
    collisions: &mut CollisionFilter,
    decoy: Entity,
    magnitude: i32,
) -> Result<(), DecoyError> {
    let center = world.get::<&Transform>(decoy)?.position;

    let mut projectiles = Vec::new();
    for collider in overlap_colliders(world, center, PROJECTILE_SCAN_RADIUS, CollisionLayer::Projectiles) {
        if let Some(projectile) = owning_projectile(world, collider) {
            if !projectiles.contains(&projectile) {
                projectiles.push(projectile);
            }
        }
    }

    for projectile in projectiles {
        if suppress_projectile(world, collisions, projectile, decoy) {
            if let Err(e) = dodge(world, probe, dice, projectile, decoy, magnitude) {
                log::warn!("decoy {:?} failed to dodge: {}", decoy, e);
            }
        }

        let tracked = world
            .get::<&mut ProjectileDecoys>(projectile)
            .map(|mut tracker| tracker.add_decoy(decoy))
            .is_ok();
        if !tracked {
            let mut tracker = ProjectileDecoys::default();
            tracker.add_decoy(decoy);
            world.insert_one(projectile, tracker)?;
        }
    }
    Ok(())
}

/// Stop every part of `projectile` from colliding with `decoy`.
/// Returns false if the projectile was already ignoring the decoy.
pub fn suppress_projectile(
    world: &World,
    collisions: &mut CollisionFilter,
    projectile: Entity,
    decoy: Entity,
) -> bool {
    if collisions.is_suppressed(projectile, decoy) {
        return false;
    }
    collisions.suppress(projectile, decoy);
    for (part, collider) in world.query::<&Collider>().iter() {
        if collider.parent == Some(projectile) {
            collisions.suppress(part, decoy);
        }
    }
    true
}

/// Sidestep a projectile aimed at the decoy by a launcher far enough away.
/// Returns whether the decoy moved.
pub fn dodge(
    world: &mut World,
    probe: &dyn SpatialProbe,
    dice: &mut dyn Dice,
    projectile: Entity,
    decoy: Entity,
    magnitude: i32,
) -> Result<bool, DecoyError> {
    let Some(launcher) = world.get::<&Projectile>(projectile)?.launcher else {
        return Ok(false);
    };
    let aimed = world
        .get::<&Senses>(launcher)
        .is_ok_and(|s| s.target == Some(decoy));
    if !aimed {
        return Ok(false);
    }

    let from = world.get::<&Transform>(launcher)?.position;
    let position = world.get::<&Transform>(decoy)?.position;
    if from.distance(position) < DODGE_MIN_LAUNCHER_DISTANCE {
        return Ok(false);
    }

    let side = if success_roll(dice, 50) { 1.0 } else { -1.0 };
    let direction = dodge_axis(from, position) * side;
    let distance = dodge_distance(magnitude);

    with_body_disabled(world, decoy, |world| {
        let target = match can_move_to(probe, position, direction, distance)? {
            Some(point) => Some(point),
            None => can_move_to(probe, position, -direction, distance)?,
        };
        match target {
            Some(point) => {
                world.get::<&mut Transform>(decoy)?.position = point;
                Ok(true)
            }
            None => Ok(false),
        }
    })
}

/// Run `f` with the entity's body disabled, re-enabling it whatever `f` returns.
pub fn with_body_disabled<T>(
    world: &mut World,
    entity: Entity,
    f: impl FnOnce(&mut World) -> Result<T, DecoyError>,
) -> Result<T, DecoyError> {
    set_body_enabled(world, entity, false);
    let result = f(world);
    set_body_enabled(world, entity, true);
    result
}

fn set_body_enabled(world: &mut World, entity: Entity, enabled: bool) {
    if let Ok(mut body) = world.get::<&mut Body>(entity) {
        body.enabled = enabled;
    }
}

/// Per-projectile tracker sweep: forget vanished decoys, then kill any decoy
/// a projectile has reached.
pub fn sweep_trackers(world: &mut World) {
    let mut kills = Vec::new();
    {
        let mut query = world.query::<(&Transform, &mut ProjectileDecoys)>();
        for (_, (transform, tracker)) in query.iter() {
            tracker.purge(|decoy| world.contains(decoy));
            kills.extend(tracker.hits(transform.position, |decoy| {
                world.get::<&Transform>(decoy).ok().map(|t| t.position)
            }));
        }
    }

    for decoy in kills {
        if let Ok(mut vitals) = world.get::<&mut Vitals>(decoy) {
            if vitals.health > 0 {
                log::debug!("projectile reached decoy {:?}", decoy);
            }
            vitals.health = 0;
        }
    }
}
