//! Decoy and waypoint construction.

use glam::Vec3;
use hecs::{Entity, EntityBuilder, World};

use decoy_behavior::dice::success_roll;
use decoy_behavior::overrides::{reassert, OverrideSet, OverrideTarget};
use decoy_behavior::profiles::get_profile;
use decoy_core::components::*;
use decoy_core::constants::*;
use decoy_core::enums::{Gender, IncumbentEffect, Species};
use decoy_core::types::{Transform, UP};
use decoy_geometry::SpatialProbe;

use crate::context::{CasterContext, EffectContext};
use crate::error::DecoyError;

/// What to build.
#[derive(Debug, Clone, Copy)]
pub struct DecoyBlueprint {
    pub session: u32,
    pub species: Species,
    pub spawn_point: Vec3,
    pub magnitude: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct CreatedDecoy {
    pub decoy: Entity,
    pub light: Option<Entity>,
}

/// Build an inert decoy at the blueprint's spawn point.
///
/// The decoy shares the caster's collision layer but never collides with the
/// caster. It starts inactive; the movement task reveals it.
pub fn create_decoy(
    ctx: &mut EffectContext<'_>,
    caster: &CasterContext,
    blueprint: &DecoyBlueprint,
) -> Result<CreatedDecoy, DecoyError> {
    if !blueprint.spawn_point.is_finite() {
        return Err(DecoyError::CreationFault(format!(
            "spawn point {} is not finite",
            blueprint.spawn_point
        )));
    }

    let profile = get_profile(blueprint.species);

    let mut gender = if success_roll(ctx.dice, 50) {
        Gender::Male
    } else {
        Gender::Female
    };
    if caster.reputation.temple_of_love > AMOROUS_REPUTATION_THRESHOLD {
        gender = caster.combatant.gender.opposite();
    }

    let body = Body::capsule(caster.layer);
    let mut position = blueprint.spawn_point;
    if ctx.catalog.altitude(ctx.probe, position)? < GROUND_ALIGN_ALTITUDE {
        position = align_to_ground(ctx.probe, position, &body)?;
        if profile.flying {
            position += UP * FLYING_LIFT;
        }
    }

    let mut combat = CombatProfile::default();
    let mut stats = Stats::default();
    let mut skills = Skills::default();
    let mut vitals = Vitals {
        health: profile.max_health,
        max_health: profile.max_health,
        magicka: 0,
        max_magicka: 0,
    };
    let mut resistances = Resistances::default();
    let mut inventory = Inventory::default();
    OverrideSet::for_decoy(blueprint.magnitude, profile.kind).apply(OverrideTarget {
        combat: &mut combat,
        stats: &mut stats,
        skills: &mut skills,
        vitals: &mut vitals,
        resistances: &mut resistances,
        inventory: &mut inventory,
    });

    let mut conditions = Conditions::default();
    reassert(&mut conditions);

    let mut builder = EntityBuilder::new();
    builder
        .add(Name(format!("Decoy [{}]", profile.display_name)))
        .add(Decoy {
            session: blueprint.session,
        })
        .add(Transform::new(position, caster.body.rotation))
        .add(body)
        .add(Combatant {
            kind: profile.kind,
            team: caster.decoy_team(),
            gender,
            species: Some(blueprint.species),
        })
        .add(vitals)
        .add(stats)
        .add(skills)
        .add(combat)
        .add(resistances)
        .add(inventory)
        .add(conditions)
        .add(IncumbentEffects(vec![IncumbentEffect::Decoy]))
        .add(EffectBundles::default())
        .add(Senses::default())
        .add(Motor {
            hostile: true,
            speed: profile.speed,
            flying: profile.flying,
        })
        .add(Presence { active: false })
        .add(Voice::default());
    let decoy = ctx.world.spawn(builder.build());

    ctx.collisions.suppress(caster.entity, decoy);

    let light = ctx.environment.in_darkness.then(|| {
        ctx.world.spawn((
            Transform::at(position + Vec3::from(DECOY_LIGHT_OFFSET)),
            PointLight {
                parent: decoy,
                offset: Vec3::from(DECOY_LIGHT_OFFSET),
                color: DECOY_LIGHT_COLOR,
                soft_shadows: ctx.environment.soft_shadows,
            },
        ))
    });

    log::debug!(
        "created decoy {:?} ({}) at {} for session {}",
        decoy,
        profile.display_name,
        position,
        blueprint.session
    );

    Ok(CreatedDecoy { decoy, light })
}

/// Stand a capsule on the first surface below `position`.
fn align_to_ground(
    probe: &dyn SpatialProbe,
    position: Vec3,
    body: &Body,
) -> Result<Vec3, DecoyError> {
    let standing = body.radius + body.half_height + GROUND_SKIN;
    Ok(match probe.raycast(position, -UP, GROUND_ALIGN_ALTITUDE + standing)? {
        Some(hit) => Vec3::new(position.x, position.y, hit.point.z + standing),
        None => position,
    })
}

/// Invisible steering target the decoy walks toward. It has no combat
/// components, so no system ever treats it as a creature.
pub fn create_waypoint(world: &mut World, destination: Vec3) -> Entity {
    world.spawn((
        Waypoint,
        Name("Decoy Waypoint".to_string()),
        Transform::at(destination),
        Presence { active: false },
    ))
}
