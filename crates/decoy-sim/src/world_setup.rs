//! Entity spawn factories for setting up the simulation world.
//!
//! Creates casters, hostile creatures and projectiles with the component
//! bundles the decoy systems expect. Hosts and tests both build their
//! scenes through these.

use glam::Vec3;
use hecs::{Entity, World};

use decoy_behavior::profiles::get_profile;
use decoy_core::components::*;
use decoy_core::enums::*;
use decoy_core::types::{Transform, UP};

/// Collision radius of a projectile's main volume.
const PROJECTILE_RADIUS: f32 = 0.1;

/// Collision radius of a projectile's child parts.
const PROJECTILE_PART_RADIUS: f32 = 0.05;

/// Attributes a caster casts with.
#[derive(Debug, Clone)]
pub struct CasterLoadout {
    pub gender: Gender,
    pub stats: Stats,
    pub skills: Skills,
    pub reputation: Reputation,
    pub magicka: i32,
    pub max_magicka: i32,
}

impl Default for CasterLoadout {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            stats: Stats::default(),
            skills: Skills::default().with(Skill::Illusion, 50),
            reputation: Reputation::default(),
            magicka: 0,
            max_magicka: 100,
        }
    }
}

/// Spawn the player with an eye view `eye_height` above the body.
pub fn spawn_player(
    world: &mut World,
    transform: Transform,
    eye_height: f32,
    loadout: CasterLoadout,
) -> Entity {
    let view = View {
        transform: Transform::new(transform.position + UP * eye_height, transform.rotation),
    };
    world.spawn((
        Player,
        Name("Player".to_string()),
        transform,
        view,
        Body::capsule(CollisionLayer::Player),
        Combatant {
            kind: EntityKind::Player,
            team: Team::Player,
            gender: loadout.gender,
            species: None,
        },
        Vitals {
            health: 100,
            max_health: 100,
            magicka: loadout.magicka,
            max_magicka: loadout.max_magicka,
        },
        loadout.stats,
        loadout.skills,
        loadout.reputation,
        Conditions::default(),
        IncumbentEffects::default(),
        Presence { active: true },
    ))
}

/// Spawn a non-player spellcaster of `species` fighting for `team`.
pub fn spawn_caster(
    world: &mut World,
    transform: Transform,
    team: Team,
    species: Species,
    loadout: CasterLoadout,
) -> Entity {
    let profile = get_profile(species);
    world.spawn((
        Name(profile.display_name.to_string()),
        transform,
        Body::capsule(CollisionLayer::Enemies),
        Combatant {
            kind: profile.kind,
            team,
            gender: loadout.gender,
            species: Some(species),
        },
        Vitals {
            health: profile.max_health,
            max_health: profile.max_health,
            magicka: loadout.magicka,
            max_magicka: loadout.max_magicka,
        },
        loadout.stats,
        loadout.skills,
        loadout.reputation,
        Conditions::default(),
        IncumbentEffects::default(),
        Presence { active: true },
    ))
}

/// Spawn a hostile creature of `species` at `position`, not yet targeting anything.
pub fn spawn_hostile(world: &mut World, position: Vec3, team: Team, species: Species) -> Entity {
    let profile = get_profile(species);
    world.spawn((
        Name(profile.display_name.to_string()),
        Transform::at(position),
        Body::capsule(CollisionLayer::Enemies),
        Combatant {
            kind: profile.kind,
            team,
            gender: Gender::Male,
            species: Some(species),
        },
        Vitals {
            health: profile.max_health,
            max_health: profile.max_health,
            magicka: 0,
            max_magicka: 0,
        },
        Motor {
            hostile: true,
            speed: profile.speed,
            flying: profile.flying,
        },
        Senses::default(),
        Presence { active: true },
    ))
}

/// Spawn a projectile with one child collider per entry of `parts`
/// (offsets from the projectile).
pub fn spawn_projectile(
    world: &mut World,
    position: Vec3,
    velocity: Vec3,
    launcher: Option<Entity>,
    lifetime_secs: f32,
    parts: &[Vec3],
) -> Entity {
    let projectile = world.spawn((
        Name("Projectile".to_string()),
        Transform::at(position),
        Velocity(velocity),
        Projectile {
            launcher,
            lifetime_secs,
        },
        Collider {
            layer: CollisionLayer::Projectiles,
            radius: PROJECTILE_RADIUS,
            parent: None,
            offset: Vec3::ZERO,
        },
    ));
    for &offset in parts {
        world.spawn((
            Transform::at(position + offset),
            Collider {
                layer: CollisionLayer::Projectiles,
                radius: PROJECTILE_PART_RADIUS,
                parent: Some(projectile),
                offset,
            },
        ));
    }
    projectile
}
