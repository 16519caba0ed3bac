//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems and in the
//! session controller, not in components.

use std::collections::BTreeMap;

use glam::Vec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOTOR_SPEED, PROJECTILE_HIT_DISTANCE};
use crate::enums::*;

/// Number of armor slots on a body.
pub const ARMOR_SLOTS: usize = 7;

/// Human-readable entity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Marks the entity controlled by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an invisible steering target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Waypoint;

/// Marks a decoy and the session that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoy {
    pub session: u32,
}

/// Set once on an entity whose health reached zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;

/// Eye/camera transform of the player, used instead of the body when aiming.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct View {
    pub transform: crate::types::Transform,
}

/// Character collision capsule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub radius: f32,
    pub half_height: f32,
    pub layer: CollisionLayer,
    /// Disabled bodies are ignored by collision and movement checks.
    pub enabled: bool,
}

impl Body {
    pub fn capsule(layer: CollisionLayer) -> Self {
        Self {
            radius: crate::constants::CLEARANCE_RADIUS,
            half_height: crate::constants::CLEARANCE_HALF_HEIGHT,
            layer,
            enabled: true,
        }
    }
}

/// Identity of a combat-capable entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub kind: EntityKind,
    pub team: Team,
    pub gender: Gender,
    pub species: Option<Species>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: i32,
    pub max_health: i32,
    pub magicka: i32,
    pub max_magicka: i32,
}

/// Live primary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub agility: i32,
    pub endurance: i32,
    pub personality: i32,
    pub speed: i32,
    pub luck: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 50,
            intelligence: 50,
            willpower: 50,
            agility: 50,
            endurance: 50,
            personality: 50,
            speed: 50,
            luck: 50,
        }
    }
}

/// Live skill values. Unlisted skills read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills(pub BTreeMap<Skill, i32>);

impl Skills {
    pub fn get(&self, skill: Skill) -> i32 {
        self.0.get(&skill).copied().unwrap_or(0)
    }

    pub fn set(&mut self, skill: Skill, value: i32) {
        self.0.insert(skill, value);
    }

    pub fn with(mut self, skill: Skill, value: i32) -> Self {
        self.set(skill, value);
        self
    }
}

/// Faction standing that matters to decoy creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reputation {
    /// Standing with the temple of love and beauty.
    pub temple_of_love: i32,
}

/// Per-tick modifiers. The host clears these at the start of every tick and
/// running effects apply them again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    pub immune_to_disease: bool,
    pub immune_to_paralysis: bool,
    pub paralyzed: bool,
    pub to_hit_modifier: i32,
    pub magically_concealed: bool,
}

/// Effects currently incumbent on an entity, as reported by its effect manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncumbentEffects(pub Vec<IncumbentEffect>);

impl IncumbentEffects {
    pub fn has(&self, effect: IncumbentEffect) -> bool {
        self.0.contains(&effect)
    }
}

/// Spell bundles hosted by an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBundles(pub Vec<u32>);

/// Combat capabilities of a mobile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatProfile {
    pub min_damage: i32,
    pub max_damage: i32,
    pub has_ranged_attack_1: bool,
    pub has_ranged_attack_2: bool,
    pub prefers_ranged: bool,
    pub casts_magic: bool,
    pub can_open_doors: bool,
    pub parry_sounds: bool,
    pub weight: i32,
    /// Any weapon material can strike this entity.
    pub any_material_hits: bool,
    /// Bleeds magic sparkles instead of blood.
    pub sparkle_blood: bool,
    pub armor: [i32; ARMOR_SLOTS],
}

impl Default for CombatProfile {
    fn default() -> Self {
        Self {
            min_damage: 1,
            max_damage: 10,
            has_ranged_attack_1: false,
            has_ranged_attack_2: false,
            prefers_ranged: false,
            casts_magic: false,
            can_open_doors: true,
            parry_sounds: true,
            weight: 100,
            any_material_hits: true,
            sparkle_blood: false,
            armor: [100; ARMOR_SLOTS],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolerances {
    pub fire: Tolerance,
    pub frost: Tolerance,
    pub magic: Tolerance,
    pub poison: Tolerance,
    pub shock: Tolerance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistances {
    pub fire: i32,
    pub frost: i32,
    pub magic: i32,
    pub shock: i32,
    pub tolerances: Tolerances,
    pub absorbs_spells: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<u32>,
    pub equipped: Vec<u32>,
}

/// AI perception and current targeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Senses {
    pub target: Option<Entity>,
    pub secondary_target: Option<Entity>,
    pub sight_radius: f32,
    pub hearing_radius: f32,
}

impl Default for Senses {
    fn default() -> Self {
        Self {
            target: None,
            secondary_target: None,
            sight_radius: 25.0,
            hearing_radius: 12.5,
        }
    }
}

/// AI locomotion. Presence of a motor is what makes an entity hostile-capable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    pub hostile: bool,
    pub speed: f32,
    pub flying: bool,
}

impl Default for Motor {
    fn default() -> Self {
        Self {
            hostile: false,
            speed: DEFAULT_MOTOR_SPEED,
            flying: false,
        }
    }
}

/// Whether the entity is active in the scene (visible, simulated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub active: bool,
}

/// Voice channel; a cue is only started while the channel is silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Seconds left of the cue currently playing.
    pub busy_secs: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// A collision volume. Child parts point at the entity that owns them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub layer: CollisionLayer,
    pub radius: f32,
    pub parent: Option<Entity>,
    /// Offset from the parent's position (ignored without a parent).
    pub offset: Vec3,
}

/// An arrow or spell missile in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub launcher: Option<Entity>,
    pub lifetime_secs: f32,
}

/// Decoys a projectile has been diverted from, resolved when it flies close enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileDecoys {
    decoys: Vec<Entity>,
}

impl ProjectileDecoys {
    /// Record a decoy. A decoy already recorded is not added twice.
    pub fn add_decoy(&mut self, decoy: Entity) {
        if !self.decoys.contains(&decoy) {
            self.decoys.push(decoy);
        }
    }

    /// Drop every decoy for which `alive` returns false.
    pub fn purge(&mut self, mut alive: impl FnMut(Entity) -> bool) {
        self.decoys.retain(|&decoy| alive(decoy));
    }

    /// Decoys within hit distance of `projectile`, given a position lookup.
    pub fn hits(
        &self,
        projectile: Vec3,
        mut position_of: impl FnMut(Entity) -> Option<Vec3>,
    ) -> Vec<Entity> {
        self.decoys
            .iter()
            .copied()
            .filter(|&decoy| {
                position_of(decoy)
                    .is_some_and(|pos| pos.distance(projectile) < PROJECTILE_HIT_DISTANCE)
            })
            .collect()
    }

    pub fn decoys(&self) -> &[Entity] {
        &self.decoys
    }
}

/// Local point light attached to another entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub parent: Entity,
    pub offset: Vec3,
    pub color: [f32; 3],
    pub soft_shadows: bool,
}
