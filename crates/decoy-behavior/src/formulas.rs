//! Skill-check and scaling formulas.

use glam::Vec3;

use decoy_core::constants::*;
use decoy_core::enums::EntityKind;
use decoy_core::settings::{EffectCosts, EffectSettings, DURATION_COSTS, MAGNITUDE_COSTS};
use decoy_core::types::UP;

use crate::dice::Dice;

/// Caster distance below which an unconcealed caster dispels the decoy.
/// Stronger illusions tolerate closer proximity.
pub fn proximity_threshold(magnitude: i32) -> f32 {
    PROXIMITY_BASE - magnitude as f32 / PROXIMITY_MAGNITUDE_DIVISOR
}

/// Chance to keep the illusion up for another round.
pub fn maintain_chance(language_skill: i32, willpower: i32, personality: i32) -> i32 {
    language_skill + willpower / 3 + personality / 3
}

/// Chance that an agitation pulse happens at all.
pub fn agitate_chance(personality: i32) -> i32 {
    personality / 2
}

pub fn agitate_radius(personality: i32) -> f32 {
    personality as f32 / 7.0 + 2.0
}

pub fn dodge_distance(magnitude: i32) -> f32 {
    magnitude as f32 * DODGE_DISTANCE_PER_MAGNITUDE
}

/// Lateral dodge axis for a decoy shot at from `launcher`. Zero when the
/// launcher is straight above or below.
pub fn dodge_axis(launcher: Vec3, decoy: Vec3) -> Vec3 {
    (decoy - launcher).cross(UP).normalize_or_zero()
}

/// Dodging skill of a decoy. Monsters are easier to hit by default, so they get a bonus.
pub fn decoy_dodging(magnitude: i32, kind: EntityKind) -> i32 {
    let dodging = (magnitude * 4).clamp(1, 1000);
    match kind {
        EntityKind::EnemyMonster => dodging + MONSTER_DODGE_BONUS,
        _ => dodging,
    }
}

/// Caster level used for magnitude and duration scaling.
pub fn caster_level(illusion_skill: i32) -> i32 {
    (illusion_skill / SKILL_PER_LEVEL).max(1)
}

/// Roll the magnitude of a cast, clamped to 1..=100.
pub fn roll_magnitude(settings: &EffectSettings, level: i32, dice: &mut dyn Dice) -> i32 {
    let steps = level / settings.magnitude_per_level.max(1);
    let base = dice.between(settings.magnitude_base_min, settings.magnitude_base_max);
    let plus = dice.between(settings.magnitude_plus_min, settings.magnitude_plus_max);
    (base + plus * steps).clamp(1, 100)
}

/// Number of rounds a cast lasts.
pub fn duration_rounds(settings: &EffectSettings, level: i32) -> i32 {
    let steps = level / settings.duration_per_level.max(1);
    (settings.duration_base + settings.duration_plus * steps).max(1)
}

fn component_gold(costs: &EffectCosts, starting: f32, increase: f32, per_level: i32) -> i32 {
    let per_level = per_level.max(1) as f32;
    (costs.offset_gold as f32 + costs.cost_a * starting + costs.cost_b * (increase / per_level).trunc())
        .trunc() as i32
}

/// Spell point cost of the decoy effect for a caster with the given Illusion skill.
pub fn spell_point_cost(settings: &EffectSettings, illusion_skill: i32) -> i32 {
    let duration = component_gold(
        &DURATION_COSTS,
        settings.duration_base as f32,
        settings.duration_plus as f32,
        settings.duration_per_level,
    );
    let magnitude = component_gold(
        &MAGNITUDE_COSTS,
        (settings.magnitude_base_min + settings.magnitude_base_max) as f32 / 2.0,
        (settings.magnitude_plus_min + settings.magnitude_plus_max) as f32 / 2.0,
        settings.magnitude_per_level,
    );
    let gold = duration + magnitude;
    let skill = illusion_skill.clamp(0, 100);
    (gold * (110 - skill) / 400).max(MIN_SPELL_POINT_COST)
}
