//! The decoy override set.
//!
//! A decoy is a normal mobile with its combat attributes stripped. The values
//! are applied once at creation; the per-tick modifiers that the host wipes
//! every frame are put back by `reassert`.

use decoy_core::components::*;
use decoy_core::constants::*;
use decoy_core::enums::{EntityKind, Skill, Tolerance};

use crate::formulas::decoy_dodging;

/// Canonical decoy values for one magnitude and body kind.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideSet {
    pub dodging: i32,
}

/// Mutable views of the components an override set touches.
pub struct OverrideTarget<'a> {
    pub combat: &'a mut CombatProfile,
    pub stats: &'a mut Stats,
    pub skills: &'a mut Skills,
    pub vitals: &'a mut Vitals,
    pub resistances: &'a mut Resistances,
    pub inventory: &'a mut Inventory,
}

impl OverrideSet {
    pub fn for_decoy(magnitude: i32, kind: EntityKind) -> Self {
        Self {
            dodging: decoy_dodging(magnitude, kind),
        }
    }

    pub fn apply(&self, target: OverrideTarget<'_>) {
        let combat = target.combat;
        combat.min_damage = 0;
        combat.max_damage = 0;
        combat.has_ranged_attack_1 = false;
        combat.has_ranged_attack_2 = false;
        combat.prefers_ranged = false;
        combat.casts_magic = false;
        combat.can_open_doors = false;
        combat.parry_sounds = false;
        combat.weight = 0;
        combat.any_material_hits = true;
        combat.sparkle_blood = true;
        combat.armor = [DECOY_ARMOR; ARMOR_SLOTS];

        target.stats.willpower = 10;
        target.stats.strength = 20;
        target.stats.agility = 100;

        let skills = target.skills;
        skills.set(Skill::Dodging, self.dodging);
        skills.set(Skill::Stealth, 0);
        skills.set(Skill::HandToHand, 1);
        skills.set(Skill::Streetwise, DECOY_STREETWISE);

        target.vitals.magicka = 0;
        target.vitals.max_magicka = 0;
        target.vitals.health = 1;

        // Neutral values with critical weakness keep "resisted" feedback from appearing.
        *target.resistances = Resistances {
            fire: 0,
            frost: 0,
            magic: 0,
            shock: 0,
            tolerances: Tolerances {
                fire: Tolerance::CriticalWeakness,
                frost: Tolerance::CriticalWeakness,
                magic: Tolerance::CriticalWeakness,
                poison: Tolerance::CriticalWeakness,
                shock: Tolerance::CriticalWeakness,
            },
            absorbs_spells: false,
        };

        target.inventory.items.clear();
        target.inventory.equipped.clear();
    }
}

/// Put back the per-tick modifiers a constant-effect sweep clears. Idempotent.
pub fn reassert(conditions: &mut Conditions) {
    conditions.immune_to_disease = true;
    conditions.immune_to_paralysis = true;
    conditions.paralyzed = false;
    conditions.to_hit_modifier = DECOY_TO_HIT_MODIFIER;
}

/// Damage output and magicka stay pinned for the decoy's whole lifetime.
pub fn pinned(combat: &CombatProfile, vitals: &Vitals) -> bool {
    combat.min_damage == 0 && combat.max_damage == 0 && vitals.magicka == 0 && vitals.max_magicka == 0
}
