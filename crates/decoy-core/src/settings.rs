//! Per-cast effect settings and cost tables.

use serde::{Deserialize, Serialize};

/// Duration and magnitude settings chosen when the spell was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSettings {
    pub duration_base: i32,
    pub duration_plus: i32,
    pub duration_per_level: i32,
    pub magnitude_base_min: i32,
    pub magnitude_base_max: i32,
    pub magnitude_plus_min: i32,
    pub magnitude_plus_max: i32,
    pub magnitude_per_level: i32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            duration_base: 3,
            duration_plus: 1,
            duration_per_level: 2,
            magnitude_base_min: 10,
            magnitude_base_max: 20,
            magnitude_plus_min: 2,
            magnitude_plus_max: 4,
            magnitude_per_level: 1,
        }
    }
}

/// Gold cost coefficients of one effect component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectCosts {
    pub cost_a: f32,
    pub cost_b: f32,
    pub offset_gold: i32,
}

impl EffectCosts {
    pub const fn new(cost_a: f32, cost_b: f32, offset_gold: i32) -> Self {
        Self {
            cost_a,
            cost_b,
            offset_gold,
        }
    }
}

/// Duration cost table of the decoy effect.
pub const DURATION_COSTS: EffectCosts = EffectCosts::new(15.0, 75.0, 90);

/// Magnitude cost table of the decoy effect.
pub const MAGNITUDE_COSTS: EffectCosts = EffectCosts::new(6.0, 30.0, 0);
