//! Percentile dice.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of gameplay randomness.
pub trait Dice {
    /// Uniform integer in `0..100`.
    fn d100(&mut self) -> i32;
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32;
    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is empty.
    fn between(&mut self, lo: i32, hi: i32) -> i32;
}

impl Dice for ChaCha8Rng {
    fn d100(&mut self) -> i32 {
        self.gen_range(0..100)
    }

    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            lo
        } else {
            self.gen_range(lo..=hi)
        }
    }
}

/// Percentile roll that succeeds when the die comes up below `chance`.
pub fn success_roll(dice: &mut dyn Dice, chance: i32) -> bool {
    dice.d100() < chance
}

pub fn failed_roll(dice: &mut dyn Dice, chance: i32) -> bool {
    !success_roll(dice, chance)
}

/// Uniform float in `[lo, hi)`.
pub fn uniform(dice: &mut dyn Dice, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * dice.unit()
}
