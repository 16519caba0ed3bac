//! Decoy behavior for the simulation.
//!
//! Pure functions and state machines with no ECS dependency: dice, skill-check
//! formulas, the movement task, species profiles and the decoy override set.

pub mod dice;
pub mod formulas;
pub mod fsm;
pub mod overrides;
pub mod profiles;

pub use decoy_core as core;

#[cfg(test)]
mod tests;
