//! Simulation engine for the decoy effect.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, drives
//! decoy sessions across ticks and combat rounds, and produces a
//! `TickReport` for the host.

pub mod collisions;
pub mod context;
pub mod engine;
pub mod error;
pub mod factory;
pub mod placement;
pub mod services;
pub mod session;
pub mod subscriptions;
pub mod systems;
pub mod world_setup;

pub use decoy_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::DecoyError;
pub use session::DecoySession;
