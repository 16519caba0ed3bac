//! Core types and definitions for the decoy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, tick reports, events, settings and constants.
//! It has no dependency on any host engine.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod settings;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
