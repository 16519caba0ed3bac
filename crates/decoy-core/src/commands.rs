//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use hecs::Entity;

use crate::settings::EffectSettings;

/// All inbound host actions.
#[derive(Debug, Clone)]
pub enum HostCommand {
    /// The caster completes a decoy spell.
    CastDecoy {
        caster: Entity,
        settings: EffectSettings,
    },
    /// The caster readies another spell.
    ReadySpell { caster: Entity },
    /// A spell bundle lands on `target`.
    AssignBundle { target: Entity, bundle: u32 },
    /// The host dispels a session.
    EndSession { session: u32 },
}
