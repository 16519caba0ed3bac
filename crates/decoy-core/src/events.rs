//! Events emitted by the simulation for collaborators (HUD, audio, visuals, ledger).
//!
//! Outbound calls are queued as events and drained into the tick report, so
//! the host decides how to present them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{HUD_BASE_LINGER_SECS, HUD_LINGER_PER_CHAR_SECS};
use crate::enums::{AudioCue, Skill};

/// Player-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Generic fault while conjuring the decoy.
    DisturbanceInFabricOfReality,
    /// Readying another spell broke concentration.
    LostConcentration,
    /// The maintenance roll failed for the named skill.
    LackSkillToMaintain { skill: Skill },
}

impl Message {
    pub fn text(&self) -> String {
        match self {
            Message::DisturbanceInFabricOfReality => {
                "You sense a disturbance in the fabric of reality.".to_string()
            }
            Message::LostConcentration => "You lost concentration.".to_string(),
            Message::LackSkillToMaintain { skill } => format!(
                "You lack the {} skill to maintain the illusion.",
                skill.display_name()
            ),
        }
    }

    /// How long the HUD keeps the message up, longer for longer text.
    pub fn linger_secs(&self) -> f32 {
        HUD_BASE_LINGER_SECS + self.text().chars().count() as f32 * HUD_LINGER_PER_CHAR_SECS
    }
}

/// Outbound simulation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// HUD text.
    Hud { message: Message, linger_secs: f32 },
    /// A decoy voiced a cue. `entity` is the raw entity id.
    Audio { entity: u64, cue: AudioCue },
    /// Sparkles shown where a decoy vanished.
    MagicSparkles { position: Vec3 },
    /// Spell points credited back to a caster.
    SpellCostRefunded { caster: u64, spell_points: i32 },
    /// An entity's health reached zero. `entity` is the raw entity id.
    EntityDied { entity: u64 },
    /// A decoy session came to life.
    SessionStarted { session: u32, decoy: u64 },
    /// A decoy session ended.
    SessionEnded { session: u32 },
}
