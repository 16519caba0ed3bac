//! Collaborator seams: outbound feedback and the species catalog.

use glam::Vec3;
use hecs::Entity;

use decoy_core::enums::{AudioCue, EntityKind, Species};
use decoy_core::events::{Message, SimEvent};
use decoy_geometry::{ProbeError, SpatialProbe};

use crate::context::CasterContext;

/// Raw id of an entity as reported to the host.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Queue of outbound events, drained into every tick report.
#[derive(Debug, Default)]
pub struct Feedback {
    events: Vec<SimEvent>,
    delayed: Vec<(f32, Message)>,
}

impl Feedback {
    /// Show HUD text now, lingering longer for longer text.
    pub fn notify(&mut self, message: Message) {
        let linger_secs = message.linger_secs();
        self.events.push(SimEvent::Hud {
            message,
            linger_secs,
        });
    }

    /// Show HUD text once `delay_secs` have passed after `now_secs`.
    pub fn notify_delayed(&mut self, message: Message, delay_secs: f32, now_secs: f32) {
        self.delayed.push((now_secs + delay_secs.max(0.0), message));
    }

    /// Move delayed messages that are due into the event queue.
    pub fn release_due(&mut self, now_secs: f32) {
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.delayed)
            .into_iter()
            .partition(|(at, _)| *at <= now_secs);
        self.delayed = pending;
        for (_, message) in due {
            self.notify(message);
        }
    }

    pub fn audio(&mut self, entity: Entity, cue: AudioCue) {
        self.events.push(SimEvent::Audio {
            entity: entity_id(entity),
            cue,
        });
    }

    pub fn sparkles(&mut self, position: Vec3) {
        self.events.push(SimEvent::MagicSparkles { position });
    }

    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn pending_delayed(&self) -> usize {
        self.delayed.len()
    }

    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Chooses what a decoy looks like and how high the ground is beneath it.
pub trait SpeciesCatalog {
    /// Species for a decoy cast by `caster` at `location`, heading for `destination`.
    fn decoy_species(&self, caster: &CasterContext, location: Vec3, destination: Vec3) -> Species;

    /// Height of `position` above the ground below it.
    /// Positions with no ground below read as infinitely high.
    fn altitude(&self, probe: &dyn SpatialProbe, position: Vec3) -> Result<f32, ProbeError> {
        let hit = probe.raycast(position, -decoy_core::types::UP, ALTITUDE_PROBE_RANGE)?;
        Ok(hit.map_or(f32::INFINITY, |h| h.distance))
    }
}

const ALTITUDE_PROBE_RANGE: f32 = 100.0;

/// Vertical climb to the destination above which a flying shape is picked.
const FLYER_CLIMB: f32 = 3.0;

/// Default catalog: casters conjure their own kind, the player a nightblade,
/// and anything sent climbing steeply takes wing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl SpeciesCatalog for DefaultCatalog {
    fn decoy_species(&self, caster: &CasterContext, location: Vec3, destination: Vec3) -> Species {
        if destination.z - location.z > FLYER_CLIMB {
            return Species::Harpy;
        }
        match (caster.combatant.kind, caster.combatant.species) {
            (EntityKind::Player, _) | (_, None) => Species::Nightblade,
            (_, Some(species)) => species,
        }
    }
}

/// Catalog that always answers with the same species.
#[derive(Debug, Clone, Copy)]
pub struct FixedCatalog(pub Species);

impl SpeciesCatalog for FixedCatalog {
    fn decoy_species(&self, _caster: &CasterContext, _location: Vec3, _destination: Vec3) -> Species {
        self.0
    }
}
