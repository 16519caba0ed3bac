//! Borrowed views the session controller works through.

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use decoy_behavior::dice::Dice;
use decoy_core::components::*;
use decoy_core::constants::LOOKING_DOWN_PITCH_DEGREES;
use decoy_core::enums::{CollisionLayer, IncumbentEffect, Team};
use decoy_core::types::{SimTime, Transform};
use decoy_geometry::SpatialProbe;

use crate::collisions::CollisionFilter;
use crate::error::DecoyError;
use crate::services::{Feedback, SpeciesCatalog};
use crate::subscriptions::SubscriptionRegistry;

/// Ambient scene state the host controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Scene is dark enough that decoys carry a light.
    pub in_darkness: bool,
    /// Lights cast soft shadows.
    pub soft_shadows: bool,
}

/// Everything a session may touch during one call.
pub struct EffectContext<'a> {
    pub world: &'a mut World,
    pub probe: &'a dyn SpatialProbe,
    pub catalog: &'a dyn SpeciesCatalog,
    pub dice: &'a mut dyn Dice,
    pub feedback: &'a mut Feedback,
    pub subscriptions: &'a mut SubscriptionRegistry,
    pub collisions: &'a mut CollisionFilter,
    pub environment: Environment,
    pub time: SimTime,
}

/// Snapshot of the caster, read fresh whenever a session needs it.
#[derive(Debug, Clone)]
pub struct CasterContext {
    pub entity: Entity,
    pub is_player: bool,
    pub body: Transform,
    /// Eye transform for the player, the body otherwise.
    pub view: Transform,
    pub combatant: Combatant,
    pub stats: Stats,
    pub skills: Skills,
    pub reputation: Reputation,
    pub layer: CollisionLayer,
    pub concealed: bool,
}

impl CasterContext {
    pub fn read(world: &World, entity: Entity) -> Result<Self, DecoyError> {
        let body = *world.get::<&Transform>(entity)?;
        let combatant = *world.get::<&Combatant>(entity)?;
        let is_player = world.satisfies::<&Player>(entity)?;
        let view = world
            .get::<&View>(entity)
            .ok()
            .filter(|_| is_player)
            .map_or(body, |v| v.transform);
        let stats = world.get::<&Stats>(entity).map(|s| *s).unwrap_or_default();
        let skills = world
            .get::<&Skills>(entity)
            .map(|s| (*s).clone())
            .unwrap_or_default();
        let reputation = world
            .get::<&Reputation>(entity)
            .map(|r| *r)
            .unwrap_or_default();
        let layer = world
            .get::<&Body>(entity)
            .map_or(CollisionLayer::Default, |b| b.layer);
        let concealed = world
            .get::<&Conditions>(entity)
            .is_ok_and(|c| c.magically_concealed)
            || world
                .get::<&IncumbentEffects>(entity)
                .is_ok_and(|e| e.has(IncumbentEffect::Concealment));

        Ok(Self {
            entity,
            is_player,
            body,
            view,
            combatant,
            stats,
            skills,
            reputation,
            layer,
            concealed,
        })
    }

    /// Team the caster's decoys fight for.
    pub fn decoy_team(&self) -> Team {
        if self.is_player {
            Team::PlayerAlly
        } else {
            self.combatant.team
        }
    }

    /// The player is looking steeply down, possibly into a shaft.
    pub fn looking_down(&self) -> bool {
        let pitch = self.view.pitch_down_degrees();
        self.is_player && pitch > LOOKING_DOWN_PITCH_DEGREES && pitch <= 90.0
    }
}
