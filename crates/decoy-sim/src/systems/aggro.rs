//! Aggro redirection: target integrity, agitation pulses and the caster
//! proximity check.

use hecs::{Entity, World};

use decoy_behavior::dice::{failed_roll, success_roll, Dice};
use decoy_behavior::formulas::{agitate_chance, agitate_radius, proximity_threshold};
use decoy_core::components::{Combatant, Motor, Presence, Senses, Voice};
use decoy_core::constants::{AGITATE_INTERVAL_SECS, ATTRACT_CUE_SECS};
use decoy_core::enums::{AudioCue, EntityKind, Gender, Team};
use decoy_core::types::Transform;

use crate::context::CasterContext;
use crate::error::DecoyError;
use crate::services::Feedback;
use crate::systems::proximity::find_nearby_entities;

/// Make `entity` hostile and, if it has no target yet, point it at `attacker`.
pub fn provoke(world: &mut World, entity: Entity, attacker: Entity) -> Result<(), DecoyError> {
    world.get::<&mut Motor>(entity)?.hostile = true;
    let mut senses = world.get::<&mut Senses>(entity)?;
    if senses.target.is_none() {
        senses.target = Some(attacker);
    }
    Ok(())
}

/// Keep the decoy locked on its waypoint until it arrives, and on the caster's side always.
pub fn verify_target(
    world: &mut World,
    caster: &CasterContext,
    decoy: Entity,
    waypoint: Option<Entity>,
    at_destination: bool,
) -> Result<(), DecoyError> {
    if let (false, Some(waypoint)) = (at_destination, waypoint) {
        let locked = world.get::<&Senses>(decoy)?.target == Some(waypoint);
        if !locked {
            world.get::<&mut Senses>(decoy)?.target = None;
            provoke(world, decoy, waypoint)?;
        }
    }

    let team = caster.decoy_team();
    let mut combatant = world.get::<&mut Combatant>(decoy)?;
    if combatant.team != team {
        combatant.team = team;
        drop(combatant);
        world.get::<&mut Senses>(decoy)?.target = None;
    }
    Ok(())
}

/// Pulse that goads nearby hostiles onto the decoy. Rate limited through
/// `last_agitate_secs`. Returns how many entities were provoked.
pub fn agitate(
    world: &mut World,
    dice: &mut dyn Dice,
    feedback: &mut Feedback,
    caster: &CasterContext,
    decoy: Entity,
    last_agitate_secs: &mut f32,
    now_secs: f32,
) -> Result<usize, DecoyError> {
    if now_secs - *last_agitate_secs < AGITATE_INTERVAL_SECS {
        return Ok(0);
    }
    *last_agitate_secs = now_secs;

    let personality = caster.stats.personality;
    if failed_roll(dice, agitate_chance(personality)) {
        return Ok(0);
    }

    let radius = agitate_radius(personality);
    play_attract_cue(world, feedback, decoy)?;

    let center = world.get::<&Transform>(decoy)?.position;
    let mut provoked = 0;
    for entity in find_nearby_entities(world, center, radius) {
        if entity == decoy || entity == caster.entity {
            continue;
        }
        let Ok(motor) = world.get::<&Motor>(entity).map(|m| *m) else {
            continue;
        };
        let team = world.get::<&Combatant>(entity)?.team;
        if caster.is_player && team == Team::PlayerAlly {
            continue;
        }
        if team == caster.combatant.team || team == Team::Undead || !motor.hostile {
            continue;
        }

        if success_roll(dice, personality) {
            if let Ok(mut senses) = world.get::<&mut Senses>(entity) {
                if senses.target == Some(caster.entity) {
                    senses.target = None;
                }
            }
        }
        if provoke(world, entity, decoy).is_ok() {
            provoked += 1;
        }
    }

    log::debug!("decoy {:?} agitated {} of its neighbours", decoy, provoked);
    Ok(provoked)
}

/// Voice a cue suited to the decoy's shape, unless it is hidden or already talking.
pub fn play_attract_cue(
    world: &mut World,
    feedback: &mut Feedback,
    decoy: Entity,
) -> Result<(), DecoyError> {
    if !world.get::<&Presence>(decoy)?.active {
        return Ok(());
    }
    let mut voice = world.get::<&mut Voice>(decoy)?;
    if voice.busy_secs > 0.0 {
        return Ok(());
    }
    let combatant = *world.get::<&Combatant>(decoy)?;
    let cue = match (combatant.kind, combatant.gender) {
        (EntityKind::EnemyClass, Gender::Male) => AudioCue::Oi,
        (EntityKind::EnemyClass, Gender::Female) => AudioCue::Laugh,
        _ => AudioCue::Bark,
    };
    voice.busy_secs = ATTRACT_CUE_SECS;
    feedback.audio(decoy, cue);
    Ok(())
}

/// An unconcealed caster standing too close gives the illusion away.
pub fn caster_too_close(
    world: &World,
    caster: &CasterContext,
    decoy: Entity,
    magnitude: i32,
) -> Result<bool, DecoyError> {
    if caster.concealed {
        return Ok(false);
    }
    let position = world.get::<&Transform>(decoy)?.position;
    Ok(caster.body.position.distance(position) < proximity_threshold(magnitude))
}
