//! Decoy session controller.
//!
//! One session per cast. Phases run `Inactive -> Spawning ->
//! Active(Traveling | Sustaining) -> Ending -> Inactive`. The engine calls
//! `magic_round` once per combat round and `constant_effect` once per tick,
//! and forwards subscribed notifications to the `on_*` handlers.

use glam::Vec3;
use hecs::Entity;

use decoy_behavior::dice::{failed_roll, uniform};
use decoy_behavior::formulas::{
    caster_level, duration_rounds, maintain_chance, roll_magnitude, spell_point_cost,
};
use decoy_behavior::fsm::{MovementAction, MovementTask, Observation};
use decoy_behavior::overrides::reassert;
use decoy_behavior::profiles::get_profile;
use decoy_core::components::{Combatant, Conditions, EffectBundles, Presence, Senses, Vitals};
use decoy_core::constants::{AGITATE_JITTER_SECS, ARRIVED_SENSE_RADIUS, ROUNDS_EXPIRED};
use decoy_core::enums::{ActivePhase, SessionPhase, Skill};
use decoy_core::events::{Message, SimEvent};
use decoy_core::settings::EffectSettings;
use decoy_core::state::SessionSummary;
use decoy_core::types::Transform;

use crate::context::{CasterContext, EffectContext};
use crate::error::DecoyError;
use crate::factory::{create_decoy, create_waypoint, DecoyBlueprint};
use crate::placement::{find_final_destination, find_spawn_point};
use crate::services::entity_id;
use crate::subscriptions::{Subscription, Topic};
use crate::systems::{aggro, interception};

#[derive(Debug)]
pub struct DecoySession {
    id: u32,
    caster: Entity,
    settings: EffectSettings,
    phase: SessionPhase,
    magnitude: i32,
    rounds_remaining: i32,
    at_destination: bool,
    first_round: bool,
    last_agitate_secs: f32,
    spawn_point: Option<Vec3>,
    decoy: Option<Entity>,
    waypoint: Option<Entity>,
    light: Option<Entity>,
    movement: MovementTask,
    subscriptions: Vec<Subscription>,
    ended: bool,
}

impl DecoySession {
    pub fn new(id: u32, caster: Entity, settings: EffectSettings) -> Self {
        Self {
            id,
            caster,
            settings,
            phase: SessionPhase::Inactive,
            magnitude: 0,
            rounds_remaining: 0,
            at_destination: false,
            first_round: true,
            last_agitate_secs: 0.0,
            spawn_point: None,
            decoy: None,
            waypoint: None,
            light: None,
            movement: MovementTask::new(),
            subscriptions: Vec::new(),
            ended: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn caster(&self) -> Entity {
        self.caster
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    pub fn rounds_remaining(&self) -> i32 {
        self.rounds_remaining
    }

    pub fn at_destination(&self) -> bool {
        self.at_destination
    }

    pub fn decoy(&self) -> Option<Entity> {
        self.decoy
    }

    /// Where the spawn search placed the decoy, before ground alignment.
    pub fn spawn_point(&self) -> Option<Vec3> {
        self.spawn_point
    }

    pub fn waypoint(&self) -> Option<Entity> {
        self.waypoint
    }

    pub fn light(&self) -> Option<Entity> {
        self.light
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// The session has ended and may be dropped.
    pub fn is_finished(&self) -> bool {
        self.rounds_remaining == ROUNDS_EXPIRED
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            phase: self.phase,
            magnitude: self.magnitude,
            rounds_remaining: self.rounds_remaining,
            at_destination: self.at_destination,
            decoy: self.decoy.map(entity_id),
            waypoint: self.waypoint.map(entity_id),
        }
    }

    /// Activate the session: roll magnitude and duration, find a spot, and
    /// conjure the decoy. Any failure refunds the cast and ends the session.
    pub fn start(&mut self, ctx: &mut EffectContext<'_>) {
        self.phase = SessionPhase::Spawning;

        let caster = match CasterContext::read(ctx.world, self.caster) {
            Ok(caster) => caster,
            Err(e) => {
                log::warn!("session {}: caster unavailable: {}", self.id, e);
                self.end(ctx);
                return;
            }
        };

        self.subscriptions
            .push(ctx.subscriptions.subscribe(Topic::SpellReadied(self.caster), self.id));

        let level = caster_level(caster.skills.get(Skill::Illusion));
        self.magnitude = roll_magnitude(&self.settings, level, ctx.dice);
        self.rounds_remaining = duration_rounds(&self.settings, level);

        match self.summon(ctx, &caster) {
            Ok(decoy) => {
                let jitter = uniform(ctx.dice, -AGITATE_JITTER_SECS, AGITATE_JITTER_SECS);
                self.last_agitate_secs = ctx.time.elapsed_secs - jitter;
                self.phase = SessionPhase::Active(ActivePhase::Traveling);
                log::info!(
                    "session {}: decoy {:?} summoned, magnitude {}, {} rounds",
                    self.id,
                    decoy,
                    self.magnitude,
                    self.rounds_remaining
                );
                ctx.feedback.push(SimEvent::SessionStarted {
                    session: self.id,
                    decoy: entity_id(decoy),
                });
            }
            Err(DecoyError::SpawnUnavailable) => {
                log::info!("session {}: no room for a decoy", self.id);
                self.refund(ctx, &caster);
                self.end(ctx);
            }
            Err(e) => {
                log::error!("session {}: {}", self.id, e);
                ctx.feedback.notify(Message::DisturbanceInFabricOfReality);
                self.refund(ctx, &caster);
                self.end(ctx);
            }
        }
    }

    fn summon(
        &mut self,
        ctx: &mut EffectContext<'_>,
        caster: &CasterContext,
    ) -> Result<Entity, DecoyError> {
        let spawn_point = find_spawn_point(ctx.probe, &caster.view, caster.looking_down())?
            .ok_or(DecoyError::SpawnUnavailable)?;
        self.spawn_point = Some(spawn_point);
        let destination = find_final_destination(ctx.probe, &caster.view)?;
        let species = ctx.catalog.decoy_species(caster, spawn_point, destination);

        let created = create_decoy(
            ctx,
            caster,
            &DecoyBlueprint {
                session: self.id,
                species,
                spawn_point,
                magnitude: self.magnitude,
            },
        )?;
        let decoy = created.decoy;
        self.decoy = Some(decoy);
        self.light = created.light;
        self.subscriptions
            .push(ctx.subscriptions.subscribe(Topic::Died(decoy), self.id));
        self.subscriptions
            .push(ctx.subscriptions.subscribe(Topic::BundleAssigned(decoy), self.id));

        let waypoint = create_waypoint(ctx.world, destination);
        self.waypoint = Some(waypoint);

        aggro::provoke(ctx.world, decoy, waypoint)?;
        self.step_movement(ctx, 0.0)?;
        Ok(decoy)
    }

    /// Combat-round maintenance: after the first round the caster must pass a
    /// language check every round, and the duration counts down.
    pub fn magic_round(&mut self, ctx: &mut EffectContext<'_>) {
        if !matches!(self.phase, SessionPhase::Active(_)) {
            return;
        }

        if let Some(decoy) = self.live_decoy(ctx) {
            if !self.first_round {
                match self.maintain(ctx, decoy) {
                    Ok(true) => {}
                    Ok(false) => {
                        self.end(ctx);
                        return;
                    }
                    Err(e) => {
                        log::warn!("session {}: maintenance check failed: {}", self.id, e);
                        self.end(ctx);
                        return;
                    }
                }
            }
        }
        self.first_round = false;

        self.rounds_remaining -= 1;
        if self.rounds_remaining <= 0 {
            log::info!("session {}: duration expired", self.id);
            self.end(ctx);
        }
    }

    fn maintain(&self, ctx: &mut EffectContext<'_>, decoy: Entity) -> Result<bool, DecoyError> {
        let Some(species) = ctx.world.get::<&Combatant>(decoy)?.species else {
            return Ok(true);
        };
        let skill = get_profile(species).language;
        let caster = CasterContext::read(ctx.world, self.caster)?;
        let chance = maintain_chance(
            caster.skills.get(skill),
            caster.stats.willpower,
            caster.stats.personality,
        );
        if failed_roll(ctx.dice, chance) {
            log::info!(
                "session {}: maintenance failed ({} chance {})",
                self.id,
                skill.display_name(),
                chance
            );
            ctx.feedback.notify(Message::LackSkillToMaintain { skill });
            return Ok(false);
        }
        Ok(true)
    }

    /// Per-tick work while active.
    pub fn constant_effect(&mut self, ctx: &mut EffectContext<'_>) {
        if !matches!(self.phase, SessionPhase::Active(_)) {
            return;
        }
        let Some(decoy) = self.live_decoy(ctx) else {
            self.end(ctx);
            return;
        };
        if let Err(e) = self.sustain(ctx, decoy) {
            log::warn!("session {}: {}", self.id, e);
            self.end(ctx);
        }
    }

    fn sustain(&mut self, ctx: &mut EffectContext<'_>, decoy: Entity) -> Result<(), DecoyError> {
        if let Ok(mut conditions) = ctx.world.get::<&mut Conditions>(decoy) {
            reassert(&mut conditions);
        }

        let dt = ctx.time.dt;
        self.step_movement(ctx, dt)?;

        let caster = CasterContext::read(ctx.world, self.caster)?;
        aggro::verify_target(ctx.world, &caster, decoy, self.waypoint, self.at_destination)?;
        aggro::agitate(
            ctx.world,
            ctx.dice,
            ctx.feedback,
            &caster,
            decoy,
            &mut self.last_agitate_secs,
            ctx.time.elapsed_secs,
        )?;
        if aggro::caster_too_close(ctx.world, &caster, decoy, self.magnitude)? {
            log::info!("session {}: caster came too close", self.id);
            self.end(ctx);
            return Ok(());
        }
        interception::check_for_projectiles(
            ctx.world,
            ctx.probe,
            ctx.dice,
            ctx.collisions,
            decoy,
            self.magnitude,
        )
    }

    fn step_movement(&mut self, ctx: &mut EffectContext<'_>, dt: f32) -> Result<(), DecoyError> {
        let position_of =
            |e: Entity| ctx.world.get::<&Transform>(e).ok().map(|t| t.position);
        let observation = self.decoy.and_then(position_of).map(|decoy| Observation {
            decoy,
            waypoint: self.waypoint.and_then(position_of),
        });

        for action in self.movement.tick(dt, observation) {
            match action {
                MovementAction::SetVisible(visible) => {
                    if let Some(decoy) = self.decoy {
                        ctx.world.get::<&mut Presence>(decoy)?.active = visible;
                    }
                }
                MovementAction::Arrived => self.arrive(ctx)?,
            }
        }
        Ok(())
    }

    fn arrive(&mut self, ctx: &mut EffectContext<'_>) -> Result<(), DecoyError> {
        self.at_destination = true;
        self.phase = SessionPhase::Active(ActivePhase::Sustaining);
        if let Some(decoy) = self.decoy {
            let mut senses = ctx.world.get::<&mut Senses>(decoy)?;
            senses.target = None;
            senses.secondary_target = None;
            senses.sight_radius = ARRIVED_SENSE_RADIUS;
            senses.hearing_radius = ARRIVED_SENSE_RADIUS;
        }
        log::debug!("session {}: decoy in position", self.id);
        Ok(())
    }

    /// Tear everything down. Safe to call any number of times.
    pub fn end(&mut self, ctx: &mut EffectContext<'_>) {
        self.rounds_remaining = ROUNDS_EXPIRED;

        if let Some(decoy) = self.decoy.take() {
            if let Ok(position) = ctx.world.get::<&Transform>(decoy).map(|t| t.position) {
                ctx.feedback.sparkles(position);
            }
            ctx.collisions.forget(decoy);
            let _ = ctx.world.despawn(decoy);
        }
        if let Some(light) = self.light.take() {
            let _ = ctx.world.despawn(light);
        }
        if let Some(waypoint) = self.waypoint.take() {
            let _ = ctx.world.despawn(waypoint);
        }
        for subscription in self.subscriptions.drain(..) {
            ctx.subscriptions.release(subscription);
        }

        if !self.ended {
            self.ended = true;
            self.phase = SessionPhase::Ending;
            log::info!("session {} ended", self.id);
            ctx.feedback.push(SimEvent::SessionEnded { session: self.id });
        }
        self.phase = SessionPhase::Inactive;
    }

    /// Readying another spell breaks concentration.
    pub fn on_spell_readied(&mut self, ctx: &mut EffectContext<'_>) {
        if self.live_decoy(ctx).is_some() {
            ctx.feedback.notify(Message::LostConcentration);
        }
        self.end(ctx);
    }

    /// The decoy was struck down: it vanishes without a corpse.
    pub fn on_decoy_died(&mut self, ctx: &mut EffectContext<'_>) {
        self.end(ctx);
    }

    /// An illusion never hosts a spell of its own.
    pub fn on_bundle_assigned(&mut self, ctx: &mut EffectContext<'_>) {
        if let Some(decoy) = self.live_decoy(ctx) {
            if let Ok(mut bundles) = ctx.world.get::<&mut EffectBundles>(decoy) {
                bundles.0.clear();
            }
        }
    }

    fn live_decoy(&self, ctx: &EffectContext<'_>) -> Option<Entity> {
        self.decoy.filter(|&decoy| ctx.world.contains(decoy))
    }

    fn refund(&self, ctx: &mut EffectContext<'_>, caster: &CasterContext) {
        let spell_points = spell_point_cost(&self.settings, caster.skills.get(Skill::Illusion));
        if let Ok(mut vitals) = ctx.world.get::<&mut Vitals>(caster.entity) {
            vitals.magicka = (vitals.magicka + spell_points).min(vitals.max_magicka);
        }
        log::info!(
            "session {}: refunded {} spell points to {:?}",
            self.id,
            spell_points,
            caster.entity
        );
        ctx.feedback.push(SimEvent::SpellCostRefunded {
            caster: entity_id(caster.entity),
            spell_points,
        });
    }
}
