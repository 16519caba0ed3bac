//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands, runs
//! all systems, drives decoy sessions and produces a `TickReport` per tick.
//! Completely headless, enabling deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use decoy_behavior::dice::Dice;
use decoy_core::commands::HostCommand;
use decoy_core::components::EffectBundles;
use decoy_core::constants::{ROUND_SECS, TICK_RATE};
use decoy_core::events::{Message, SimEvent};
use decoy_core::state::TickReport;
use decoy_core::types::SimTime;
use decoy_geometry::SpatialProbe;

use crate::collisions::CollisionFilter;
use crate::context::{EffectContext, Environment};
use crate::services::{entity_id, DefaultCatalog, Feedback, SpeciesCatalog};
use crate::session::DecoySession;
use crate::subscriptions::{SubscriptionRegistry, Topic};
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Length of one combat round in seconds.
    pub round_secs: f32,
    /// Initial scene lighting.
    pub environment: Environment,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            round_secs: ROUND_SECS,
            environment: Environment::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    environment: Environment,
    dice: Box<dyn Dice>,
    probe: Box<dyn SpatialProbe>,
    catalog: Box<dyn SpeciesCatalog>,
    feedback: Feedback,
    subscriptions: SubscriptionRegistry,
    collisions: CollisionFilter,
    sessions: BTreeMap<u32, DecoySession>,
    next_session_id: u32,
    command_queue: VecDeque<HostCommand>,
    round_clock: f32,
}

impl SimulationEngine {
    /// Create a new simulation engine querying `probe` for scene geometry.
    pub fn new(config: SimConfig, probe: impl SpatialProbe + 'static) -> Self {
        Self {
            world: World::new(),
            time: SimTime::with_tick_rate(config.tick_rate),
            config,
            environment: config.environment,
            dice: Box::new(ChaCha8Rng::seed_from_u64(config.seed)),
            probe: Box::new(probe),
            catalog: Box::new(DefaultCatalog),
            feedback: Feedback::default(),
            subscriptions: SubscriptionRegistry::default(),
            collisions: CollisionFilter::default(),
            sessions: BTreeMap::new(),
            next_session_id: 0,
            command_queue: VecDeque::new(),
            round_clock: 0.0,
        }
    }

    /// Replace the seeded dice, e.g. with scripted rolls.
    pub fn with_dice(mut self, dice: impl Dice + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    pub fn with_catalog(mut self, catalog: impl SpeciesCatalog + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Show a HUD message once `delay_secs` of simulation time have passed.
    pub fn notify_delayed(&mut self, message: Message, delay_secs: f32) {
        self.feedback
            .notify_delayed(message, delay_secs, self.time.elapsed_secs);
    }

    pub fn set_darkness(&mut self, in_darkness: bool) {
        self.environment.in_darkness = in_darkness;
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the host to place and move entities between ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn session(&self, id: u32) -> Option<&DecoySession> {
        self.sessions.get(&id)
    }

    /// Live sessions in id order.
    pub fn sessions(&self) -> impl Iterator<Item = &DecoySession> {
        self.sessions.values()
    }

    pub fn subscriptions(&self) -> &SubscriptionRegistry {
        &self.subscriptions
    }

    pub fn collisions(&self) -> &CollisionFilter {
        &self.collisions
    }

    /// Advance the simulation by one tick and return the resulting report.
    pub fn tick(&mut self) -> TickReport {
        let dt = self.time.dt;

        self.process_commands();
        // 1. Host sweep of per-tick modifiers
        systems::sweep::run(&mut self.world, dt);
        // 2. Combat-round maintenance
        self.run_rounds(dt);
        // 3. Per-session constant effect and movement task
        self.run_sessions();
        // 4. Motor movement
        systems::motor::run(&mut self.world, &*self.probe, dt);
        // 5. Projectile flight and impact
        systems::projectiles::run(&mut self.world, &mut self.collisions, dt);
        // 6. Projectile decoy trackers
        systems::interception::sweep_trackers(&mut self.world);
        // 7. Deaths
        self.process_deaths();
        // 8. Drop finished sessions
        self.sessions.retain(|_, session| !session.is_finished());

        self.time.advance();
        self.feedback.release_due(self.time.elapsed_secs);

        TickReport {
            time: self.time,
            events: self.feedback.drain(),
            sessions: self.sessions.values().map(DecoySession::summary).collect(),
        }
    }

    /// Borrow the session context and the session map side by side.
    fn split(&mut self) -> (EffectContext<'_>, &mut BTreeMap<u32, DecoySession>) {
        let ctx = EffectContext {
            world: &mut self.world,
            probe: &*self.probe,
            catalog: &*self.catalog,
            dice: &mut *self.dice,
            feedback: &mut self.feedback,
            subscriptions: &mut self.subscriptions,
            collisions: &mut self.collisions,
            environment: self.environment,
            time: self.time,
        };
        (ctx, &mut self.sessions)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::CastDecoy { caster, settings } => {
                let id = self.next_session_id;
                self.next_session_id += 1;
                let mut session = DecoySession::new(id, caster, settings);
                let (mut ctx, sessions) = self.split();
                session.start(&mut ctx);
                sessions.insert(id, session);
            }
            HostCommand::ReadySpell { caster } => {
                self.dispatch(Topic::SpellReadied(caster));
            }
            HostCommand::AssignBundle { target, bundle } => {
                if let Ok(mut bundles) = self.world.get::<&mut EffectBundles>(target) {
                    bundles.0.push(bundle);
                }
                self.dispatch(Topic::BundleAssigned(target));
            }
            HostCommand::EndSession { session } => {
                let (mut ctx, sessions) = self.split();
                if let Some(session) = sessions.get_mut(&session) {
                    session.end(&mut ctx);
                }
            }
        }
    }

    /// Forward a notification to every session subscribed to `topic`.
    fn dispatch(&mut self, topic: Topic) {
        let subscribers = self.subscriptions.subscribers(topic);
        let (mut ctx, sessions) = self.split();
        for id in subscribers {
            let Some(session) = sessions.get_mut(&id) else {
                continue;
            };
            match topic {
                Topic::SpellReadied(_) => session.on_spell_readied(&mut ctx),
                Topic::Died(_) => session.on_decoy_died(&mut ctx),
                Topic::BundleAssigned(_) => session.on_bundle_assigned(&mut ctx),
            }
        }
    }

    fn run_rounds(&mut self, dt: f32) {
        let round_secs = self.config.round_secs.max(f32::EPSILON);
        self.round_clock += dt;
        while self.round_clock >= round_secs {
            self.round_clock -= round_secs;
            let (mut ctx, sessions) = self.split();
            for session in sessions.values_mut() {
                session.magic_round(&mut ctx);
            }
        }
    }

    fn run_sessions(&mut self) {
        let (mut ctx, sessions) = self.split();
        for session in sessions.values_mut() {
            session.constant_effect(&mut ctx);
        }
    }

    fn process_deaths(&mut self) {
        let died: Vec<Entity> = systems::death::run(&mut self.world);
        for entity in died {
            self.feedback.push(SimEvent::EntityDied {
                entity: entity_id(entity),
            });
            self.dispatch(Topic::Died(entity));
        }
    }
}
