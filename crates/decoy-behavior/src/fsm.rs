//! Decoy movement task as an explicit state machine.
//!
//! Driven by the same per-tick scheduler as the rest of the session: each
//! phase stores the time left before its next step instead of suspending.
//! No ECS dependency; operates on plain observations.

use glam::Vec3;

use decoy_core::constants::*;

/// Float slack for the shrinking flicker delay.
const FLICKER_EPSILON: f32 = 1e-4;

/// Phase of the movement task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementPhase {
    /// Toggling visibility with a shrinking delay.
    Flicker {
        delay: f32,
        show_next: bool,
        wait_secs: f32,
    },
    /// Sampling progress toward the waypoint.
    Traveling {
        last_position: Option<Vec3>,
        wait_secs: f32,
    },
    /// Reached the waypoint or stalled. Terminal.
    Arrived,
    /// The decoy vanished mid-task. Terminal.
    Cancelled,
}

/// What the task sees of the world this tick.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub decoy: Vec3,
    /// Waypoint position, if the waypoint still exists.
    pub waypoint: Option<Vec3>,
}

/// Effect the session must apply to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementAction {
    SetVisible(bool),
    /// Destination reached: release targeting locks and shrink senses.
    Arrived,
}

#[derive(Debug, Clone)]
pub struct MovementTask {
    phase: MovementPhase,
}

impl Default for MovementTask {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementTask {
    pub fn new() -> Self {
        Self {
            phase: MovementPhase::Flicker {
                delay: FLICKER_START_DELAY,
                show_next: true,
                wait_secs: 0.0,
            },
        }
    }

    pub fn phase(&self) -> MovementPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MovementPhase::Arrived | MovementPhase::Cancelled)
    }

    /// Advance by `dt` seconds. `observation` is `None` once the decoy no
    /// longer exists, which cancels the task at this suspension point.
    pub fn tick(&mut self, dt: f32, observation: Option<Observation>) -> Vec<MovementAction> {
        let mut actions = Vec::new();

        let Some(obs) = observation else {
            if !self.is_finished() {
                self.phase = MovementPhase::Cancelled;
            }
            return actions;
        };

        let mut elapsed = dt;
        loop {
            match self.phase {
                MovementPhase::Flicker {
                    delay,
                    show_next,
                    wait_secs,
                } => {
                    let wait_secs = wait_secs - elapsed;
                    elapsed = 0.0;
                    if wait_secs > 0.0 {
                        self.phase = MovementPhase::Flicker {
                            delay,
                            show_next,
                            wait_secs,
                        };
                        break;
                    }

                    if delay > FLICKER_MIN_DELAY + FLICKER_EPSILON {
                        actions.push(MovementAction::SetVisible(show_next));
                        let delay = delay - FLICKER_DELAY_STEP;
                        self.phase = MovementPhase::Flicker {
                            delay,
                            show_next: !show_next,
                            wait_secs: wait_secs + delay,
                        };
                    } else {
                        actions.push(MovementAction::SetVisible(true));
                        self.phase = MovementPhase::Traveling {
                            last_position: None,
                            wait_secs: 0.0,
                        };
                    }
                }
                MovementPhase::Traveling {
                    last_position,
                    wait_secs,
                } => {
                    let wait_secs = wait_secs - elapsed;
                    if wait_secs > 0.0 {
                        self.phase = MovementPhase::Traveling {
                            last_position,
                            wait_secs,
                        };
                        break;
                    }

                    let to_waypoint = obs
                        .waypoint
                        .map_or(f32::INFINITY, |w| obs.decoy.distance(w));
                    let stalled =
                        last_position.is_some_and(|p| obs.decoy.distance(p) < STALL_DISTANCE);

                    if to_waypoint < ARRIVAL_DISTANCE || stalled {
                        actions.push(MovementAction::Arrived);
                        self.phase = MovementPhase::Arrived;
                        break;
                    }

                    // One sample per observation; a long tick must not compare
                    // the decoy against itself.
                    let next_wait = wait_secs + TRAVEL_SAMPLE_SECS;
                    self.phase = MovementPhase::Traveling {
                        last_position: Some(obs.decoy),
                        wait_secs: if next_wait > 0.0 {
                            next_wait
                        } else {
                            TRAVEL_SAMPLE_SECS
                        },
                    };
                    break;
                }
                MovementPhase::Arrived | MovementPhase::Cancelled => break,
            }
        }

        actions
    }
}
