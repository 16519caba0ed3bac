//! Per-tick report returned to the host.

use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Summary of one live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: u32,
    pub phase: SessionPhase,
    pub magnitude: i32,
    pub rounds_remaining: i32,
    pub at_destination: bool,
    pub decoy: Option<u64>,
    pub waypoint: Option<u64>,
}

/// Everything the host needs after a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub time: SimTime,
    pub events: Vec<SimEvent>,
    pub sessions: Vec<SessionSummary>,
}
