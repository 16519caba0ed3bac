//! Fundamental geometric and simulation types.
//!
//! World convention: right-handed, `+Z` up, `+Y` forward (north), `+X` right (east).

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World up axis.
pub const UP: Vec3 = Vec3::Z;

/// Local forward axis of an unrotated transform.
pub const FORWARD: Vec3 = Vec3::Y;

/// Local right axis of an unrotated transform.
pub const RIGHT: Vec3 = Vec3::X;

/// Position and orientation of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Unrotated transform at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Transform at `position` facing `yaw_degrees` to the right of north and
    /// `pitch_down_degrees` below the horizon.
    pub fn facing(position: Vec3, yaw_degrees: f32, pitch_down_degrees: f32) -> Self {
        let rotation = Quat::from_rotation_z(-yaw_degrees.to_radians())
            * Quat::from_rotation_x(-pitch_down_degrees.to_radians());
        Self { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * RIGHT
    }

    /// Degrees the forward vector points below the horizon (negative when looking up).
    pub fn pitch_down_degrees(&self) -> f32 {
        (-self.forward().z).clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Distance between two transforms.
    pub fn distance_to(&self, other: &Transform) -> f32 {
        self.position.distance(other.position)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
    /// Seconds per tick.
    pub dt: f32,
}

impl SimTime {
    pub fn with_tick_rate(tick_rate: u32) -> Self {
        Self {
            tick: 0,
            elapsed_secs: 0.0,
            dt: 1.0 / tick_rate.max(1) as f32,
        }
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt;
    }
}
