//! The geometry query seam.

use glam::Vec3;
use thiserror::Error;

/// Geometry query failure. Fatal to the operation that issued the query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    #[error("geometry queries are unavailable")]
    Unavailable,
    #[error("direction {0} cannot be normalized")]
    BadDirection(Vec3),
}

/// Nearest blocking surface hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Geometry queries against blocking scene geometry.
pub trait SpatialProbe {
    /// Cast a ray from `origin` along `direction` for at most `max_distance`.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Result<Option<RayHit>, ProbeError>;

    /// True if a vertical capsule centered at `point` overlaps no blocking geometry.
    /// `half_height` is the half-length of the capsule's segment, radius excluded.
    fn has_clearance(&self, point: Vec3, radius: f32, half_height: f32)
        -> Result<bool, ProbeError>;

    /// True if nothing blocks `distance` units from `origin` along `direction`.
    fn has_line_of_sight(
        &self,
        origin: Vec3,
        direction: Vec3,
        distance: f32,
    ) -> Result<bool, ProbeError> {
        Ok(self.raycast(origin, direction, distance)?.is_none())
    }
}

/// Normalize a query direction, rejecting zero-length and non-finite vectors.
pub fn unit_direction(direction: Vec3) -> Result<Vec3, ProbeError> {
    direction
        .try_normalize()
        .ok_or(ProbeError::BadDirection(direction))
}
