//! Static scene made of box blockers.

use glam::Vec3;

use crate::aabb::Aabb;
use crate::probe::{unit_direction, ProbeError, RayHit, SpatialProbe};

/// Blocking scene geometry: walls, floors, pillars.
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    blockers: Vec<Aabb>,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_blocker(&mut self, blocker: Aabb) -> &mut Self {
        self.blockers.push(blocker);
        self
    }

    pub fn with_blocker(mut self, blocker: Aabb) -> Self {
        self.blockers.push(blocker);
        self
    }

    /// Flat floor slab whose top surface is at `height`, spanning `half_size` each way.
    pub fn with_floor(self, height: f32, half_size: f32) -> Self {
        self.with_blocker(Aabb::new(
            Vec3::new(-half_size, -half_size, height - 1.0),
            Vec3::new(half_size, half_size, height),
        ))
    }

    pub fn blockers(&self) -> &[Aabb] {
        &self.blockers
    }
}

impl SpatialProbe for SceneGeometry {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Result<Option<RayHit>, ProbeError> {
        let dir = unit_direction(direction)?;

        let nearest = self
            .blockers
            .iter()
            .filter_map(|b| b.ray_entry(origin, dir, max_distance))
            .min_by(|a, b| a.total_cmp(b));

        Ok(nearest.map(|distance| RayHit {
            point: origin + dir * distance,
            distance,
        }))
    }

    fn has_clearance(
        &self,
        point: Vec3,
        radius: f32,
        half_height: f32,
    ) -> Result<bool, ProbeError> {
        let (z_lo, z_hi) = (point.z - half_height, point.z + half_height);
        Ok(self
            .blockers
            .iter()
            .all(|b| b.vertical_segment_distance(point.x, point.y, z_lo, z_hi) > radius))
    }
}
