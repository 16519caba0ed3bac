//! Axis-aligned box blockers.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered at `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Slab test. Returns the entry distance along `dir` (unit length) if the
    /// ray hits within `max_distance`. A ray starting inside reports 0.
    pub fn ray_entry(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = max_distance;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < 1e-8 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }

    /// Distance from a vertical segment (`x`,`y` fixed, `z` in `z_lo..=z_hi`) to the box.
    pub fn vertical_segment_distance(&self, x: f32, y: f32, z_lo: f32, z_hi: f32) -> f32 {
        let dx = (self.min.x - x).max(0.0).max(x - self.max.x);
        let dy = (self.min.y - y).max(0.0).max(y - self.max.y);
        let dz = (self.min.z - z_hi).max(0.0).max(z_lo - self.max.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_box_ahead() {
        let wall = Aabb::new(Vec3::new(-1.0, 5.0, -1.0), Vec3::new(1.0, 6.0, 1.0));
        let t = wall.ray_entry(Vec3::ZERO, Vec3::Y, 10.0).unwrap();
        assert!((t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_stops_short_of_box() {
        let wall = Aabb::new(Vec3::new(-1.0, 5.0, -1.0), Vec3::new(1.0, 6.0, 1.0));
        assert!(wall.ray_entry(Vec3::ZERO, Vec3::Y, 4.9).is_none());
        assert!(wall.ray_entry(Vec3::ZERO, -Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn test_segment_distance() {
        let floor = Aabb::new(Vec3::new(-5.0, -5.0, -1.0), Vec3::new(5.0, 5.0, 0.0));
        let d = floor.vertical_segment_distance(0.0, 0.0, 0.5, 1.5);
        assert!((d - 0.5).abs() < 1e-5);

        let overlapping = floor.vertical_segment_distance(0.0, 0.0, -0.5, 1.0);
        assert_eq!(overlapping, 0.0);

        let beside = floor.vertical_segment_distance(8.0, 0.0, -0.5, 0.5);
        assert!((beside - 3.0).abs() < 1e-5);
    }
}
