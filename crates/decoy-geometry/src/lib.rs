//! Blocking geometry for the decoy simulation.
//!
//! Axis-aligned scene blockers, ray casting, capsule clearance,
//! and the `SpatialProbe` seam the simulation queries through.

pub mod aabb;
pub mod probe;
pub mod scene;

// Re-export key types for convenience.
pub use aabb::Aabb;
pub use probe::{ProbeError, RayHit, SpatialProbe};
pub use scene::SceneGeometry;
