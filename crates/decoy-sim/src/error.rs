//! Error taxonomy of the decoy effect.

use decoy_geometry::ProbeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoyError {
    /// Every probe tuple in front of the caster failed.
    #[error("no valid spawn point in front of the caster")]
    SpawnUnavailable,
    /// Unexpected failure while building the decoy.
    #[error("decoy creation failed: {0}")]
    CreationFault(String),
    #[error("geometry query failed: {0}")]
    Probe(#[from] ProbeError),
    #[error("component access failed: {0}")]
    Component(#[from] hecs::ComponentError),
    #[error("entity no longer exists")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
}
