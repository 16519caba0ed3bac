//! Death system: marks entities whose health reached zero.

use hecs::{Entity, World};

use decoy_core::components::{Dead, Vitals};

/// Mark newly dead entities with `Dead` and return them, oldest id first.
/// An entity is reported once.
pub fn run(world: &mut World) -> Vec<Entity> {
    let mut died: Vec<Entity> = world
        .query::<&Vitals>()
        .without::<&Dead>()
        .iter()
        .filter(|(_, vitals)| vitals.health <= 0)
        .map(|(entity, _)| entity)
        .collect();
    died.sort_by_key(|e| e.to_bits());

    for &entity in &died {
        let _ = world.insert_one(entity, Dead);
    }
    died
}
