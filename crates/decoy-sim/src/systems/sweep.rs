//! Start-of-tick sweep the host applies to every entity.

use hecs::World;

use decoy_core::components::{Conditions, Voice};

/// Clear per-tick modifiers; running effects put theirs back afterwards.
/// Also lets voice channels fall silent.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, conditions) in world.query_mut::<&mut Conditions>() {
        *conditions = Conditions::default();
    }
    for (_entity, voice) in world.query_mut::<&mut Voice>() {
        voice.busy_secs = (voice.busy_secs - dt).max(0.0);
    }
}
