//! Pairwise collision suppression between physics volumes.

use std::collections::HashSet;

use hecs::Entity;

/// Pairs of entities whose volumes ignore each other.
#[derive(Debug, Clone, Default)]
pub struct CollisionFilter {
    ignored: HashSet<(Entity, Entity)>,
}

fn key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a.to_bits() <= b.to_bits() {
        (a, b)
    } else {
        (b, a)
    }
}

impl CollisionFilter {
    /// Stop `a` and `b` from colliding. Returns false if they already ignored each other.
    pub fn suppress(&mut self, a: Entity, b: Entity) -> bool {
        self.ignored.insert(key(a, b))
    }

    pub fn is_suppressed(&self, a: Entity, b: Entity) -> bool {
        self.ignored.contains(&key(a, b))
    }

    /// Forget every pair involving `entity`.
    pub fn forget(&mut self, entity: Entity) {
        self.ignored.retain(|&(a, b)| a != entity && b != entity);
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}
