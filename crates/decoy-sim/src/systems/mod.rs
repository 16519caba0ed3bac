//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Session-scoped checks live in `aggro` and `interception` and are called by
//! the session controller; the rest run once per tick from the engine.

pub mod aggro;
pub mod death;
pub mod interception;
pub mod motor;
pub mod projectiles;
pub mod proximity;
pub mod sweep;
