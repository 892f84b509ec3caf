//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the inputs they need. They do not own state; entity state lives in
//! components and everything else in the engine.

pub mod enemy;
pub mod player_movement;
pub mod projectile;
pub mod snapshot;
