//! Simulation engine for the arena skirmish.
//!
//! Owns the hecs ECS world, runs the round state machine and the fixed-step
//! systems, and produces GameStateSnapshots for the host.

pub mod camera;
pub mod engine;
pub mod error;
pub mod host;
pub mod round;
pub mod systems;
pub mod world_setup;

pub use skirmish_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
