//! Headless host for the arena skirmish.
//!
//! This crate wires the simulation to a paced game loop thread, a logging
//! HUD, file-based configuration, and an optional autopilot for demo runs.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod hud;
pub mod logging;
pub mod state;

pub use skirmish_core as core;
