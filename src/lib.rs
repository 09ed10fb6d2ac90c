//! Asteroids: a ship that turns and thrusts with inertia, and debris that
//! drifts across an 800×600 wrap-around playfield.
//!
//! The game state ([`body`], [`ship`], [`debris`], [`session`]) is plain Rust
//! and can be driven without Bevy's renderer; [`simulation::SimulationPlugin`]
//! hooks it up to input, assets and sprites.

pub mod body;
pub mod config;
pub mod constants;
pub mod debris;
pub mod error;
pub mod graphics;
pub mod input;
pub mod rendering;
pub mod session;
pub mod ship;
pub mod simulation;
