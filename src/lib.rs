//! Procedural 2D character simulation
//!
//! A side-scrolling character whose skeleton is posed by blending between
//! named stances, whose body is moved by damped force accumulators over a
//! sparse obstruction grid, and whose limbs can be aimed with two-bone
//! inverse kinematics.

pub mod core;
pub mod engine;
pub mod game;

pub use crate::core::{ConfigError, Vector2, WorldConfig, DEFAULT_WORLD_CONFIG};
pub use crate::engine::input::Intent;
pub use crate::engine::world::{parse_world, ObstructionGrid, WorldLoadError};
pub use crate::game::{Simulation, TickReport};
