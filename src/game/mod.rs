// Game layer: the player character and the simulation that drives it

pub mod characters;
pub mod simulation;

pub use simulation::{Simulation, TickReport};
