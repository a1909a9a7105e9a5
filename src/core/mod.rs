// Shared math and configuration

pub mod config;
pub mod math;

pub use config::{ConfigError, WorldConfig, DEFAULT_WORLD_CONFIG};
pub use math::Vector2;
