// Input handling
//
// Keyboard events from the window are mapped to actions through a
// binding table, then turned into edge-triggered intents the simulation
// consumes once per tick. The pause key is kept for the driver.
//
// - `action`: game actions and default key bindings
// - `config`: key to action binding table
// - `intent`: the press/release edges handed to the simulation
// - `manager`: collects intents between ticks

pub mod action;
pub mod config;
pub mod intent;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use intent::Intent;
pub use manager::InputManager;
