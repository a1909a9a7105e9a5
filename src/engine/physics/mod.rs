// Force-based physics: integration, grounding and obstruction tests

pub mod body;
mod collision;

pub use body::{presets, ForceKind, PhysicsComponent, FORCE_DAMPING, JUMP_IMPULSE};
pub use collision::{
    collision_detected, overlaps_horizontally, overlaps_vertically, ObstructionType, Side,
};
