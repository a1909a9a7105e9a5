// Character system
//
// This module contains everything related to the player character:
// - Stance library, pose continuation and blending
// - Animation state machine and the character entity
// - Two-bone inverse kinematics for aiming limbs
// - Skeleton proportions and animation timing

pub mod character;
pub mod ik;
pub mod stance;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::{body_height, Character, PLAYER_START};
pub use ik::{solve_two_bone, Limb};
pub use stance::{blend, Direction, Stance, StancePoseId, WalkCycle};
pub use state::AnimationState;
pub use stats::{BodyProportions, HUMANOID};
