// Body proportions and animation timing - every humanoid shares the same skeleton

/// Frames to blend from any pose into the first walk step
pub const WALK_TRANSITION_FRAMES: u32 = 20;
/// Frames between alternating walk steps
pub const STEP_FRAMES: u32 = 25;
/// Frames between the two idle breathing poses
pub const VIBE_FRAMES: u32 = 50;
/// Frames to crouch into a jump or leap, and to recover from one
pub const JUMP_TRANSITION_FRAMES: u32 = 10;
/// Frames spent airborne before the landing pose
pub const JUMP_TIME_FRAMES: u32 = 10;

/// Skeleton dimensions in world units
///
/// Widths are the drawn thickness of a segment, lengths are joint to joint.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyProportions {
    // Trunk
    pub torso_width: f64,
    pub torso_height: f64,
    pub head_width: f64,
    pub head_height: f64,

    // Arms
    pub upper_arm_width: f64,
    pub upper_arm_length: f64,
    pub lower_arm_width: f64,
    pub lower_arm_length: f64,

    // Legs
    pub upper_leg_width: f64,
    pub upper_leg_length: f64,
    pub lower_leg_width: f64,
    pub lower_leg_length: f64,

    /// Width of the physics footprint
    pub player_width: f64,
}

/// The one skeleton used by the player
pub const HUMANOID: BodyProportions = BodyProportions {
    torso_width: 0.25,
    torso_height: 0.5,
    head_width: 0.35,
    head_height: 0.3,

    upper_arm_width: 0.05,
    upper_arm_length: 0.25,
    lower_arm_width: 0.05,
    lower_arm_length: 0.25,

    upper_leg_width: 0.05,
    upper_leg_length: 0.25,
    lower_leg_width: 0.05,
    lower_leg_length: 0.25,

    player_width: 0.25,
};

impl Default for BodyProportions {
    fn default() -> Self {
        HUMANOID
    }
}

impl BodyProportions {
    /// Combined reach of the two leg bones
    pub fn leg_reach(&self) -> f64 {
        self.upper_leg_length + self.lower_leg_length
    }

    /// Combined reach of the two arm bones
    pub fn arm_reach(&self) -> f64 {
        self.upper_arm_length + self.lower_arm_length
    }
}
