// Character animation state

use super::stance::Direction;

/// What the character's body is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Idle on the ground, breathing between rest poses
    #[default]
    Standing,
    WalkingLeft,
    WalkingRight,
    /// Jump from a standstill
    JumpingLeft,
    JumpingRight,
    /// Jump started while walking in the facing direction
    LeapingLeft,
    LeapingRight,
}

impl AnimationState {
    pub fn walking(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::WalkingLeft,
            Direction::Right => Self::WalkingRight,
        }
    }

    pub fn jumping(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::JumpingLeft,
            Direction::Right => Self::JumpingRight,
        }
    }

    pub fn leaping(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::LeapingLeft,
            Direction::Right => Self::LeapingRight,
        }
    }

    /// Check if the character is walking in `direction`
    pub fn is_walking_towards(&self, direction: Direction) -> bool {
        *self == Self::walking(direction)
    }

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::WalkingLeft => "walking_left",
            Self::WalkingRight => "walking_right",
            Self::JumpingLeft => "jumping_left",
            Self::JumpingRight => "jumping_right",
            Self::LeapingLeft => "leaping_left",
            Self::LeapingRight => "leaping_right",
        }
    }
}
