// Stance library - named poses, pose continuation and blending

use std::f64::consts::PI;

use crate::core::math::lerp;

use super::stats::{JUMP_TIME_FRAMES, JUMP_TRANSITION_FRAMES, STEP_FRAMES, VIBE_FRAMES};

/// Which way a pose faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Joint angles of the skeleton plus a facing direction
///
/// Angles are radians relative to the parent segment and are stored as
/// authored. Normalizing into `[0, 2π)` is left to whoever draws them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stance {
    pub head: f64,
    pub torso: f64,
    pub right_upper_arm: f64,
    pub left_upper_arm: f64,
    pub right_lower_arm: f64,
    pub left_lower_arm: f64,
    pub right_upper_leg: f64,
    pub left_upper_leg: f64,
    pub right_lower_leg: f64,
    pub left_lower_leg: f64,
    pub right_foot: f64,
    pub left_foot: f64,
    pub weapon: f64,
    pub facing: Direction,
}

impl Stance {
    /// A pose with every joint at zero
    pub const fn neutral(facing: Direction) -> Self {
        Self {
            head: 0.0,
            torso: 0.0,
            right_upper_arm: 0.0,
            left_upper_arm: 0.0,
            right_lower_arm: 0.0,
            left_lower_arm: 0.0,
            right_upper_leg: 0.0,
            left_upper_leg: 0.0,
            right_lower_leg: 0.0,
            left_lower_leg: 0.0,
            right_foot: 0.0,
            left_foot: 0.0,
            weapon: 0.0,
            facing,
        }
    }

    /// Every joint angle, in declaration order
    pub fn joints(&self) -> [f64; 13] {
        [
            self.head,
            self.torso,
            self.right_upper_arm,
            self.left_upper_arm,
            self.right_lower_arm,
            self.left_lower_arm,
            self.right_upper_leg,
            self.left_upper_leg,
            self.right_lower_leg,
            self.left_lower_leg,
            self.right_foot,
            self.left_foot,
            self.weapon,
        ]
    }
}

/// Interpolate every joint from `from` towards `to` by `frame / frames`
///
/// Facing snaps to `to` immediately. `frames` must be positive; a pose with
/// no frames is terminal and never blended.
pub fn blend(from: &Stance, to: &Stance, frame: u32, frames: u32) -> Stance {
    debug_assert!(frames > 0, "blend over zero frames");
    debug_assert!(frame <= frames, "blend past its target");

    let c = f64::from(frame) / f64::from(frames);
    let mix = |a: f64, b: f64| lerp(a, b, c);

    Stance {
        head: mix(from.head, to.head),
        torso: mix(from.torso, to.torso),
        right_upper_arm: mix(from.right_upper_arm, to.right_upper_arm),
        left_upper_arm: mix(from.left_upper_arm, to.left_upper_arm),
        right_lower_arm: mix(from.right_lower_arm, to.right_lower_arm),
        left_lower_arm: mix(from.left_lower_arm, to.left_lower_arm),
        right_upper_leg: mix(from.right_upper_leg, to.right_upper_leg),
        left_upper_leg: mix(from.left_upper_leg, to.left_upper_leg),
        right_lower_leg: mix(from.right_lower_leg, to.right_lower_leg),
        left_lower_leg: mix(from.left_lower_leg, to.left_lower_leg),
        right_foot: mix(from.right_foot, to.right_foot),
        left_foot: mix(from.left_foot, to.left_foot),
        weapon: mix(from.weapon, to.weapon),
        facing: to.facing,
    }
}

/// Names of every pose in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StancePoseId {
    RestRight1,
    RestRight2,
    RestLeft1,
    RestLeft2,
    WalkRight1,
    WalkRight2,
    WalkLeft1,
    WalkLeft2,
    JumpRight1,
    JumpRight2,
    JumpRight3,
    JumpLeft1,
    JumpLeft2,
    JumpLeft3,
    LeapRight,
    LeapLeft,
}

impl StancePoseId {
    pub const ALL: [StancePoseId; 16] = [
        Self::RestRight1,
        Self::RestRight2,
        Self::RestLeft1,
        Self::RestLeft2,
        Self::WalkRight1,
        Self::WalkRight2,
        Self::WalkLeft1,
        Self::WalkLeft2,
        Self::JumpRight1,
        Self::JumpRight2,
        Self::JumpRight3,
        Self::JumpLeft1,
        Self::JumpLeft2,
        Self::JumpLeft3,
        Self::LeapRight,
        Self::LeapLeft,
    ];

    /// Joint angles of this pose
    pub fn stance(self) -> Stance {
        use Direction::{Left, Right};

        match self {
            Self::RestRight1 => Stance {
                right_upper_arm: -PI / 16.0,
                left_upper_arm: PI / 16.0,
                ..Stance::neutral(Right)
            },
            Self::RestRight2 => Stance {
                right_upper_arm: -PI / 20.0,
                left_upper_arm: PI / 20.0,
                ..Stance::neutral(Right)
            },
            Self::RestLeft1 => Stance {
                facing: Left,
                ..Self::RestRight1.stance()
            },
            Self::RestLeft2 => Stance {
                facing: Left,
                ..Self::RestRight2.stance()
            },
            Self::WalkRight1 => Stance {
                right_upper_arm: PI / 6.0,
                left_upper_arm: -PI / 6.0,
                right_upper_leg: -PI / 6.0,
                left_upper_leg: PI / 6.0,
                right_lower_arm: -PI / 20.0,
                right_lower_leg: PI / 20.0,
                left_lower_arm: -PI / 20.0,
                ..Stance::neutral(Right)
            },
            Self::WalkRight2 => Stance {
                right_upper_arm: -PI / 6.0,
                left_upper_arm: PI / 6.0,
                right_upper_leg: PI / 6.0,
                left_upper_leg: -PI / 6.0,
                right_lower_arm: -PI / 20.0,
                left_lower_arm: -PI / 20.0,
                left_lower_leg: PI / 20.0,
                ..Stance::neutral(Right)
            },
            Self::WalkLeft1 => Stance {
                right_upper_arm: PI / 6.0,
                left_upper_arm: -PI / 6.0,
                right_upper_leg: -PI / 6.0,
                left_upper_leg: PI / 6.0,
                right_lower_arm: PI / 20.0,
                right_lower_leg: -PI / 20.0,
                left_lower_arm: PI / 20.0,
                ..Stance::neutral(Left)
            },
            Self::WalkLeft2 => Stance {
                right_upper_arm: -PI / 6.0,
                left_upper_arm: PI / 6.0,
                right_upper_leg: PI / 6.0,
                left_upper_leg: -PI / 6.0,
                right_lower_arm: PI / 20.0,
                left_lower_arm: PI / 20.0,
                left_lower_leg: -PI / 20.0,
                ..Stance::neutral(Left)
            },
            Self::JumpRight1 => Stance {
                right_upper_arm: PI / 20.0,
                left_upper_arm: PI / 8.0,
                right_upper_leg: -PI / 4.0,
                left_upper_leg: -PI / 4.0,
                torso: PI / 10.0,
                right_lower_arm: -PI / 3.0,
                right_lower_leg: PI / 6.0,
                left_lower_arm: -PI / 3.0,
                left_lower_leg: PI / 6.0,
                ..Stance::neutral(Right)
            },
            Self::JumpRight2 => Stance {
                right_upper_arm: -PI / 10.0,
                left_upper_arm: PI / 5.0,
                right_upper_leg: -PI / 10.0,
                left_upper_leg: -PI / 15.0,
                right_lower_arm: -PI / 5.0,
                right_lower_leg: PI / 5.0,
                left_lower_arm: -PI / 5.0,
                left_lower_leg: PI / 5.0,
                ..Stance::neutral(Right)
            },
            Self::JumpRight3 => Stance {
                head: PI / 20.0,
                ..Self::JumpRight1.stance()
            },
            Self::JumpLeft1 => Stance {
                right_upper_arm: PI / 20.0,
                left_upper_arm: PI / 8.0,
                right_upper_leg: PI / 4.0,
                left_upper_leg: PI / 4.0,
                torso: -PI / 10.0,
                right_lower_arm: PI / 3.0,
                right_lower_leg: -PI / 6.0,
                left_lower_arm: PI / 3.0,
                left_lower_leg: -PI / 6.0,
                ..Stance::neutral(Left)
            },
            Self::JumpLeft2 => Stance {
                right_upper_arm: -PI / 10.0,
                left_upper_arm: PI / 5.0,
                right_upper_leg: PI / 10.0,
                left_upper_leg: PI / 15.0,
                right_lower_arm: PI / 5.0,
                right_lower_leg: -PI / 5.0,
                left_lower_arm: PI / 5.0,
                left_lower_leg: -PI / 5.0,
                ..Stance::neutral(Left)
            },
            Self::JumpLeft3 => Stance {
                head: -PI / 20.0,
                ..Self::JumpLeft1.stance()
            },
            Self::LeapRight => Stance {
                right_upper_arm: -PI / 3.0,
                left_upper_arm: PI / 3.0,
                left_upper_leg: -PI / 2.0,
                right_upper_leg: PI / 4.0,
                right_lower_arm: -PI / 3.0,
                left_lower_leg: PI / 6.0,
                left_lower_arm: -PI / 3.0,
                right_lower_leg: PI / 6.0,
                ..Stance::neutral(Right)
            },
            Self::LeapLeft => Stance {
                right_upper_arm: -PI / 3.0,
                left_upper_arm: PI / 3.0,
                left_upper_leg: PI / 2.0,
                right_upper_leg: -PI / 4.0,
                right_lower_arm: PI / 3.0,
                left_lower_leg: -PI / 6.0,
                left_lower_arm: PI / 3.0,
                right_lower_leg: -PI / 6.0,
                ..Stance::neutral(Left)
            },
        }
    }

    /// The pose that follows this one and how many frames to blend into it
    ///
    /// Terminal poses return themselves with zero frames.
    pub fn continuation(self) -> (StancePoseId, u32) {
        match self {
            Self::RestRight1 => (Self::RestRight2, VIBE_FRAMES),
            Self::RestRight2 => (Self::RestRight1, VIBE_FRAMES),
            Self::RestLeft1 => (Self::RestLeft2, VIBE_FRAMES),
            Self::RestLeft2 => (Self::RestLeft1, VIBE_FRAMES),
            Self::WalkRight1 => (Self::WalkRight2, STEP_FRAMES),
            Self::WalkRight2 => (Self::WalkRight1, STEP_FRAMES),
            Self::WalkLeft1 => (Self::WalkLeft2, STEP_FRAMES),
            Self::WalkLeft2 => (Self::WalkLeft1, STEP_FRAMES),
            Self::JumpRight1 | Self::LeapRight => (Self::JumpRight2, JUMP_TRANSITION_FRAMES),
            Self::JumpLeft1 | Self::LeapLeft => (Self::JumpLeft2, JUMP_TRANSITION_FRAMES),
            Self::JumpRight2 => (Self::JumpRight3, JUMP_TIME_FRAMES),
            Self::JumpLeft2 => (Self::JumpLeft3, JUMP_TIME_FRAMES),
            Self::JumpRight3 | Self::JumpLeft3 => (self, 0),
        }
    }

    pub fn facing(self) -> Direction {
        self.stance().facing
    }

    pub fn rest(facing: Direction) -> Self {
        match facing {
            Direction::Right => Self::RestRight1,
            Direction::Left => Self::RestLeft1,
        }
    }

    pub fn jump(facing: Direction) -> Self {
        match facing {
            Direction::Right => Self::JumpRight1,
            Direction::Left => Self::JumpLeft1,
        }
    }

    pub fn leap(facing: Direction) -> Self {
        match facing {
            Direction::Right => Self::LeapRight,
            Direction::Left => Self::LeapLeft,
        }
    }

    /// The airborne pose at which the jump impulse is applied
    pub fn is_takeoff(self) -> bool {
        matches!(self, Self::JumpRight2 | Self::JumpLeft2)
    }

    /// The landing pose that ends a jump
    pub fn is_landing(self) -> bool {
        matches!(self, Self::JumpRight3 | Self::JumpLeft3)
    }
}

/// The two alternating walk poses for one direction
///
/// Swapped on every key release so a quick tap starts from the other leg
/// next time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkCycle {
    pub primary: StancePoseId,
    pub secondary: StancePoseId,
}

impl WalkCycle {
    pub fn new(facing: Direction) -> Self {
        match facing {
            Direction::Right => Self {
                primary: StancePoseId::WalkRight1,
                secondary: StancePoseId::WalkRight2,
            },
            Direction::Left => Self {
                primary: StancePoseId::WalkLeft1,
                secondary: StancePoseId::WalkLeft2,
            },
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.primary, &mut self.secondary);
    }
}
