// Two-bone inverse kinematics and limb targeting

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::{math::normalize_angle, Vector2};

use super::stance::{Direction, Stance};
use super::stats::BodyProportions;

/// Solve a two-bone chain rooted at `base` so its tip lands on `target`
///
/// Returns `(base_angle, connector_angle)`. Out of reach targets fully
/// extend the chain towards them. `concave_up` picks which of the two
/// elbow/knee solutions is used.
pub fn solve_two_bone(
    first_length: f64,
    second_length: f64,
    base: Vector2,
    target: Vector2,
    concave_up: bool,
) -> (f64, f64) {
    let dx = target.x - base.x;
    let dy = target.y - base.y;
    let d = (dx * dx + dy * dy).sqrt();

    if d == 0.0 {
        return (0.0, 0.0);
    }
    if d >= first_length + second_length {
        return (-(dx / d).asin(), 0.0);
    }

    let concavity = if concave_up { -1.0 } else { 1.0 };
    // law of cosines at the base, law of sines at the connector
    let at_base = concavity
        * ((second_length.powi(2) - first_length.powi(2) - d.powi(2)) / (-2.0 * first_length * d))
            .acos();
    let bearing = (dx / d).acos();
    let at_connector = (d * at_base.sin() / second_length).asin();

    let base_angle = (-at_base + bearing - FRAC_PI_2) % TAU;
    let mut connector_angle = at_connector % TAU;

    // the law of cosines leaves the connector ambiguous; refold it when the
    // reconstructed reach overshoots the target horizontally
    let reach_x = first_length * base_angle.cos() + second_length * connector_angle.cos();
    if reach_x.abs() > (base.x - target.x).abs() {
        connector_angle = (connector_angle - 2.0 * (connector_angle - FRAC_PI_2)) % TAU;
    }

    (base_angle, connector_angle)
}

/// A limb that can be aimed at a world point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limb {
    RightFoot,
    LeftFoot,
    RightHand,
    LeftHand,
}

impl Limb {
    pub const ALL: [Limb; 4] = [Limb::RightFoot, Limb::LeftFoot, Limb::RightHand, Limb::LeftHand];

    /// Offset of a point `r` along the shoulders once the torso is rotated
    fn torso_rotation_diff(stance: &Stance, r: f64) -> (f64, f64) {
        let theta = normalize_angle(stance.torso);
        (r * theta.cos(), -r * theta.sin())
    }

    /// World position of the joint the limb hangs from
    ///
    /// `position` is the body's foot point and `height` its current height.
    pub fn root(self, stance: &Stance, position: Vector2, height: f64, body: &BodyProportions) -> Vector2 {
        match self {
            Self::RightFoot => {
                let (difx, dify) =
                    Self::torso_rotation_diff(stance, body.torso_width - body.upper_leg_width / 2.0);
                // travelling down the torso instead of across it
                let (dify2, difx2) = Self::torso_rotation_diff(stance, body.torso_height);
                Vector2::new(
                    position.x + difx + difx2,
                    position.y + height + dify - dify2,
                )
            }
            Self::LeftFoot => {
                let (dify, difx) = Self::torso_rotation_diff(stance, body.torso_height);
                Vector2::new(position.x + difx, position.y + height - dify)
            }
            Self::RightHand => {
                let (difx, dify) = Self::torso_rotation_diff(stance, body.torso_width);
                Vector2::new(position.x + difx, position.y + height + dify)
            }
            Self::LeftHand => Vector2::new(position.x, position.y + height),
        }
    }

    fn bones(self, body: &BodyProportions) -> (f64, f64) {
        match self {
            Self::RightFoot | Self::LeftFoot => (body.upper_leg_length, body.lower_leg_length),
            Self::RightHand | Self::LeftHand => (body.upper_arm_length, body.lower_arm_length),
        }
    }

    /// Legs bend forward, arms bend back
    fn concave_up(self, facing: Direction) -> bool {
        match self {
            Self::RightFoot | Self::LeftFoot => facing == Direction::Left,
            Self::RightHand | Self::LeftHand => facing == Direction::Right,
        }
    }

    /// Overwrite this limb's two joint angles so its tip reaches `target`
    pub fn reach(
        self,
        stance: &mut Stance,
        position: Vector2,
        height: f64,
        body: &BodyProportions,
        target: Vector2,
    ) {
        let root = self.root(stance, position, height, body);
        let (first, second) = self.bones(body);
        let (upper, lower) =
            solve_two_bone(first, second, root, target, self.concave_up(stance.facing));

        let (upper_joint, lower_joint) = match self {
            Self::RightFoot => (&mut stance.right_upper_leg, &mut stance.right_lower_leg),
            Self::LeftFoot => (&mut stance.left_upper_leg, &mut stance.left_lower_leg),
            Self::RightHand => (&mut stance.right_upper_arm, &mut stance.right_lower_arm),
            Self::LeftHand => (&mut stance.left_upper_arm, &mut stance.left_lower_arm),
        };
        *upper_joint = upper;
        *lower_joint = lower;
    }
}
