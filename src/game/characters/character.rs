// Character entity - animation state machine driving a physics body

use log::{debug, warn};

use crate::core::{Vector2, WorldConfig};
use crate::engine::physics::{presets, ForceKind, PhysicsComponent, JUMP_IMPULSE};
use crate::engine::world::ObstructionGrid;

use super::stance::{blend, Direction, Stance, StancePoseId, WalkCycle};
use super::state::AnimationState;
use super::stats::{
    BodyProportions, HUMANOID, JUMP_TRANSITION_FRAMES, VIBE_FRAMES, WALK_TRANSITION_FRAMES,
};

/// Where the player starts in a fresh place
pub const PLAYER_START: Vector2 = Vector2::new(70.0, 0.0);

/// Height of the player's footprint before the first stance update
pub const PLAYER_START_HEIGHT: f64 = 1.0;

/// Height of the body in `stance`: torso plus the longer of the two legs
pub fn body_height(stance: &Stance, body: &BodyProportions) -> f64 {
    let leg = |upper: f64, lower: f64| {
        body.upper_leg_length * (stance.torso + upper).cos()
            + body.lower_leg_length * (stance.torso + upper + lower).cos()
    };
    let right = leg(stance.right_upper_leg, stance.right_lower_leg);
    let left = leg(stance.left_upper_leg, stance.left_lower_leg);

    body.torso_height * stance.torso.cos() + right.max(left)
}

/// The procedurally animated player character
#[derive(Debug, Clone)]
pub struct Character {
    /// Footprint, motion and forces
    pub physics: PhysicsComponent,
    /// Skeleton dimensions
    pub body: BodyProportions,
    /// Pose displayed this tick
    pub stance: Stance,

    // Blend between two poses
    stance_from: Stance,
    stance_to: StancePoseId,
    anim_frame: u32,
    anim_frames: u32,
    state: AnimationState,

    // Movement intent, set while a direction key is held
    moving_left: bool,
    moving_right: bool,

    walk_right: WalkCycle,
    walk_left: WalkCycle,
}

impl Character {
    /// Create a character standing at `position`, facing right
    pub fn new(position: Vector2, body: BodyProportions) -> Self {
        let rest = StancePoseId::RestRight1;
        Self {
            physics: presets::player_body(
                position.x,
                position.y,
                body.player_width,
                PLAYER_START_HEIGHT,
            ),
            body,
            stance: rest.stance(),
            stance_from: rest.stance(),
            stance_to: rest,
            anim_frame: 0,
            anim_frames: VIBE_FRAMES,
            state: AnimationState::Standing,
            moving_left: false,
            moving_right: false,
            walk_right: WalkCycle::new(Direction::Right),
            walk_left: WalkCycle::new(Direction::Left),
        }
    }

    /// The player at its starting position
    pub fn player() -> Self {
        Self::new(PLAYER_START, HUMANOID)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Pose currently being blended towards
    pub fn stance_to(&self) -> StancePoseId {
        self.stance_to
    }

    /// Pose the current blend started from
    pub fn stance_from(&self) -> &Stance {
        &self.stance_from
    }

    pub fn anim_frame(&self) -> u32 {
        self.anim_frame
    }

    pub fn anim_frames(&self) -> u32 {
        self.anim_frames
    }

    pub fn facing(&self) -> Direction {
        self.stance.facing
    }

    /// Check if a key for `direction` is held
    pub fn is_moving(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.moving_left,
            Direction::Right => self.moving_right,
        }
    }

    /// The walk poses `direction` will use next
    pub fn walk_cycle(&self, direction: Direction) -> WalkCycle {
        match direction {
            Direction::Left => self.walk_left,
            Direction::Right => self.walk_right,
        }
    }

    fn set_moving(&mut self, direction: Direction, moving: bool) {
        match direction {
            Direction::Left => self.moving_left = moving,
            Direction::Right => self.moving_right = moving,
        }
    }

    fn walk_cycle_mut(&mut self, direction: Direction) -> &mut WalkCycle {
        match direction {
            Direction::Left => &mut self.walk_left,
            Direction::Right => &mut self.walk_right,
        }
    }

    /// Start blending from the displayed pose into `to` over `frames` ticks
    pub fn change_walk_state(&mut self, state: AnimationState, to: StancePoseId, frames: u32) {
        debug_assert!(frames > 0, "transition to {to:?} has no frames");
        if frames == 0 {
            warn!("Transition to {:?} has no frames, holding it as terminal", to);
        }

        if state != self.state {
            debug!("{} -> {} ({:?})", self.state.name(), state.name(), to);
        }

        self.state = state;
        self.stance_to = to;
        self.stance_from = self.stance;
        self.anim_frame = 0;
        self.anim_frames = frames;
    }

    fn can_move(&self, direction: Direction, grid: &ObstructionGrid, config: &WorldConfig) -> bool {
        match direction {
            Direction::Left => self.physics.can_move_left(grid, config),
            Direction::Right => self.physics.can_move_right(grid, config),
        }
    }

    /// A movement key went down
    pub fn start_moving(&mut self, direction: Direction, grid: &ObstructionGrid, config: &WorldConfig) {
        self.set_moving(direction, true);

        if self.can_move(direction, grid, config) {
            let to = self.walk_cycle(direction).primary;
            self.change_walk_state(AnimationState::walking(direction), to, WALK_TRANSITION_FRAMES);
        }
    }

    /// A movement key came up
    ///
    /// Walks the other way if that key is still held, otherwise comes to rest.
    pub fn stop_moving(&mut self, direction: Direction) {
        self.set_moving(direction, false);
        // next tap starts on the other foot
        self.walk_cycle_mut(direction).swap();

        let other = direction.opposite();
        if self.is_moving(other) {
            let to = self.walk_cycle(other).primary;
            self.change_walk_state(AnimationState::walking(other), to, WALK_TRANSITION_FRAMES);
        } else {
            self.change_walk_state(
                AnimationState::Standing,
                StancePoseId::rest(direction),
                WALK_TRANSITION_FRAMES,
            );
        }
    }

    /// The jump key went down; returns whether a jump started
    pub fn start_jump(&mut self) -> bool {
        if !self.physics.grounded {
            return false;
        }

        let facing = self.facing();
        if self.state.is_walking_towards(facing) {
            self.change_walk_state(
                AnimationState::leaping(facing),
                StancePoseId::leap(facing),
                JUMP_TRANSITION_FRAMES,
            );
        } else {
            self.change_walk_state(
                AnimationState::jumping(facing),
                StancePoseId::jump(facing),
                JUMP_TRANSITION_FRAMES,
            );
        }
        true
    }

    /// Leave the landing pose for a walk or a rest
    fn end_jump(&mut self) {
        if self.moving_left {
            let to = self.walk_left.primary;
            self.change_walk_state(AnimationState::WalkingLeft, to, JUMP_TRANSITION_FRAMES);
        } else if self.moving_right {
            let to = self.walk_right.primary;
            self.change_walk_state(AnimationState::WalkingRight, to, JUMP_TRANSITION_FRAMES);
        } else {
            let rest = StancePoseId::rest(self.stance_to.facing());
            self.change_walk_state(AnimationState::Standing, rest, JUMP_TRANSITION_FRAMES);
        }
    }

    /// Advance the blend clock one tick, following the pose graph when a blend completes
    ///
    /// Returns whether the jump impulse was applied this tick.
    pub fn advance_animation(&mut self) -> bool {
        if self.anim_frame >= self.anim_frames {
            return false;
        }

        self.anim_frame += 1;
        if self.anim_frame < self.anim_frames {
            return false;
        }

        let (next, frames) = self.stance_to.continuation();
        if frames == 0 {
            if self.stance_to.is_landing() {
                self.end_jump();
            } else {
                warn!("{:?} has no continuation, holding", self.stance_to);
            }
            return false;
        }

        self.change_walk_state(self.state, next, frames);

        if next.is_takeoff() {
            self.physics.set_force(ForceKind::Jump, JUMP_IMPULSE);
            debug!("Jump impulse applied at ({:.2}, {:.2})", self.physics.position.x, self.physics.position.y);
            return true;
        }
        false
    }

    /// Add this tick's walking step to the body's motion
    pub fn request_motion(&mut self, grid: &ObstructionGrid, config: &WorldConfig) {
        if self.moving_right && self.physics.can_move_right(grid, config) {
            self.physics.move_right(config.player_walk_speed);
        }
        if self.moving_left && self.physics.can_move_left(grid, config) {
            self.physics.move_left(config.player_walk_speed);
        }
    }

    /// Recompute the displayed pose from the blend endpoints
    pub fn update_stance(&mut self) {
        let to = self.stance_to.stance();
        self.stance = if self.anim_frames == 0 {
            to
        } else {
            blend(&self.stance_from, &to, self.anim_frame, self.anim_frames)
        };
    }

    /// Resize the physics footprint to the displayed pose
    pub fn update_height(&mut self) {
        self.physics.height = body_height(&self.stance, &self.body);
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::player()
    }
}
