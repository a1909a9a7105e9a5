use std::collections::HashMap;

use log::trace;

use super::collision::Side;
use crate::core::{Vector2, WorldConfig};
use crate::engine::world::ObstructionGrid;

/// Downward acceleration added to the gravity accumulator while airborne (units/tick²)
pub const GRAVITY_ACCEL: f64 = 0.03;

/// Fraction of every force accumulator kept from one tick to the next
pub const FORCE_DAMPING: f64 = 0.8;

/// Upward impulse installed when a jump leaves the ground
pub const JUMP_IMPULSE: Vector2 = Vector2::new(0.0, 0.5);

/// Named force accumulators a body can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceKind {
    Gravity,
    Jump,
    Knockback,
}

impl ForceKind {
    /// Fixed application order, so integration is deterministic
    pub const ALL: [ForceKind; 3] = [ForceKind::Gravity, ForceKind::Jump, ForceKind::Knockback];
}

/// Position, motion and forces of one entity
///
/// `position` is the entity's foot/base point; `width` and `height` extend
/// rightward and upward from it. The same shape is used for the player and
/// for static world things.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsComponent {
    pub position: Vector2,
    /// Motion requested this tick; applied and cleared by [`PhysicsComponent::integrate`]
    pub motion: Vector2,
    forces: HashMap<ForceKind, Vector2>,
    pub width: f64,
    pub height: f64,
    pub grounded: bool,
}

impl PhysicsComponent {
    /// Create a component with no force accumulators
    pub fn new(position: Vector2, width: f64, height: f64) -> Self {
        Self {
            position,
            motion: Vector2::ZERO,
            forces: HashMap::new(),
            width,
            height,
            grounded: false,
        }
    }

    /// Add an empty accumulator for `kind`
    pub fn with_force(mut self, kind: ForceKind) -> Self {
        self.forces.entry(kind).or_insert(Vector2::ZERO);
        self
    }

    /// Current value of a force accumulator, if present
    pub fn force(&self, kind: ForceKind) -> Option<Vector2> {
        self.forces.get(&kind).copied()
    }

    /// Replace (or create) a force accumulator
    pub fn set_force(&mut self, kind: ForceKind, value: Vector2) {
        self.forces.insert(kind, value);
    }

    /// X coordinate of the right side
    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    /// Y coordinate of the top
    pub fn top(&self) -> f64 {
        self.position.y + self.height
    }

    /// Advance one tick: apply forces, move, confine to the place and re-ground
    pub fn integrate(&mut self, grid: &ObstructionGrid, config: &WorldConfig) {
        for kind in ForceKind::ALL {
            let grounded = self.grounded;
            let Some(force) = self.forces.get_mut(&kind) else {
                continue;
            };

            if kind == ForceKind::Gravity {
                if grounded {
                    force.scale(0.0);
                } else {
                    force.add(Vector2::new(0.0, -GRAVITY_ACCEL));
                }
            }
            force.scale(FORCE_DAMPING);
            self.motion.add(*force);
        }

        self.position.add(self.motion);
        self.motion.scale(0.0);

        self.confine_to_place(config);
        self.settle(grid, config);

        trace!(
            "integrated to ({:.3}, {:.3}) grounded={}",
            self.position.x,
            self.position.y,
            self.grounded
        );
    }

    /// Keep the footprint between the place edges so the camera never shows outside the world
    pub fn confine_to_place(&mut self, config: &WorldConfig) {
        let right_edge = config.right_edge();
        if self.right() > right_edge {
            self.position.x = right_edge - self.width;
        }
        let left_edge = config.left_edge();
        if self.position.x < left_edge {
            self.position.x = left_edge;
        }
    }

    /// Recompute `grounded` and snap onto the supporting surface
    pub fn settle(&mut self, grid: &ObstructionGrid, config: &WorldConfig) {
        let (grounded, ground_y) = grid.grounded(self, config);
        self.grounded = grounded;
        if grounded {
            self.position.y = ground_y;
        }
    }

    /// Whether a rightward step is allowed
    pub fn can_move_right(&self, grid: &ObstructionGrid, config: &WorldConfig) -> bool {
        !grid.blocked(self, Side::Right) && self.right() < config.right_edge()
    }

    /// Whether a leftward step is allowed
    pub fn can_move_left(&self, grid: &ObstructionGrid, config: &WorldConfig) -> bool {
        !grid.blocked(self, Side::Left) && self.position.x > config.left_edge()
    }

    /// Request a rightward step, applied on the next integration
    pub fn move_right(&mut self, speed: f64) {
        self.motion.add(Vector2::new(speed, 0.0));
    }

    /// Request a leftward step, applied on the next integration
    pub fn move_left(&mut self, speed: f64) {
        self.motion.add(Vector2::new(-speed, 0.0));
    }
}

/// Common component configurations
pub mod presets {
    use super::*;

    /// The player's starting body: middle-ish of the place, gravity and jump accumulators
    pub fn player_body(x: f64, y: f64, width: f64, height: f64) -> PhysicsComponent {
        PhysicsComponent::new(Vector2::new(x, y), width, height)
            .with_force(ForceKind::Gravity)
            .with_force(ForceKind::Jump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::world::{Coordinate, ThingType};
    use approx::assert_abs_diff_eq;

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    fn airborne_body(y: f64) -> PhysicsComponent {
        presets::player_body(70.0, y, 0.25, 1.0)
    }

    #[test]
    fn test_gravity_accumulates_while_airborne() {
        let grid = ObstructionGrid::new();
        let mut body = airborne_body(5.0);

        body.integrate(&grid, &config());
        // (0 - 0.03) * 0.8
        assert_abs_diff_eq!(body.force(ForceKind::Gravity).unwrap().y, -0.024, epsilon = 1e-12);
        assert_abs_diff_eq!(body.position.y, 5.0 - 0.024, epsilon = 1e-12);
        assert!(!body.grounded);

        body.integrate(&grid, &config());
        // (-0.024 - 0.03) * 0.8
        assert_abs_diff_eq!(body.force(ForceKind::Gravity).unwrap().y, -0.0432, epsilon = 1e-12);
    }

    #[test]
    fn test_motion_is_cleared_after_integration() {
        let grid = ObstructionGrid::new();
        let mut body = airborne_body(0.0);
        body.move_right(0.09);

        body.integrate(&grid, &config());
        assert_abs_diff_eq!(body.position.x, 70.09, epsilon = 1e-12);
        assert_eq!(body.motion, Vector2::ZERO);

        body.integrate(&grid, &config());
        assert_abs_diff_eq!(body.position.x, 70.09, epsilon = 1e-12);
    }

    #[test]
    fn test_gravity_zeroed_when_grounded() {
        let grid = ObstructionGrid::new();
        let mut body = airborne_body(0.0);
        body.set_force(ForceKind::Gravity, Vector2::new(0.0, -0.1));
        body.grounded = true;

        body.integrate(&grid, &config());
        assert_eq!(body.force(ForceKind::Gravity), Some(Vector2::ZERO));
        assert!(body.grounded);
        assert_eq!(body.position.y, 0.0);
    }

    #[test]
    fn test_forces_decay_but_persist() {
        let grid = ObstructionGrid::new();
        let mut body = airborne_body(0.0);
        body.set_force(ForceKind::Jump, JUMP_IMPULSE);

        body.integrate(&grid, &config());
        assert_abs_diff_eq!(body.force(ForceKind::Jump).unwrap().y, 0.4, epsilon = 1e-12);
        // jump 0.4 up, gravity 0.024 down
        assert_abs_diff_eq!(body.position.y, 0.376, epsilon = 1e-12);
        assert!(!body.grounded);
    }

    #[test]
    fn test_damping_converges() {
        let mut force = Vector2::new(0.0, 0.5);
        for _ in 0..60 {
            force.scale(FORCE_DAMPING);
        }
        assert!(force.length() < 1e-6);
        assert!(force.y > 0.0);
    }

    #[test]
    fn test_knockback_is_applied() {
        let grid = ObstructionGrid::new();
        let mut body = airborne_body(0.0);
        body.set_force(ForceKind::Knockback, Vector2::new(-1.0, 0.0));

        body.integrate(&grid, &config());
        assert_abs_diff_eq!(body.position.x, 69.2, epsilon = 1e-12);
    }

    #[test]
    fn test_confine_to_place() {
        let config = config();
        let mut body = airborne_body(0.0);

        body.position.x = 1.0;
        body.confine_to_place(&config);
        assert_abs_diff_eq!(body.position.x, config.left_edge());

        body.position.x = 255.0;
        body.confine_to_place(&config);
        assert_abs_diff_eq!(body.right(), config.right_edge());
    }

    #[test]
    fn test_world_edges_block_movement() {
        let grid = ObstructionGrid::new();
        let config = config();
        let mut body = airborne_body(0.0);

        body.position.x = config.left_edge();
        assert!(!body.can_move_left(&grid, &config));
        assert!(body.can_move_right(&grid, &config));

        body.position.x = config.right_edge() - body.width;
        assert!(!body.can_move_right(&grid, &config));
        assert!(body.can_move_left(&grid, &config));
    }

    #[test]
    fn test_log_blocks_rightward_step() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::OakLog, Vector2::new(0.3, 0.0));
        let config = config();

        // right side at 70.25, log at 70.3: inside the tolerance band
        let body = airborne_body(0.0);
        assert!(!body.can_move_right(&grid, &config));
        assert!(body.can_move_left(&grid, &config));
    }

    #[test]
    fn test_landing_on_log_snaps_to_top() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::OakLog, Vector2::ZERO);
        let mut body = airborne_body(0.35);

        for _ in 0..10 {
            body.integrate(&grid, &config());
        }
        assert!(body.grounded);
        assert_abs_diff_eq!(body.position.y, 0.3, epsilon = 1e-12);
    }
}
