use super::body::PhysicsComponent;

/// How a static thing obstructs movement
///
/// Assigned per thing type, not per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstructionType {
    /// Walked through, never stood on
    Unobstructive,
    /// Solid box with a flat top
    Obstructive,
    /// 45 degree ramp whose top rises from left to right
    LeftSlant45,
    /// 45 degree ramp whose top rises from right to left
    RightSlant45,
}

/// Horizontal side of a footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl ObstructionType {
    /// Height of the thing's top surface under `body`, or `None` if it can't be stood on
    pub fn top_at(self, thing: &PhysicsComponent, body: &PhysicsComponent) -> Option<f64> {
        match self {
            Self::Unobstructive => None,
            Self::Obstructive => Some(thing.position.y + thing.height),
            Self::LeftSlant45 => Some(thing.position.y + (body.position.x - thing.position.x)),
            Self::RightSlant45 => Some(
                thing.position.y + (thing.position.x + thing.width - body.right()),
            ),
        }
    }

    /// Whether a body walking towards `side` is stopped by this thing
    ///
    /// Ramps only act as walls from their tall side.
    pub fn blocks(self, side: Side) -> bool {
        match (self, side) {
            (Self::Obstructive, _) => true,
            (Self::RightSlant45, Side::Right) => true,
            (Self::LeftSlant45, Side::Left) => true,
            _ => false,
        }
    }
}

/// Inclusive horizontal overlap of two footprints
pub fn overlaps_horizontally(a: &PhysicsComponent, b: &PhysicsComponent) -> bool {
    a.position.x <= b.right() && b.position.x <= a.right()
}

/// Strict vertical overlap of two footprints
///
/// Touching along a top edge does not count, so a body standing on a box is
/// not treated as pressed against it.
pub fn overlaps_vertically(a: &PhysicsComponent, b: &PhysicsComponent) -> bool {
    a.position.y < b.top() && b.position.y < a.top()
}

/// Basic axis-aligned box test between two footprints (edges inclusive)
pub fn collision_detected(a: &PhysicsComponent, b: &PhysicsComponent) -> bool {
    overlaps_horizontally(a, b) && a.position.y <= b.top() && b.position.y <= a.top()
}
