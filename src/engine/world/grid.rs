// Sparse obstruction grid: cell lookup, chunking, grounding and blocking

use std::collections::HashMap;
use std::ops::RangeInclusive;

use log::info;

use super::loader::WorldRecord;
use super::thing::ThingType;
use crate::core::{Vector2, WorldConfig};
use crate::engine::physics::{
    overlaps_horizontally, overlaps_vertically, ObstructionType, PhysicsComponent, Side,
};

/// Slack below which a body with nothing under it counts as standing on bare ground
pub const GROUND_EPSILON: f64 = 0.01;

/// Gap within which an obstruction stops a horizontal step
const BLOCKING_TOLERANCE: f64 = 0.1;

/// Widest thing footprint in whole cells, so left scans reach a thing's origin cell
const MAX_THING_CELLS: i32 = 2;

/// Integer grid cell key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell containing a world point
    pub fn containing(point: Vector2) -> Self {
        Self::new(point.x.floor() as i32, point.y.floor() as i32)
    }
}

/// A rectangular window of grid cells, end-exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Chunk {
    /// Number of cells in the window
    pub fn area(&self) -> usize {
        let w = (self.end_x - self.start_x).max(0) as usize;
        let h = (self.end_y - self.start_y).max(0) as usize;
        w * h
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        (self.start_x..self.end_x).contains(&cell.x) && (self.start_y..self.end_y).contains(&cell.y)
    }
}

/// A static thing placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct ThingInstance {
    pub thing: ThingType,
    pub physics: PhysicsComponent,
}

impl ThingInstance {
    /// Create a thing at `position` with its type's footprint
    pub fn new(thing: ThingType, position: Vector2) -> Self {
        let (width, height) = thing.footprint();
        Self {
            thing,
            physics: PhysicsComponent::new(position, width, height),
        }
    }

    pub fn obstruction(&self) -> ObstructionType {
        self.thing.obstruction()
    }
}

/// Sparse map from grid cell to the static things placed in it
///
/// Populated once before the first tick and read-only while ticking.
#[derive(Debug, Default)]
pub struct ObstructionGrid {
    cells: HashMap<Coordinate, Vec<ThingInstance>>,
    thing_count: usize,
}

impl ObstructionGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from loaded world records
    pub fn from_records(records: &[WorldRecord]) -> Self {
        let mut grid = Self::new();
        for record in records {
            grid.place(record.cell, record.thing, record.offset);
        }
        info!(
            "Loaded {} things into {} grid cells",
            grid.thing_count,
            grid.cells.len()
        );
        grid
    }

    /// Place a thing at `cell + offset`
    pub fn place(&mut self, cell: Coordinate, thing: ThingType, offset: Vector2) {
        let mut position = Vector2::new(cell.x as f64, cell.y as f64);
        position.add(offset);
        self.cells
            .entry(cell)
            .or_default()
            .push(ThingInstance::new(thing, position));
        self.thing_count += 1;
    }

    /// Things in one cell; empty for unpopulated cells
    pub fn things_at(&self, cell: Coordinate) -> &[ThingInstance] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of placed things
    pub fn len(&self) -> usize {
        self.thing_count
    }

    pub fn is_empty(&self) -> bool {
        self.thing_count == 0
    }

    /// Window of cells around a body that is just out of view, clamped to the place
    pub fn chunk_around(&self, body: &PhysicsComponent, config: &WorldConfig) -> Chunk {
        let reach_x = config.chunk_reach_x();
        let reach_y = config.chunk_reach_y();
        let place_w = config.place_width.floor() as i32;
        let place_h = config.place_height.floor() as i32;

        let mut chunk = Chunk {
            start_x: 0,
            start_y: 0,
            end_x: place_w,
            end_y: place_h,
        };

        let bottom = body.position.y.floor() as i32 - reach_y;
        if bottom > 0 {
            chunk.start_y = bottom;
        }
        let top = body.top().floor() as i32 + reach_y;
        if top < place_h {
            chunk.end_y = top;
        }
        let left = body.position.x.floor() as i32 - reach_x;
        if left > 0 {
            chunk.start_x = left;
        }
        let right = body.right().floor() as i32 + reach_x;
        if right < place_w {
            chunk.end_x = right;
        }

        chunk
    }

    /// Every thing inside a chunk, with the cell it was placed in
    pub fn things_in(&self, chunk: Chunk) -> impl Iterator<Item = (Coordinate, &ThingInstance)> {
        (chunk.start_y..chunk.end_y).flat_map(move |y| {
            (chunk.start_x..chunk.end_x).flat_map(move |x| {
                let cell = Coordinate::new(x, y);
                self.things_at(cell).iter().map(move |thing| (cell, thing))
            })
        })
    }

    fn gather(
        &self,
        xs: RangeInclusive<i32>,
        ys: RangeInclusive<i32>,
    ) -> impl Iterator<Item = &ThingInstance> {
        ys.flat_map(move |y| {
            xs.clone()
                .flat_map(move |x| self.things_at(Coordinate::new(x, y)).iter())
        })
    }

    /// Whether `body` is supported, and the height of the support under it
    ///
    /// Candidates come from the foot cell and its left, right and lower
    /// neighbours. With no obstructive candidate under the body, only the bare
    /// ground counts.
    pub fn grounded(&self, body: &PhysicsComponent, config: &WorldConfig) -> (bool, f64) {
        let foot = Coordinate::containing(body.position);

        let highest = self
            .gather(foot.x - 1..=foot.x + 1, foot.y - 1..=foot.y)
            .filter(|thing| overlaps_horizontally(&thing.physics, body))
            .filter_map(|thing| thing.obstruction().top_at(&thing.physics, body))
            .fold(None, |best: Option<f64>, top| {
                Some(best.map_or(top, |b| b.max(top)))
            });

        match highest {
            Some(top) if top > config.ground_y => (top >= body.position.y, top),
            _ => (
                body.position.y <= config.ground_y + GROUND_EPSILON,
                config.ground_y,
            ),
        }
    }

    /// Whether a thing next to `body` stops it stepping towards `side`
    pub fn blocked(&self, body: &PhysicsComponent, side: Side) -> bool {
        let cell = Coordinate::containing(body.position);
        let rows = cell.y - 1..=body.top().floor() as i32;
        let columns = match side {
            Side::Right => {
                body.right().floor() as i32..=(body.right() + BLOCKING_TOLERANCE).floor() as i32
            }
            Side::Left => cell.x - MAX_THING_CELLS..=cell.x,
        };

        self.gather(columns, rows).any(|thing| {
            if !thing.obstruction().blocks(side) {
                return false;
            }
            let gap = match side {
                Side::Right => thing.physics.position.x - body.right(),
                Side::Left => body.position.x - thing.physics.right(),
            };
            (0.0..BLOCKING_TOLERANCE).contains(&gap) && overlaps_vertically(&thing.physics, body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn body_at(x: f64, y: f64) -> PhysicsComponent {
        PhysicsComponent::new(Vector2::new(x, y), 0.25, 1.0)
    }

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    #[test]
    fn test_empty_cell_lookup() {
        let grid = ObstructionGrid::new();
        assert!(grid.things_at(Coordinate::new(3, 4)).is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_place_applies_offset() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(10, 2), ThingType::OakLog, Vector2::new(0.5, 0.25));

        let things = grid.things_at(Coordinate::new(10, 2));
        assert_eq!(things.len(), 1);
        assert_eq!(things[0].physics.position, Vector2::new(10.5, 2.25));
        assert_eq!(things[0].physics.width, 0.3);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_bare_ground() {
        let grid = ObstructionGrid::new();
        assert_eq!(grid.grounded(&body_at(70.0, 0.005), &config()), (true, 0.0));
        assert_eq!(grid.grounded(&body_at(70.0, 0.5), &config()), (false, 0.0));
    }

    #[test]
    fn test_unobstructive_things_are_ignored() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::Oak, Vector2::ZERO);

        assert_eq!(grid.grounded(&body_at(70.5, 0.0), &config()), (true, 0.0));
        assert_eq!(grid.grounded(&body_at(70.5, 3.0), &config()), (false, 0.0));
    }

    #[test]
    fn test_standing_on_log() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::OakLog, Vector2::ZERO);

        let (grounded, ground_y) = grid.grounded(&body_at(70.1, 0.25), &config());
        assert!(grounded);
        assert_abs_diff_eq!(ground_y, 0.3);

        // hovering above it
        let (grounded, _) = grid.grounded(&body_at(70.1, 0.6), &config());
        assert!(!grounded);
    }

    #[test]
    fn test_log_in_neighbouring_cell_supports() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(71, 0), ThingType::OakLog, Vector2::ZERO);

        // body spans 70.8..71.05, foot cell 70
        let (grounded, ground_y) = grid.grounded(&body_at(70.8, 0.2), &config());
        assert!(grounded);
        assert_abs_diff_eq!(ground_y, 0.3);
    }

    #[test]
    fn test_ramp_heights() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::RampUp, Vector2::ZERO);
        grid.place(Coordinate::new(80, 0), ThingType::RampDown, Vector2::ZERO);

        let (grounded, ground_y) = grid.grounded(&body_at(70.5, 0.4), &config());
        assert!(grounded);
        assert_abs_diff_eq!(ground_y, 0.5);

        // right side of the body at 80.5
        let (grounded, ground_y) = grid.grounded(&body_at(80.25, 0.4), &config());
        assert!(grounded);
        assert_abs_diff_eq!(ground_y, 0.5);
    }

    #[test]
    fn test_grounding_is_idempotent() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::RampUp, Vector2::ZERO);
        grid.place(Coordinate::new(70, 0), ThingType::OakLog, Vector2::new(0.6, 0.0));

        for x in [69.9, 70.2, 70.45, 70.7] {
            let mut body = body_at(x, 0.0);
            let (grounded, ground_y) = grid.grounded(&body, &config());
            assert!(grounded);

            body.position.y = ground_y;
            assert_eq!(grid.grounded(&body, &config()), (true, ground_y));
        }
    }

    #[test]
    fn test_blocked_by_log_on_either_side() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::OakLog, Vector2::new(0.3, 0.0));

        // right side at 70.25, log starts at 70.3
        assert!(grid.blocked(&body_at(70.0, 0.0), Side::Right));
        // further away than the tolerance
        assert!(!grid.blocked(&body_at(69.9, 0.0), Side::Right));
        // log ends at 70.6
        assert!(grid.blocked(&body_at(70.65, 0.0), Side::Left));
        assert!(!grid.blocked(&body_at(70.65, 0.0), Side::Right));
        // standing on top of it does not block
        assert!(!grid.blocked(&body_at(70.0, 0.3), Side::Right));
    }

    #[test]
    fn test_ramps_block_only_from_tall_side() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(70, 0), ThingType::RampUp, Vector2::ZERO);

        // approaching the low end walks up it
        assert!(!grid.blocked(&body_at(69.7, 0.0), Side::Right));
        // approaching the tall end from the right is a wall
        assert!(grid.blocked(&body_at(71.05, 0.0), Side::Left));
    }

    #[test]
    fn test_chunk_clamps_to_place() {
        let grid = ObstructionGrid::new();
        let config = config();

        let chunk = grid.chunk_around(&body_at(2.0, 0.0), &config);
        assert_eq!(chunk.start_x, 0);
        assert_eq!(chunk.start_y, 0);
        assert_eq!(chunk.end_x, 2 + 8);
        assert_eq!(chunk.end_y, 1 + 5);

        let chunk = grid.chunk_around(&body_at(70.0, 20.0), &config);
        assert_eq!(chunk.start_x, 62);
        assert_eq!(chunk.start_y, 15);
        assert_eq!(chunk.end_x, 78);
        assert_eq!(chunk.end_y, 26);
        assert_eq!(chunk.area(), 16 * 11);

        let chunk = grid.chunk_around(&body_at(254.0, 0.0), &config);
        assert_eq!(chunk.end_x, 256);
    }

    #[test]
    fn test_things_in_chunk() {
        let mut grid = ObstructionGrid::new();
        grid.place(Coordinate::new(65, 0), ThingType::Oak, Vector2::ZERO);
        grid.place(Coordinate::new(75, 1), ThingType::OakLog, Vector2::ZERO);
        grid.place(Coordinate::new(120, 0), ThingType::Oak, Vector2::ZERO);

        let chunk = grid.chunk_around(&body_at(70.0, 0.0), &config());
        let mut cells: Vec<Coordinate> = grid.things_in(chunk).map(|(cell, _)| cell).collect();
        cells.sort();
        assert_eq!(cells, vec![Coordinate::new(65, 0), Coordinate::new(75, 1)]);
        assert!(chunk.contains(Coordinate::new(65, 0)));
        assert!(!chunk.contains(Coordinate::new(120, 0)));
    }
}
