// Static world: thing types, the obstruction grid and world record loading

mod grid;
mod loader;
mod thing;

pub use grid::{Chunk, Coordinate, ObstructionGrid, ThingInstance, GROUND_EPSILON};
pub use loader::{parse_world, WorldLoadError, WorldRecord};
pub use thing::ThingType;
