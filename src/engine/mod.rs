// Engine modules: physics, world grid, input, camera, audio and loop timing

pub mod audio;
pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod world;
