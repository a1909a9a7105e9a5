use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use westpunk::engine::game_loop::GameLoop;
use westpunk::engine::input::{InputConfig, InputManager};
use westpunk::{parse_world, ObstructionGrid, Simulation, WorldConfig};

/// World loaded when no file is given on the command line
const DEFAULT_WORLD: &str = include_str!("../worlds/default.world");

fn load_world(path: Option<PathBuf>) -> Result<ObstructionGrid> {
    let text = match &path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading world file {}", path.display()))?,
        None => DEFAULT_WORLD.to_string(),
    };
    let records = parse_world(&text).with_context(|| match &path {
        Some(path) => format!("parsing {}", path.display()),
        None => "parsing the built-in world".to_string(),
    })?;
    Ok(ObstructionGrid::from_records(&records))
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Westpunk...");

    let config = WorldConfig::default();
    let grid = load_world(std::env::args_os().nth(1).map(PathBuf::from))?;
    let mut simulation = Simulation::new(grid, config.clone())?;
    let mut input = InputManager::new(InputConfig::default());
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Westpunk")
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.screen_width,
            config.screen_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut last_state = simulation.character().state();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.release_all();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.take_pause_request() {
                    game_loop.toggle_pause();
                }
                // intents queue up while paused
                let ticks = game_loop.begin_frame();
                for step in 0..ticks {
                    // intents land on the first tick of the frame
                    let intents = if step == 0 {
                        input.drain_intents()
                    } else {
                        Vec::new()
                    };
                    let report = simulation.tick(&intents);
                    if report.jumped {
                        debug!("Jump at tick {}", report.tick);
                    }
                    if report.state != last_state {
                        info!(
                            "{} at ({:.2}, {:.2})",
                            report.state.name(),
                            report.position.x,
                            report.position.y
                        );
                        last_state = report.state;
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
