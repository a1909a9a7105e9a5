// Per-tick simulation: intents, animation, physics, blending and limb targets

use std::collections::HashMap;

use log::trace;

use crate::core::{ConfigError, Vector2, WorldConfig};
use crate::engine::audio::AudioMixer;
use crate::engine::camera::Viewport;
use crate::engine::input::Intent;
use crate::engine::world::{Chunk, ObstructionGrid};

use super::characters::{AnimationState, Character, Direction, Limb, StancePoseId};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Number of this tick, starting at 1
    pub tick: u64,
    pub state: AnimationState,
    /// Pose being blended towards
    pub stance_to: StancePoseId,
    /// Whether the jump impulse was applied
    pub jumped: bool,
    pub grounded: bool,
    pub position: Vector2,
}

/// The player character in a static world
#[derive(Debug)]
pub struct Simulation {
    character: Character,
    grid: ObstructionGrid,
    config: WorldConfig,
    audio: AudioMixer,
    limb_targets: HashMap<Limb, Vector2>,
    tick: u64,
}

impl Simulation {
    /// Place the default player in `grid`
    pub fn new(grid: ObstructionGrid, config: WorldConfig) -> Result<Self, ConfigError> {
        Self::with_character(Character::player(), grid, config)
    }

    pub fn with_character(
        mut character: Character,
        grid: ObstructionGrid,
        config: WorldConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        character.physics.settle(&grid, &config);

        Ok(Self {
            character,
            grid,
            config,
            audio: AudioMixer::default(),
            limb_targets: HashMap::new(),
            tick: 0,
        })
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn grid(&self) -> &ObstructionGrid {
        &self.grid
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn audio(&self) -> &AudioMixer {
        &self.audio
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    /// Aim a limb at a world point on every following tick
    pub fn set_limb_target(&mut self, limb: Limb, target: Vector2) {
        self.limb_targets.insert(limb, target);
    }

    /// Hand a limb back to the animation
    pub fn clear_limb_target(&mut self, limb: Limb) {
        self.limb_targets.remove(&limb);
    }

    /// Camera offset that keeps the character centred
    pub fn viewport(&self) -> Viewport {
        let physics = &self.character.physics;
        Viewport::follow(physics.position, physics.width, physics.height, &self.config)
    }

    /// Cells worth drawing around the character
    pub fn visible_chunk(&self) -> Chunk {
        self.grid.chunk_around(&self.character.physics, &self.config)
    }

    fn apply(&mut self, intent: Intent) {
        let character = &mut self.character;
        match intent {
            Intent::MoveLeftPressed => {
                character.start_moving(Direction::Left, &self.grid, &self.config)
            }
            Intent::MoveRightPressed => {
                character.start_moving(Direction::Right, &self.grid, &self.config)
            }
            Intent::MoveLeftReleased => character.stop_moving(Direction::Left),
            Intent::MoveRightReleased => character.stop_moving(Direction::Right),
            Intent::JumpPressed => {
                character.start_jump();
            }
            Intent::MutePressed => {
                self.audio.toggle_mute();
            }
        }
    }

    /// Advance one fixed step
    pub fn tick(&mut self, intents: &[Intent]) -> TickReport {
        self.tick += 1;

        for &intent in intents {
            self.apply(intent);
        }

        let character = &mut self.character;
        let jumped = character.advance_animation();
        character.request_motion(&self.grid, &self.config);
        character.physics.integrate(&self.grid, &self.config);
        character.update_stance();
        character.update_height();

        for (limb, target) in &self.limb_targets {
            limb.reach(
                &mut character.stance,
                character.physics.position,
                character.physics.height,
                &character.body,
                *target,
            );
        }

        let report = TickReport {
            tick: self.tick,
            state: character.state(),
            stance_to: character.stance_to(),
            jumped,
            grounded: character.physics.grounded,
            position: character.physics.position,
        };
        trace!("{:?}", report);
        report
    }
}
