// World configuration - place size, viewport and movement tuning

use thiserror::Error;

/// Errors produced when validating a [`WorldConfig`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("place width {place_width} is narrower than the visible area ({visible_width} units)")]
    PlaceNarrowerThanView { place_width: f64, visible_width: f64 },
}

/// Tunable values shared by physics, chunking, camera and audio
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    // Place dimensions
    /// Width of the place in world units
    pub place_width: f64,
    /// Height of the place in world units
    pub place_height: f64,
    /// Y coordinate of the bare ground
    pub ground_y: f64,

    // Viewport
    /// Screen width in pixels
    pub screen_width: f64,
    /// Screen height in pixels
    pub screen_height: f64,
    /// Pixels per world unit
    pub pixel_yard_ratio: f64,

    // Movement
    /// Horizontal motion added per tick while a walk intent is held
    pub player_walk_speed: f64,

    // Audio
    /// Distance beyond which a sound source is inaudible
    pub earshot: f64,
}

/// The default place: 256 x 128 units viewed through an 810 x 540 window
pub const DEFAULT_WORLD_CONFIG: WorldConfig = WorldConfig {
    place_width: 256.0,
    place_height: 128.0,
    ground_y: 0.0,

    screen_width: 810.0,
    screen_height: 540.0,
    pixel_yard_ratio: 70.0,

    player_walk_speed: 0.09,

    earshot: 10.0,
};

impl Default for WorldConfig {
    fn default() -> Self {
        DEFAULT_WORLD_CONFIG
    }
}

impl WorldConfig {
    /// Half the visible width in world units
    pub fn half_view_width(&self) -> f64 {
        0.5 * self.screen_width / self.pixel_yard_ratio
    }

    /// Leftmost x the character may reach without the camera leaving the place
    pub fn left_edge(&self) -> f64 {
        self.half_view_width()
    }

    /// Rightmost x the character's right side may reach
    pub fn right_edge(&self) -> f64 {
        self.place_width - self.half_view_width()
    }

    /// Horizontal chunk half-extent in whole cells
    pub fn chunk_reach_x(&self) -> i32 {
        (0.75 * self.screen_width / self.pixel_yard_ratio).floor() as i32
    }

    /// Vertical chunk half-extent in whole cells
    pub fn chunk_reach_y(&self) -> i32 {
        (0.75 * self.screen_height / self.pixel_yard_ratio).floor() as i32
    }

    /// Check that all dimensions are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("place_width", self.place_width),
            ("place_height", self.place_height),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("pixel_yard_ratio", self.pixel_yard_ratio),
            ("player_walk_speed", self.player_walk_speed),
            ("earshot", self.earshot),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let visible_width = 2.0 * self.half_view_width();
        if self.place_width < visible_width {
            return Err(ConfigError::PlaceNarrowerThanView {
                place_width: self.place_width,
                visible_width,
            });
        }

        Ok(())
    }
}
