// Viewport that keeps the character centred on screen

use glam::DVec2;

use crate::core::{Vector2, WorldConfig};

/// Pixel offset of the visible window into the world
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Left edge in world pixels
    pub x: f64,
    /// Vertical offset in world pixels
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Centre the window on a footprint at `position` of the given size
    pub fn follow(position: Vector2, width: f64, height: f64, config: &WorldConfig) -> Self {
        let ratio = config.pixel_yard_ratio;
        let screen = DVec2::new(config.screen_width, config.screen_height);
        let pixels = DVec2::from(position) * ratio;

        Self {
            x: pixels.x - screen.x / 2.0 + width * ratio / 2.0,
            y: pixels.y - screen.y / 2.0 - height * ratio / 2.0,
            width: screen.x,
            height: screen.y,
        }
    }

    /// Screen position of a world point, y growing downward
    pub fn to_screen(&self, point: Vector2, config: &WorldConfig) -> Vector2 {
        let ratio = config.pixel_yard_ratio;
        Vector2::new(
            point.x * ratio - self.x,
            config.screen_height - point.y * ratio + self.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_follow_player_start() {
        let config = WorldConfig::default();
        let viewport = Viewport::follow(Vector2::new(70.0, 0.0), 0.25, 1.0, &config);

        assert_abs_diff_eq!(viewport.x, 70.0 * 70.0 - 405.0 + 0.25 * 70.0 / 2.0);
        assert_abs_diff_eq!(viewport.y, -270.0 - 35.0);
        assert_eq!(viewport.width, 810.0);
    }

    #[test]
    fn test_camera_tracks_body() {
        let config = WorldConfig::default();

        for position in [Vector2::new(100.0, 0.0), Vector2::new(100.0, 3.0)] {
            let viewport = Viewport::follow(position, 0.25, 1.0, &config);

            // horizontally centred on the footprint
            let middle = Vector2::new(position.x + 0.125, position.y);
            let screen = viewport.to_screen(middle, &config);
            assert_abs_diff_eq!(screen.x, 405.0, epsilon = 1e-9);
            // the feet stay at the same screen height while jumping
            assert_abs_diff_eq!(screen.y, 270.0 - 35.0, epsilon = 1e-9);
        }
    }
}
