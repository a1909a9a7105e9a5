// Spatial audio mixing for sounds placed in the world

use crate::core::WorldConfig;

/// Volume and pan for one sound relative to the listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMix {
    /// Attenuation on a log scale, 0 at the listener and -10 at the edge of earshot
    pub volume: f64,
    /// -1 fully left through 1 fully right
    pub pan: f64,
}

/// Mix for a sound at `source_x` heard from `listener_x`, or `None` when out of earshot
pub fn spatial_mix(listener_x: f64, source_x: f64, earshot: f64) -> Option<SpatialMix> {
    let offset = source_x - listener_x;
    if offset.abs() > earshot {
        return None;
    }
    Some(SpatialMix {
        volume: -10.0 * offset.abs() / earshot,
        pan: offset / earshot,
    })
}

/// Mixer state the simulation exposes to the audio backend
#[derive(Debug, Clone, Default)]
pub struct AudioMixer {
    muted: bool,
}

impl AudioMixer {
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    /// Mix for a sound source, silenced while muted
    pub fn mix(&self, listener_x: f64, source_x: f64, config: &WorldConfig) -> Option<SpatialMix> {
        if self.muted {
            return None;
        }
        spatial_mix(listener_x, source_x, config.earshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mix_at_listener() {
        let mix = spatial_mix(70.0, 70.0, 10.0).unwrap();
        assert_eq!(mix.pan, 0.0);
        assert_eq!(mix.volume, 0.0);
    }

    #[test]
    fn test_mix_attenuates_and_pans() {
        let left = spatial_mix(70.0, 65.0, 10.0).unwrap();
        assert_abs_diff_eq!(left.volume, -5.0);
        assert_abs_diff_eq!(left.pan, -0.5);

        let right = spatial_mix(70.0, 80.0, 10.0).unwrap();
        assert_abs_diff_eq!(right.volume, -10.0);
        assert_abs_diff_eq!(right.pan, 1.0);
    }

    #[test]
    fn test_out_of_earshot() {
        assert_eq!(spatial_mix(70.0, 80.5, 10.0), None);
        assert_eq!(spatial_mix(70.0, 59.0, 10.0), None);
    }

    #[test]
    fn test_mute_toggle() {
        let config = WorldConfig::default();
        let mut mixer = AudioMixer::default();
        assert!(mixer.mix(70.0, 72.0, &config).is_some());

        assert!(mixer.toggle_mute());
        assert!(mixer.mix(70.0, 72.0, &config).is_none());
        assert!(!mixer.toggle_mute());
    }
}
