use std::fmt;
use std::str::FromStr;

use crate::engine::physics::ObstructionType;

/// Kinds of static things that can be placed in a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingType {
    /// Background tree, walked through
    Oak,
    /// Fallen log, solid
    OakLog,
    /// Ramp climbing to the right
    RampUp,
    /// Ramp descending to the right
    RampDown,
}

impl ThingType {
    /// Obstruction behavior shared by every instance of this type
    pub fn obstruction(self) -> ObstructionType {
        match self {
            Self::Oak => ObstructionType::Unobstructive,
            Self::OakLog => ObstructionType::Obstructive,
            Self::RampUp => ObstructionType::LeftSlant45,
            Self::RampDown => ObstructionType::RightSlant45,
        }
    }

    /// Physics footprint (width, height) in world units
    pub fn footprint(self) -> (f64, f64) {
        match self {
            Self::Oak => (2.0, 5.0),
            Self::OakLog => (0.3, 0.3),
            Self::RampUp | Self::RampDown => (1.0, 1.0),
        }
    }

    /// Name used in world records
    pub fn name(self) -> &'static str {
        match self {
            Self::Oak => "oak",
            Self::OakLog => "oak_log",
            Self::RampUp => "ramp_up",
            Self::RampDown => "ramp_down",
        }
    }
}

impl fmt::Display for ThingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oak" => Ok(Self::Oak),
            "oak_log" => Ok(Self::OakLog),
            "ramp_up" => Ok(Self::RampUp),
            "ramp_down" => Ok(Self::RampDown),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for thing in [
            ThingType::Oak,
            ThingType::OakLog,
            ThingType::RampUp,
            ThingType::RampDown,
        ] {
            assert_eq!(thing.name().parse::<ThingType>(), Ok(thing));
        }
        assert!("birch".parse::<ThingType>().is_err());
    }

    #[test]
    fn test_trees_do_not_obstruct() {
        assert_eq!(ThingType::Oak.obstruction(), ObstructionType::Unobstructive);
        assert_eq!(ThingType::OakLog.obstruction(), ObstructionType::Obstructive);
    }
}
