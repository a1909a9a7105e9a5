// World record loading from the line-oriented text form

use std::str::FromStr;

use thiserror::Error;

use super::grid::Coordinate;
use super::thing::ThingType;
use crate::core::Vector2;

/// Errors produced while parsing world records
#[derive(Debug, Error, PartialEq)]
pub enum WorldLoadError {
    #[error("line {line}: expected `<x> <y> <thing> [<dx> <dy>]`, got {fields} fields")]
    FieldCount { line: usize, fields: usize },

    #[error("line {line}: invalid {what} `{value}`")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        value: String,
    },

    #[error("line {line}: unknown thing `{name}`")]
    UnknownThing { line: usize, name: String },
}

impl WorldLoadError {
    fn at_line(self, line: usize) -> Self {
        match self {
            Self::FieldCount { fields, .. } => Self::FieldCount { line, fields },
            Self::InvalidNumber { what, value, .. } => Self::InvalidNumber { line, what, value },
            Self::UnknownThing { name, .. } => Self::UnknownThing { line, name },
        }
    }
}

/// One placed thing: its grid cell, type and offset inside the cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRecord {
    pub cell: Coordinate,
    pub thing: ThingType,
    pub offset: Vector2,
}

fn number<T: FromStr>(what: &'static str, value: &str) -> Result<T, WorldLoadError> {
    value.parse().map_err(|_| WorldLoadError::InvalidNumber {
        line: 0,
        what,
        value: value.to_string(),
    })
}

impl FromStr for WorldRecord {
    type Err = WorldLoadError;

    /// Parse a single record; errors carry line 0 until placed by [`parse_world`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 3 && fields.len() != 5 {
            return Err(WorldLoadError::FieldCount {
                line: 0,
                fields: fields.len(),
            });
        }

        let cell = Coordinate::new(number("x", fields[0])?, number("y", fields[1])?);
        let thing = fields[2]
            .parse::<ThingType>()
            .map_err(|_| WorldLoadError::UnknownThing {
                line: 0,
                name: fields[2].to_string(),
            })?;
        let offset = if fields.len() == 5 {
            Vector2::new(number("dx", fields[3])?, number("dy", fields[4])?)
        } else {
            Vector2::ZERO
        };

        Ok(Self { cell, thing, offset })
    }
}

/// Parse a whole world file, skipping blank lines and `#` comments
pub fn parse_world(text: &str) -> Result<Vec<WorldRecord>, WorldLoadError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
        .map(|(line_no, line)| {
            line.parse::<WorldRecord>()
                .map_err(|err| err.at_line(line_no))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_with_offset() {
        let record: WorldRecord = "72 0 oak_log 0.5 0.0".parse().unwrap();
        assert_eq!(record.cell, Coordinate::new(72, 0));
        assert_eq!(record.thing, ThingType::OakLog);
        assert_eq!(record.offset, Vector2::new(0.5, 0.0));
    }

    #[test]
    fn test_parse_world_skips_comments() {
        let text = "\
# a small clearing
60 0 oak

75 0 ramp_up   # climb
76 1 oak_log 0.2 0
";
        let records = parse_world(text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].thing, ThingType::Oak);
        assert_eq!(records[0].offset, Vector2::ZERO);
        assert_eq!(records[1].thing, ThingType::RampUp);
        assert_eq!(records[2].cell, Coordinate::new(76, 1));
    }

    #[test]
    fn test_errors_report_line_numbers() {
        let text = "60 0 oak\n\n61 0 birch\n";
        assert_eq!(
            parse_world(text),
            Err(WorldLoadError::UnknownThing {
                line: 3,
                name: "birch".to_string()
            })
        );

        assert_eq!(
            parse_world("60 0 oak 0.5"),
            Err(WorldLoadError::FieldCount { line: 1, fields: 4 })
        );

        let err = parse_world("# header\nsixty 0 oak").unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid x `sixty`");
    }

    #[test]
    fn test_default_world_parses() {
        let records = parse_world(include_str!("../../../worlds/default.world")).unwrap();
        assert_eq!(records.len(), 10);
        assert!(records.iter().any(|r| r.thing == ThingType::RampDown));
    }
}
