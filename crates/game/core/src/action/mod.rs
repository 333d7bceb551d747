//! Discrete movement intents fed to the engine by an input layer.

/// Arrow-key style direction of a single intent.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A single movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveIntent {
    /// Left/Right walk along the terrain; Up/Down nudge the worm by one pixel.
    Step(Direction),
    /// Direct translation, rejected as a whole if the target collides.
    Translate { dx: i32, dy: i32 },
}

impl MoveIntent {
    pub const fn step(direction: Direction) -> Self {
        Self::Step(direction)
    }

    pub const fn translate(dx: i32, dy: i32) -> Self {
        Self::Translate { dx, dy }
    }
}

impl From<Direction> for MoveIntent {
    fn from(direction: Direction) -> Self {
        Self::Step(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn directions_round_trip_through_strings() {
        for direction in Direction::iter() {
            let parsed: Direction = direction.as_ref().parse().unwrap();
            assert_eq!(parsed, direction);
        }
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
    }
}
