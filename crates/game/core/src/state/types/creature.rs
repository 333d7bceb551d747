use super::common::{Facing, Point};

/// Mutable state of the controllable worm.
///
/// Created once when the level loads and mutated by every tick and every move
/// intent. Only [`crate::engine::TerrainMover`] changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureState {
    /// Top-left corner of the sprite in level coordinates.
    pub position: Point,
    pub facing: Facing,
    pub on_ground: bool,
    /// Pixels per tick. Grows by one every airborne tick with no cap.
    pub fall_speed: i32,
}

impl CreatureState {
    /// Creates an airborne creature at rest at `position`, facing right.
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            facing: Facing::Right,
            on_ground: false,
            fall_speed: 0,
        }
    }

    pub const fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub const fn grounded(mut self) -> Self {
        self.on_ground = true;
        self
    }

    /// Plain copy of the fields a renderer needs.
    pub const fn snapshot(&self) -> CreatureSnapshot {
        CreatureSnapshot {
            position: self.position,
            facing: self.facing,
            on_ground: self.on_ground,
        }
    }
}

/// Read-only view of a creature consumed once per frame by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSnapshot {
    pub position: Point,
    pub facing: Facing,
    pub on_ground: bool,
}
