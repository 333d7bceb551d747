/// Result of [`super::TerrainMover::move_horizontal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalOutcome {
    /// `dx` was zero or the worm was airborne; nothing changed.
    Ignored,
    /// Walked until the distance budget ran out.
    Walked { steps: u32 },
    /// Stopped in front of a wall too tall to climb.
    Blocked { steps: u32 },
    /// Stepped over an edge with no ground within reach and started falling.
    WalkedOffLedge { steps: u32 },
}

/// Result of [`super::TerrainMover::move_vertical`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalOutcome {
    Moved,
    /// Target collided; the position is untouched.
    Rejected,
}

/// Result of one [`super::TerrainMover::gravity_tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallOutcome {
    /// Grounded and did not move.
    Resting,
    /// Moved down without reaching ground; the worm is now airborne.
    Falling { distance: i32 },
    /// Reached ground this tick after falling or moving `distance` pixels.
    Landed { distance: i32 },
}

/// Result of dispatching a [`crate::MoveIntent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Horizontal(HorizontalOutcome),
    Vertical(VerticalOutcome),
}

impl MoveOutcome {
    /// True when the intent changed the worm's position.
    pub const fn moved(&self) -> bool {
        match self {
            MoveOutcome::Horizontal(HorizontalOutcome::Ignored) => false,
            MoveOutcome::Horizontal(
                HorizontalOutcome::Walked { steps }
                | HorizontalOutcome::Blocked { steps }
                | HorizontalOutcome::WalkedOffLedge { steps },
            ) => *steps > 0,
            MoveOutcome::Vertical(outcome) => matches!(outcome, VerticalOutcome::Moved),
        }
    }
}

/// Result of [`super::TerrainMover::drop_to_ground`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropOutcome {
    /// Pixels moved up to leave terrain the spawn point was embedded in.
    pub raised: u32,
    /// Net pixels moved down after leaving terrain, including the final
    /// one-pixel back-off.
    pub descent: i32,
    /// False when the worm passed the bottom edge without finding ground.
    pub found_ground: bool,
}
