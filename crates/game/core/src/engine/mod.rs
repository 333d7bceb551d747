//! Terrain traversal for a single worm.
//!
//! [`TerrainMover`] is the only code that mutates [`CreatureState`]. It borrows
//! the level mask, the worm's outline and the configuration for the duration of
//! one call; nothing is cached between calls, so terrain may change freely
//! between ticks. Every candidate position is collision-checked before it is
//! committed, so a worm is never left embedded in solid terrain.
mod gravity;
mod outcome;
mod spawn;
mod vertical;
mod walk;

pub use outcome::{DropOutcome, FallOutcome, HorizontalOutcome, MoveOutcome, VerticalOutcome};

use crate::action::{Direction, MoveIntent};
use crate::collision::{Hitbox, collides_with_threshold};
use crate::config::GameConfig;
use crate::env::OpacityGrid;
use crate::state::{CreatureState, Point};

/// Resolves movement of one creature over one level.
pub struct TerrainMover<'a, G: ?Sized> {
    level: &'a G,
    hitbox: &'a Hitbox,
    config: &'a GameConfig,
}

impl<'a, G> TerrainMover<'a, G>
where
    G: OpacityGrid + ?Sized,
{
    pub fn new(level: &'a G, hitbox: &'a Hitbox, config: &'a GameConfig) -> Self {
        Self {
            level,
            hitbox,
            config,
        }
    }

    /// True when the worm's outline placed at `position` touches solid terrain.
    #[inline]
    pub fn collides_at(&self, position: Point) -> bool {
        collides_with_threshold(position, self.hitbox, self.level, self.config.solidity_threshold)
    }

    /// True when the worm stands exactly on top of solid terrain.
    pub fn is_supported(&self, creature: &CreatureState) -> bool {
        self.collides_at(creature.position.offset(0, 1))
    }

    /// Dispatches an input intent.
    ///
    /// Left/Right walk [`GameConfig::left_step`] and `walk_step` pixels along
    /// the terrain, Up/Down nudge the worm one pixel, and
    /// [`MoveIntent::Translate`] is a direct translation.
    pub fn apply(&self, creature: &mut CreatureState, intent: MoveIntent) -> MoveOutcome {
        match intent {
            MoveIntent::Step(Direction::Left) => {
                let dx = self.config.left_step().saturating_neg();
                MoveOutcome::Horizontal(self.move_horizontal(creature, dx))
            }
            MoveIntent::Step(Direction::Right) => {
                MoveOutcome::Horizontal(self.move_horizontal(creature, self.config.walk_step))
            }
            MoveIntent::Step(Direction::Up) => {
                MoveOutcome::Vertical(self.move_vertical(creature, 0, -1))
            }
            MoveIntent::Step(Direction::Down) => {
                MoveOutcome::Vertical(self.move_vertical(creature, 0, 1))
            }
            MoveIntent::Translate { dx, dy } => {
                MoveOutcome::Vertical(self.move_vertical(creature, dx, dy))
            }
        }
    }

    fn level_height(&self) -> i32 {
        i32::try_from(self.level.dimensions().height).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::collision::{Hitbox, extract_outline};
    use crate::env::AlphaMask;

    /// 2x2 opaque worm.
    pub fn block_worm() -> Hitbox {
        extract_outline(&AlphaMask::from_ascii(&["##", "##"]).unwrap())
    }

    pub fn dot_worm() -> Hitbox {
        extract_outline(&AlphaMask::from_ascii(&["#"]).unwrap())
    }

    pub fn level(rows: &[&str]) -> AlphaMask {
        AlphaMask::from_ascii(rows).unwrap()
    }
}
