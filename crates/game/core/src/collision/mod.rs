//! Pixel-accurate collision between a sprite outline and a level mask.
mod hitbox;

pub use hitbox::{Hitbox, extract_outline};

use crate::config::GameConfig;
use crate::env::OpacityGrid;
use crate::state::Point;

/// Tests `hitbox` placed at `position` against `level` using the default
/// solidity threshold.
pub fn collides<G>(position: Point, hitbox: &Hitbox, level: &G) -> bool
where
    G: OpacityGrid + ?Sized,
{
    collides_with_threshold(position, hitbox, level, GameConfig::DEFAULT_SOLIDITY_THRESHOLD)
}

/// True when any outline point lands on a level pixel whose alpha exceeds
/// `threshold`. Pixels outside the level are never solid.
pub fn collides_with_threshold<G>(position: Point, hitbox: &Hitbox, level: &G, threshold: u8) -> bool
where
    G: OpacityGrid + ?Sized,
{
    hitbox
        .iter()
        .any(|offset| level.is_solid(position + offset, threshold))
}
