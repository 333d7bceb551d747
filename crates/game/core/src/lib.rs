//! Deterministic terrain and collision rules for the worm game.
//!
//! `game-core` defines the pixel-accurate rules (outline extraction, collision
//! tests, stepped walking, gravity and spawn placement) and exposes pure APIs
//! that the runtime and offline tools reuse. All creature mutation flows
//! through [`engine::TerrainMover`]; the level itself is only ever read through
//! the [`env::OpacityGrid`] capability.
pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, MoveIntent};
pub use collision::{Hitbox, collides, collides_with_threshold, extract_outline};
pub use config::{ConfigError, GameConfig};
pub use engine::{FallOutcome, HorizontalOutcome, MoveOutcome, TerrainMover, VerticalOutcome};
pub use env::{AlphaMask, GridDimensions, GridError, OpacityGrid};
pub use error::{ErrorSeverity, GameError};
pub use state::{CreatureSnapshot, CreatureState, Facing, Point};
