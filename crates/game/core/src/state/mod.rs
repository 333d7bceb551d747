//! Creature state representation.
//!
//! Runtime layers clone or query this state but mutate it exclusively through
//! the engine. Level pixels are not part of the state; they are reached through
//! [`crate::env::OpacityGrid`].
pub mod types;

pub use types::{CreatureSnapshot, CreatureState, Facing, Point};
