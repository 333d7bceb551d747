pub mod common;
pub mod creature;

pub use common::{Facing, Point};
pub use creature::{CreatureSnapshot, CreatureState};
