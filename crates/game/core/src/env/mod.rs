//! Read-only pixel data the engine queries.
//!
//! The level and every sprite are exposed through the [`OpacityGrid`]
//! capability so collision never depends on how the pixels are stored.
//! [`AlphaMask`] is the in-memory implementation used by the runtime and tests.
mod error;
mod grid;
mod mask;

pub use error::GridError;
pub use grid::{GridDimensions, OpacityGrid};
pub use mask::AlphaMask;
