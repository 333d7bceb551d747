//! Level and sprite content plus the loaders that read it from disk.
//!
//! This crate turns data files into the inputs of the terrain engine:
//! - Opacity masks (alpha channel of PNG images) for levels and sprites
//! - Worm outlines traced from hitbox sprites
//! - Scenarios (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime and never appears in creature state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, LoadedScenario, MaskLoader, Scenario,
    ScenarioLoader, SpriteLoader,
};
