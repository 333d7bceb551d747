//! Content loaders for reading game data from files.
//!
//! Loaders convert PNG/RON/TOML files into engine inputs. Image decoding stays
//! in this crate so `game-core` never depends on an asset format.

pub mod config;
pub mod factory;
pub mod mask;
pub mod scenario;
pub mod sprite;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, LoadedScenario};
pub use mask::MaskLoader;
pub use scenario::{Scenario, ScenarioLoader};
pub use sprite::SpriteLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
