//! Content factory for building engine inputs from data files.

use std::path::{Path, PathBuf};

use game_core::{AlphaMask, GameConfig, Hitbox};

use crate::loaders::{ConfigLoader, LoadResult, MaskLoader, Scenario, ScenarioLoader, SpriteLoader};

/// Everything needed to start a session.
#[derive(Clone, Debug)]
pub struct LoadedScenario {
    pub level: AlphaMask,
    pub hitbox: Hitbox,
    /// Config with the scenario's spawn override already applied.
    pub config: GameConfig,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── scenarios/
/// │   └── hills.ron
/// ├── levels/
/// │   └── hills.png
/// └── sprites/
///     └── worm.png
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Like [`Self::load_config`], but falls back to defaults when the file
    /// does not exist. A file that exists and fails to parse is still an error.
    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(GameConfig::default())
        }
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Resolve a scenario's images and combine them with `config`.
    pub fn load(&self, scenario: &Scenario, config: GameConfig) -> LoadResult<LoadedScenario> {
        let level = MaskLoader::load(&self.data_dir.join(&scenario.level))?;
        let hitbox = SpriteLoader::load_hitbox(&self.data_dir.join(&scenario.worm))?;
        let config = match scenario.spawn {
            Some(spawn) => config.with_spawn(spawn),
            None => config,
        };

        Ok(LoadedScenario {
            level,
            hitbox,
            config,
        })
    }

    /// Load scenario `name` together with the directory's config.
    pub fn load_named(&self, name: &str) -> LoadResult<LoadedScenario> {
        let scenario = self.load_scenario(name)?;
        let config = self.load_config_or_default()?;
        self.load(&scenario, config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
