//! Scenario loader.

use std::path::{Path, PathBuf};

use game_core::Point;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Which level and worm sprite to play with.
///
/// Image paths are relative to the content data directory.
///
/// ```ron
/// Scenario(
///     level: "levels/hills.png",
///     worm: "sprites/worm.png",
///     spawn: Some((x: 50, y: 15)),
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub level: PathBuf,
    pub worm: PathBuf,
    /// Overrides the configured spawn point.
    #[serde(default)]
    pub spawn: Option<Point>,
}

impl Scenario {
    pub fn new(level: impl Into<PathBuf>, worm: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            worm: worm.into(),
            spawn: None,
        }
    }

    pub fn with_spawn(mut self, spawn: Point) -> Self {
        self.spawn = Some(spawn);
        self
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scenario_with_spawn() {
        let scenario = ScenarioLoader::parse(
            r#"Scenario(
                level: "levels/hills.png",
                worm: "sprites/worm.png",
                spawn: Some((x: 12, y: 3)),
            )"#,
        )
        .unwrap();

        assert_eq!(
            scenario,
            Scenario::new("levels/hills.png", "sprites/worm.png").with_spawn(Point::new(12, 3))
        );
    }

    #[test]
    fn spawn_is_optional() {
        let scenario =
            ScenarioLoader::parse(r#"Scenario(level: "level.png", worm: "worm.png")"#).unwrap();
        assert_eq!(scenario.spawn, None);
    }

    #[test]
    fn malformed_scenario_is_reported() {
        let err = ScenarioLoader::parse("Scenario(level: 3)").unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario RON"));
    }
}
