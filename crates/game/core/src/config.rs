use crate::error::{ErrorSeverity, GameError};
use crate::state::Point;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// A level pixel is solid when its alpha is strictly greater than this.
    pub solidity_threshold: u8,
    /// Highest step, in pixels, a walking worm climbs without being blocked.
    pub max_climb: u8,
    /// Deepest drop, in pixels, a walking worm steps down without falling.
    pub max_descent: u8,
    /// Horizontal distance requested by a single Left/Right intent.
    pub walk_step: i32,
    /// Distance of a Left intent when it differs from `walk_step`.
    pub walk_step_left: Option<i32>,
    /// Radius of the disc eroded by one terrain hit.
    pub crater_radius: i32,
    /// Alpha removed from every pixel inside a crater.
    pub crater_depth: u8,
    /// Where the worm is placed before it is dropped to the ground.
    pub spawn: Point,
}

impl GameConfig {
    pub const DEFAULT_SOLIDITY_THRESHOLD: u8 = 127;
    pub const DEFAULT_MAX_CLIMB: u8 = 2;
    pub const DEFAULT_MAX_DESCENT: u8 = 2;
    pub const DEFAULT_WALK_STEP: i32 = 1;
    pub const DEFAULT_CRATER_RADIUS: i32 = 21;
    pub const DEFAULT_CRATER_DEPTH: u8 = 50;
    pub const DEFAULT_SPAWN: Point = Point::new(50, 15);

    pub const fn new() -> Self {
        Self {
            solidity_threshold: Self::DEFAULT_SOLIDITY_THRESHOLD,
            max_climb: Self::DEFAULT_MAX_CLIMB,
            max_descent: Self::DEFAULT_MAX_DESCENT,
            walk_step: Self::DEFAULT_WALK_STEP,
            walk_step_left: None,
            crater_radius: Self::DEFAULT_CRATER_RADIUS,
            crater_depth: Self::DEFAULT_CRATER_DEPTH,
            spawn: Self::DEFAULT_SPAWN,
        }
    }

    pub const fn with_spawn(mut self, spawn: Point) -> Self {
        self.spawn = spawn;
        self
    }

    /// Pixels walked by a Left intent.
    pub const fn left_step(&self) -> i32 {
        match self.walk_step_left {
            Some(step) => step,
            None => self.walk_step,
        }
    }

    /// Checks values that deserialization alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walk_step < 0 {
            return Err(ConfigError::NegativeWalkStep {
                field: "walk_step",
                value: self.walk_step,
            });
        }
        if let Some(value) = self.walk_step_left.filter(|step| *step < 0) {
            return Err(ConfigError::NegativeWalkStep {
                field: "walk_step_left",
                value,
            });
        }
        if self.crater_radius < 0 {
            return Err(ConfigError::NegativeCraterRadius {
                value: self.crater_radius,
            });
        }
        Ok(())
    }
}

/// Configuration values the engine refuses to run with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Walk distances are magnitudes; the intent supplies the sign.
    #[error("{field} must not be negative, got {value}")]
    NegativeWalkStep { field: &'static str, value: i32 },

    #[error("crater_radius must not be negative, got {value}")]
    NegativeCraterRadius { value: i32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NegativeWalkStep { .. } => "CONFIG_NEGATIVE_WALK_STEP",
            ConfigError::NegativeCraterRadius { .. } => "CONFIG_NEGATIVE_CRATER_RADIUS",
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
