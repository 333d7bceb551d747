//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration required to run a headless session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the content directory (`scenarios/`, `levels/`, `sprites/`).
    pub data_dir: PathBuf,
    /// Scenario name, resolved as `scenarios/{name}.ron`.
    pub scenario: String,
    /// Intent script replayed after spawning.
    pub script: String,
    /// Game config file; `config.toml` in the data directory when unset.
    pub config_path: Option<PathBuf>,
    /// Also write logs to `worms.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "default".to_string(),
            script: String::new(),
            config_path: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WORMS_DATA_DIR` - Content directory (default: `data`)
    /// - `WORMS_SCENARIO` - Scenario name (default: `default`)
    /// - `WORMS_SCRIPT` - Intent script, e.g. `right*3 tick*10 dig`
    /// - `WORMS_CONFIG` - Path to a game config TOML file
    /// - `WORMS_LOG_DIR` - Directory for an additional log file
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = read("WORMS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scenario) = read("WORMS_SCENARIO") {
            config.scenario = scenario;
        }
        if let Some(script) = read("WORMS_SCRIPT") {
            config.script = script;
        }
        config.config_path = read("WORMS_CONFIG").map(PathBuf::from);
        config.log_dir = read("WORMS_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Command-line arguments, when present, replace the script.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        let args: Vec<String> = args.into_iter().collect();
        if !args.is_empty() {
            self.script = args.join(" ");
        }
        self
    }
}
