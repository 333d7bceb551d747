//! Worms headless client.
//!
//! Composition root: reads configuration from the environment, sets up
//! logging, loads a scenario from the content directory, replays an intent
//! script and prints the final snapshot as JSON on stdout.
//!
//! ```bash
//! WORMS_DATA_DIR=data worms 'right*3 tick*10 dig left up down move(2,-1)'
//! ```
mod config;
mod logging;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, ContentFactory};
use runtime::{Script, Session};

use crate::config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env().with_args(std::env::args().skip(1));
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    run(&config)
}

fn run(config: &ClientConfig) -> Result<()> {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        scenario = %config.scenario,
        "starting worms session"
    );

    let script = Script::parse(&config.script).context("invalid intent script")?;

    let factory = ContentFactory::new(&config.data_dir);
    let scenario = factory
        .load_scenario(&config.scenario)
        .with_context(|| format!("failed to load scenario '{}'", config.scenario))?;
    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config_or_default()?,
    };
    tracing::debug!(?game_config, "game config");

    let loaded = factory.load(&scenario, game_config)?;
    tracing::info!(
        width = loaded.level.width(),
        height = loaded.level.height(),
        outline = loaded.hitbox.len(),
        "content loaded"
    );

    let mut session = Session::from_loaded(loaded)?;
    session.run_script(&script);

    let snapshot = serde_json::to_string_pretty(&session.snapshot())?;
    println!("{snapshot}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn shipped_scenario_replays_a_script() {
        let config = ClientConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
            script: "right*3 tick*10 dig left up down move(2,-1)".to_string(),
            ..ClientConfig::default()
        };

        run(&config).unwrap();
    }

    #[test]
    fn unknown_scenario_is_reported() {
        let config = ClientConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
            scenario: "missing".to_string(),
            ..ClientConfig::default()
        };

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
