use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snake_engine::PlayerIdentity;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::games::snake::SnakeSessionSettings;

const CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub player: PlayerIdentity,
    pub game: SnakeSessionSettings,
    pub games: u32,
    pub autopilot: bool,
    #[serde(default)]
    pub render: bool,
    /// Tick as fast as possible instead of on the configured interval.
    #[serde(default)]
    pub headless: bool,
    pub leaderboard_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.player.validate()?;
        self.game.validate()?;
        if !(1..=1000).contains(&self.games) {
            return Err("games must be between 1 and 1000".to_string());
        }
        if !(1..=100).contains(&self.leaderboard_size) {
            return Err("leaderboard_size must be between 1 and 100".to_string());
        }
        if self.headless && !self.autopilot {
            return Err("headless runs need the autopilot enabled".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            player: PlayerIdentity::default(),
            game: SnakeSessionSettings::default(),
            games: 1,
            autopilot: false,
            render: true,
            headless: false,
            leaderboard_size: 3,
            seed: None,
        }
    }
}
