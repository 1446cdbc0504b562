use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::SnakeConfig;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "snake_high_score.yaml";

fn next_to_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_path() -> String {
    next_to_executable(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    pub high_score_file: String,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            high_score_file: next_to_executable(HIGH_SCORE_FILE_NAME),
        }
    }
}
