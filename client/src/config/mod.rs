mod config;
mod snake_config;

pub use config::{get_config_manager, get_config_path, Config};
pub use snake_config::SnakeConfig;
