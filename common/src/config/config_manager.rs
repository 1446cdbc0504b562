use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    /// Returns the cached config, loading it on first use. A missing source
    /// yields `TConfig::default()` and is not cached.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        size: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                size: 10,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.size == 0 {
                return Err("size must be positive".to_string());
            }
            Ok(())
        }
    }

    fn memory_manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, TestConfig> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_saved_config() {
        let manager = memory_manager(None);
        let config = TestConfig {
            name: "board".to_string(),
            size: 30,
        };

        manager.set_config(&config).unwrap();

        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let manager = memory_manager(Some("name: broken\nsize: 0\n"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_malformed_yaml_cant_be_read() {
        let manager = memory_manager(Some("name: [unterminated"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager = memory_manager(None);
        let config = TestConfig {
            name: "zero".to_string(),
            size: 0,
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_file_provider_round_trip() {
        let mut path = std::env::temp_dir();
        path.push(format!("snake_config_manager_test_{}.yaml", rand::random::<u32>()));
        let path = path.to_string_lossy().into_owned();

        let manager: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(&path);
        let config = TestConfig {
            name: "file".to_string(),
            size: 5,
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }
}
