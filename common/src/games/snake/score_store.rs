use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::config::{ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::log;

/// Where the best score lives between runs.
pub trait ScoreStore: Send + Sync {
    /// Returns 0 when nothing usable is stored.
    fn read_high_score(&self) -> u32;
    /// Failures are the store's business; callers do not retry.
    fn write_high_score(&self, score: u32);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// High score kept in a small YAML document.
pub struct ConfigScoreStore<TConfigContentProvider: ConfigContentProvider> {
    manager: ConfigManager<TConfigContentProvider, HighScoreRecord, YamlConfigSerializer>,
}

pub type FileScoreStore = ConfigScoreStore<FileContentConfigProvider>;

impl FileScoreStore {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl<TConfigContentProvider: ConfigContentProvider> ConfigScoreStore<TConfigContentProvider> {
    pub fn new(content_provider: TConfigContentProvider) -> Self {
        Self {
            manager: ConfigManager::new(content_provider, YamlConfigSerializer::new()),
        }
    }
}

impl<TConfigContentProvider> ScoreStore for ConfigScoreStore<TConfigContentProvider>
where
    TConfigContentProvider: ConfigContentProvider + Send + Sync,
{
    fn read_high_score(&self) -> u32 {
        match self.manager.get_config() {
            Ok(record) => record.high_score,
            Err(e) => {
                log!("Ignoring unreadable high score: {}", e);
                0
            }
        }
    }

    fn write_high_score(&self, score: u32) {
        if let Err(e) = self.manager.set_config(&HighScoreRecord { high_score: score }) {
            log!("Failed to save high score {}: {}", score, e);
        }
    }
}

#[derive(Default)]
pub struct MemoryScoreStore {
    high_score: Mutex<u32>,
    writes: Mutex<Vec<u32>>,
}

impl MemoryScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score: Mutex::new(high_score),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every value passed to `write_high_score`, oldest first.
    pub fn writes(&self) -> Vec<u32> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_high_score(&self) -> u32 {
        self.high_score.lock().map(|h| *h).unwrap_or(0)
    }

    fn write_high_score(&self, score: u32) {
        if let Ok(mut high_score) = self.high_score.lock() {
            *high_score = score;
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(score);
        }
    }
}
