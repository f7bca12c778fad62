use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Speech
    pub tts_engine: String,
    pub voice_rate: u32,
    pub voice: String,

    // Dictionary
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Game
    pub max_word_length: usize,
    pub validate_words: bool,

    // Meta
    #[serde(default)]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tts_engine: "auto".to_string(),
            voice_rate: 130,
            voice: "en+f3".to_string(),
            api_base_url: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            request_timeout_secs: 5,
            max_word_length: 8,
            validate_words: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, falling back to defaults if missing or corrupt
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Keep the broken file around for debugging
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Path to the config file
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spellbound")
        .join("config.json")
}
