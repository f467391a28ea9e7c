use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_voice_index")]
    pub voice_index: usize,
    #[serde(default = "default_word_rate")]
    pub word_rate: i32,
    #[serde(default = "default_def_rate")]
    pub def_rate: i32,
    #[serde(default = "default_max_try")]
    pub max_try: usize,
    /// Dictionary API key. When unset, the key file search path applies.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_voice_index() -> usize {
    0
}
fn default_word_rate() -> i32 {
    -2
}
fn default_def_rate() -> i32 {
    0
}
fn default_max_try() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voice_index: default_voice_index(),
            word_rate: default_word_rate(),
            def_rate: default_def_rate(),
            max_try: default_max_try(),
            api_key: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spelldr")
            .join("config.toml")
    }

    /// A max-try of zero would resolve every word on its first wrong guess;
    /// clamp to at least one recorded attempt.
    pub fn validate(&mut self) {
        if self.max_try == 0 {
            self.max_try = 1;
        }
    }
}
