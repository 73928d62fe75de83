use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SolaceConfig {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub chat: ChatConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    pub default_profile: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    /// How many recent user messages feed the response engine's context.
    pub context_messages: usize,
    pub history_page_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct JournalConfig {
    pub search_limit: usize,
}

impl Default for SolaceConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            storage: StorageConfig::default(),
            chat: ChatConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_solace_dir()
            .join("solace.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            default_profile: "default".into(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_messages: 5,
            history_page_size: 50,
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { search_limit: 50 }
    }
}

/// Returns `~/.solace/`
pub fn default_solace_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".solace")
}

/// Returns the default config file path: `~/.solace/config.toml`
pub fn default_config_path() -> PathBuf {
    default_solace_dir().join("config.toml")
}

impl SolaceConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            SolaceConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (SOLACE_DB, SOLACE_PROFILE, SOLACE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SOLACE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("SOLACE_PROFILE") {
            self.storage.default_profile = val;
        }
        if let Ok(val) = std::env::var("SOLACE_LOG_LEVEL") {
            self.app.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
