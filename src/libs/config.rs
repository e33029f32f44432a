//! Configuration management for taskr.
//!
//! Settings live in `config.json` inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskr\taskr\config.json`
//! - **macOS**: `~/Library/Application Support/taskr/taskr/config.json`
//! - **Linux**: `~/.local/share/taskr/taskr/config.json`
//!
//! A missing file is not an error: every module falls back to its defaults,
//! so the tool works without any setup.
//!
//! ```rust,no_run
//! use taskr::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("store file: {}", config.store_config().file);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Name of the task store in the working directory when nothing else is configured.
pub const DEFAULT_STORE_FILE: &str = "tasks_database.json";

/// A module offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Task store settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file. Relative paths resolve against the working directory.
    pub file: String,

    /// When `true`, an unreadable or malformed store aborts task creation
    /// instead of being treated as an empty list.
    pub fail_on_corrupt: bool,

    /// Pretty-print the JSON written to the store.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            file: DEFAULT_STORE_FILE.to_string(),
            fail_on_corrupt: false,
            pretty: true,
        }
    }
}

impl StoreConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Store settings, or the defaults when the module is not configured.
    pub fn store_config(&self) -> StoreConfig {
        self.store.clone().unwrap_or_default()
    }

    /// Runs the interactive setup, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let modules = [ConfigModule {
            key: "store".to_string(),
            name: Message::ConfigModuleStore.to_string(),
        }];
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selections = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;

        for index in selections {
            if modules[index].key == "store" {
                config.store = Some(StoreConfig::init(&config.store_config())?);
            }
        }

        Ok(config)
    }
}

impl StoreConfig {
    fn init(current: &StoreConfig) -> Result<Self> {
        let theme = ColorfulTheme::default();
        Ok(StoreConfig {
            file: Input::with_theme(&theme)
                .with_prompt(Message::PromptStoreFile.to_string())
                .default(current.file.clone())
                .interact_text()?,
            fail_on_corrupt: Confirm::with_theme(&theme)
                .with_prompt(Message::PromptStoreFailOnCorrupt.to_string())
                .default(current.fail_on_corrupt)
                .interact()?,
            pretty: Confirm::with_theme(&theme)
                .with_prompt(Message::PromptStorePretty.to_string())
                .default(current.pretty)
                .interact()?,
        })
    }
}
