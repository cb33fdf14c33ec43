//! # Application Config
//!
//! Settings live in `config.yaml` at the root of the data directory and are
//! created with defaults on first start:
//!
//! ```yaml
//! data_format_version: "1.0"
//! currency_symbol: "₹"
//! log_level: info
//! created_at: "2025-01-21T19:30:00+00:00"
//! updated_at: "2025-01-21T19:35:00+00:00"
//! ```
//!
//! The data directory itself is `$BUDGET_BUDDY_DATA_DIR` when set, otherwise
//! `budget-buddy` under the platform data directory.

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{TransactionFormConfig, TransactionTableConfig};

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DATA_DIR_ENV: &str = "BUDGET_BUDDY_DATA_DIR";
const APP_DIR_NAME: &str = "budget-buddy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data format version for future migrations
    pub data_format_version: String,
    /// Symbol shown in front of amounts and accepted in the amount field
    pub currency_symbol: String,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            data_format_version: "1.0".to_string(),
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl AppConfig {
    /// Load `config.yaml` from `data_directory`, writing the defaults if it does not exist yet
    pub fn load_or_create(data_directory: &Path) -> Result<Self> {
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save(data_directory)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Write the config atomically (temp file, then rename)
    pub fn save(&self, data_directory: &Path) -> Result<()> {
        if !data_directory.exists() {
            fs::create_dir_all(data_directory)?;
        }
        let config_path = data_directory.join(CONFIG_FILE_NAME);
        let yaml_content = serde_yaml::to_string(self)?;

        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn set_currency_symbol(&mut self, currency_symbol: &str) {
        self.currency_symbol = currency_symbol.to_string();
        self.updated_at = Utc::now().to_rfc3339();
    }

    pub fn form_config(&self) -> TransactionFormConfig {
        TransactionFormConfig {
            currency_symbol: self.currency_symbol.clone(),
            ..TransactionFormConfig::default()
        }
    }

    pub fn table_config(&self) -> TransactionTableConfig {
        TransactionTableConfig {
            currency_symbol: self.currency_symbol.clone(),
            ..TransactionTableConfig::default()
        }
    }
}

/// Resolve the data directory from the environment or the platform default
pub fn default_data_directory() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}
