use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{currency::DEFAULT_CURRENCY, errors::ConfigError, utils};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["currency", "plain_output", "show_after_change"];

/// Presentation preferences for the shell. Ledger data is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ISO 4217 code whose symbol prefixes displayed amounts.
    pub currency: String,
    /// Disables colors and decorations in shell output.
    pub plain_output: bool,
    /// Prints the summary and table after every successful change.
    pub show_after_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            plain_output: false,
            show_after_change: true,
        }
    }
}

impl Config {
    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.to_lowercase().as_str() {
            "currency" => {
                let code = value.trim();
                if code.is_empty() {
                    return Err(invalid(key, "currency code cannot be empty"));
                }
                self.currency = code.to_uppercase();
            }
            "plain_output" => self.plain_output = parse_flag(key, value)?,
            "show_after_change" => self.show_after_change = parse_flag(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, "expected on/off")),
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Loads and stores [`Config`] as JSON under a base directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$BUDGET_TRACKER_HOME` or the platform config directory.
    pub fn new() -> Self {
        Self::with_base_dir(utils::base_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the configuration through a temporary file and renames it
    /// into place.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
