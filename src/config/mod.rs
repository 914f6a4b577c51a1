use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::CliError;

const HOME_ENV: &str = "RETAIL_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".retail_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbol printed in receipt headers and the voucher row.
    pub currency_symbol: String,
    /// Disables coloured status messages.
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "#".into(),
            plain_output: false,
        }
    }
}

impl Config {
    /// Receipt header cells have room for exactly one currency character.
    pub fn is_valid_currency_symbol(symbol: &str) -> bool {
        symbol.chars().count() == 1
    }
}

/// Returns the application data directory, defaulting to `~/.retail_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Loads the stored configuration, or defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, CliError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let mut config: Config = serde_json::from_str(&data)?;
            if !Config::is_valid_currency_symbol(&config.currency_symbol) {
                tracing::warn!(
                    symbol = %config.currency_symbol,
                    "stored currency symbol does not fit the receipt; using default"
                );
                config.currency_symbol = Config::default().currency_symbol;
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
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

fn write_atomic(path: &Path, data: &str) -> Result<(), CliError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
