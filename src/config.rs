//! Dashboard settings stored in the `.launchboard` folder.
//!
//! Settings live in a single TOML file; a missing file loads defaults so a
//! fresh checkout works without any setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Name of the settings file inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Dataset file used when the settings carry no override.
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Errors that can occur while loading dashboard settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for this schema.
    #[error("failed to parse settings {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings that belong in the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Path to the launch-records CSV. Relative paths resolve against the
    /// process working directory.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

/// Resolve the settings file path inside the application directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the application directory, or defaults if absent.
pub fn load_or_default() -> Result<DashboardSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings from an explicit path, or defaults if the file is absent.
pub fn load_from(path: &Path) -> Result<DashboardSettings, ConfigError> {
    if !path.exists() {
        return Ok(DashboardSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
