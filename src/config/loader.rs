// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::GateConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commitgate.toml",
    ".commitgate.toml",
    ".config/commitgate.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir).or_else(find_user_config_file)
}

/// Find the configuration file starting from a specific directory and
/// walking up to the filesystem root.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        // Try parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// Look in the home directory, then the XDG config directory.
fn find_user_config_file() -> Option<PathBuf> {
    if let Some(found) = dirs::home_dir().and_then(|home| first_existing(&home)) {
        return Some(found);
    }

    let user_config = dirs::config_dir()?.join("commitgate").join("config.toml");
    user_config.exists().then_some(user_config)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GateConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GateConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GateConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read config file: {}", e),
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GateConfig> {
    toml::from_str(content).map_err(|e| {
        ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        }
        .into()
    })
}
