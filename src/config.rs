// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Condopay", "condopay"));

/// Display and data-source settings. Every field has a default, so an empty
/// JSON object is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency_label: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub date_format: String,
    pub remote_url: Option<String>,
    pub fixture_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_label: "$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            date_format: "%d/%m/%Y".to_string(),
            remote_url: None,
            fixture_path: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let broken = self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|i| matches!(i, Item::Error));
        if broken {
            return Err(ConfigError::DateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.json"))
}

pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// An explicit path must exist; the platform default is optional.
pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading config");
            load_from(&path)
        }
        _ => Ok(Settings::default()),
    }
}
