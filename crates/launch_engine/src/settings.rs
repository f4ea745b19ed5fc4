//! Optional RON settings file for the launch fetch.
//!
//! Every field is optional; anything left out keeps its [`FetchSettings`] default.

use std::fs;
use std::path::Path;
use std::time::Duration;

use launch_logging::{launch_debug, launch_info};
use serde::Deserialize;

use crate::FetchSettings;

pub const SETTINGS_FILENAME: &str = "launches.ron";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    base_url: Option<String>,
    launch_year: Option<u16>,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    max_bytes: Option<u64>,
}

impl SettingsFile {
    fn apply(self, mut settings: FetchSettings) -> FetchSettings {
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(year) = self.launch_year {
            settings.launch_year = year;
        }
        if let Some(ms) = self.connect_timeout_ms {
            settings.connect_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = self.request_timeout_ms {
            settings.request_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(max_bytes) = self.max_bytes {
            settings.max_bytes = Some(max_bytes);
        }
        settings
    }
}

/// Parses settings from RON text, layered over the defaults.
pub fn parse_settings(text: &str) -> Result<FetchSettings, ron::error::SpannedError> {
    let file: SettingsFile = ron::from_str(text)?;
    Ok(file.apply(FetchSettings::default()))
}

/// Loads settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<FetchSettings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            launch_debug!("No settings file at {:?}; using defaults", path);
            return Ok(FetchSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let settings = parse_settings(&text).map_err(|source| SettingsError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    launch_info!("Loaded fetch settings from {:?}", path);
    Ok(settings)
}
