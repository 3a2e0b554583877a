//! Application-level configuration loading: catalog source, data directory and feed sizing.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{dao::catalog::CatalogSource, state::DEFAULT_EVENT_CAPACITY};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TABLETOP_SCORER_CONFIG_PATH";
/// Directory holding the durable key-value documents when none is configured.
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    catalog_source: CatalogSource,
    data_dir: PathBuf,
    event_capacity: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration stored at `path`. Missing or malformed files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        catalog = %app_config.catalog_source.describe(),
                        data_dir = %app_config.data_dir.display(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Where the built-in catalog is fetched from.
    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    /// Directory of the file-backed key-value store.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Capacity of the change-feed broadcast channel.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_source: CatalogSource::Embedded,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    catalog_path: Option<PathBuf>,
    #[serde(default)]
    catalog_url: Option<String>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    event_capacity: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let url = value.catalog_url.filter(|url| !url.trim().is_empty());
        let path = value
            .catalog_path
            .filter(|path| !path.as_os_str().is_empty());
        // A URL takes precedence over a path.
        let catalog_source = match (url, path) {
            (Some(url), _) => CatalogSource::Remote(url),
            (None, Some(path)) => CatalogSource::File(path),
            (None, None) => CatalogSource::Embedded,
        };

        Self {
            catalog_source,
            data_dir: value
                .data_dir
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            event_capacity: value
                .event_capacity
                .unwrap_or(DEFAULT_EVENT_CAPACITY)
                .max(1),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
