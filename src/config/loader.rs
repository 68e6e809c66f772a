//! Settings loading with figment

use crate::config::Settings;
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "postman-export.toml";

const ENV_KEYS: [&str; 8] = [
    "POSTMAN_API_KEY",
    "POSTMAN_API_BASE",
    "EXPORT_DIR",
    "COLLECTION_OUTPUT_FILE",
    "ENVIRONMENT_OUTPUT_DIR",
    "TARGET_WORKSPACES",
    "REQUEST_TIMEOUT",
    "ROOT_FOLDER_NAME",
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(Box<figment::Error>),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        SettingsError::Invalid(Box::new(err))
    }
}

/// Load settings for a run.
///
/// An explicit `config_path` must exist and parse. Without one,
/// `postman-export.toml` in `base_dir` is used when present; if that
/// auto-discovered file is malformed it is ignored with a warning.
pub fn load_settings(base_dir: &Path, config_path: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(SettingsError::MissingFile(path.to_path_buf()));
        }
        return extract(Some(path));
    }

    let discovered = base_dir.join(CONFIG_FILE_NAME);
    if !discovered.is_file() {
        return extract(None);
    }

    match extract(Some(&discovered)) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                discovered.display(),
                err
            );
            extract(None)
        }
    }
}

fn extract(config_file: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut figment = Figment::new();
    if let Some(path) = config_file {
        tracing::debug!("Loading config file {}", path.display());
        figment = figment.merge(Toml::file(path));
    }
    let settings = figment.merge(Serialized::globals(env_values())).extract::<Settings>()?;
    Ok(settings)
}

/// Recognized variables as raw strings, keyed by their lower-case setting name.
///
/// Values stay uninterpreted so names like `007` or `[Beta]` reach `Settings` as written.
fn env_values() -> BTreeMap<String, String> {
    ENV_KEYS
        .iter()
        .filter_map(|key| {
            std::env::var(key).ok().map(|value| (key.to_ascii_lowercase(), value))
        })
        .collect()
}
