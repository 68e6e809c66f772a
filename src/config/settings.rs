//! Runtime settings for an export run

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.getpostman.com";
pub const DEFAULT_EXPORT_DIR: &str = "exports";
pub const DEFAULT_COLLECTION_OUTPUT_FILE: &str = "merged_collection.json";
pub const DEFAULT_ENVIRONMENT_OUTPUT_DIR: &str = "environments";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ROOT_FOLDER_NAME: &str = "Postman Collections";

/// Immutable settings shared by every component of a run.
///
/// Field names double as configuration keys: `POSTMAN_API_KEY` in the
/// environment, `postman_api_key` in a TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Checked lazily, when the first authenticated request is built.
    #[serde(deserialize_with = "de::optional_text")]
    pub postman_api_key: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub postman_api_base: String,
    #[serde(deserialize_with = "de::path")]
    pub export_dir: PathBuf,
    #[serde(deserialize_with = "de::text")]
    pub collection_output_file: String,
    #[serde(deserialize_with = "de::text")]
    pub environment_output_dir: String,
    /// Workspace names to merge, in output order.
    #[serde(deserialize_with = "de::csv_list")]
    pub target_workspaces: Vec<String>,
    #[serde(deserialize_with = "de::seconds")]
    pub request_timeout: u64,
    #[serde(deserialize_with = "de::text")]
    pub root_folder_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            postman_api_key: None,
            postman_api_base: DEFAULT_API_BASE.to_string(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            collection_output_file: DEFAULT_COLLECTION_OUTPUT_FILE.to_string(),
            environment_output_dir: DEFAULT_ENVIRONMENT_OUTPUT_DIR.to_string(),
            target_workspaces: Vec::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            root_folder_name: DEFAULT_ROOT_FOLDER_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn api_key(&self) -> Option<&str> {
        self.postman_api_key.as_deref()
    }

    pub fn api_base(&self) -> &str {
        self.postman_api_base.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// `<EXPORT_DIR>/<COLLECTION_OUTPUT_FILE>`
    pub fn collection_output_path(&self) -> PathBuf {
        self.export_dir.join(&self.collection_output_file)
    }

    /// `<EXPORT_DIR>/<ENVIRONMENT_OUTPUT_DIR>`
    pub fn environment_output_path(&self) -> PathBuf {
        self.export_dir.join(&self.environment_output_dir)
    }
}

/// Lenient deserializers for values that arrive through environment variables.
///
/// The env provider parses `42` or `true` into numbers and booleans, so text
/// fields accept any scalar and keep its textual form.
mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::path::PathBuf;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        scalar_text(value).ok_or_else(|| D::Error::custom("expected a string"))
    }

    pub fn path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        text(deserializer).map(PathBuf::from)
    }

    /// Whole seconds, given as a number or as decimal text.
    pub fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                n.as_u64().ok_or_else(|| D::Error::custom("expected a non-negative integer"))
            }
            Value::String(s) => s.trim().parse().map_err(|_| {
                D::Error::custom(format!("expected a non-negative integer, found {s:?}"))
            }),
            _ => Err(D::Error::custom("expected a non-negative integer")),
        }
    }

    /// Empty or blank values count as unset.
    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            other => {
                let text =
                    scalar_text(other).ok_or_else(|| D::Error::custom("expected a string"))?;
                let trimmed = text.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
        }
    }

    /// Comma-separated string or list; entries trimmed, empties dropped, order kept.
    pub fn csv_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw: Vec<String> = match Value::deserialize(deserializer)? {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    scalar_text(item).ok_or_else(|| D::Error::custom("expected a list of strings"))
                })
                .collect::<Result<_, _>>()?,
            Value::String(s) => s.split(',').map(str::to_string).collect(),
            other => vec![scalar_text(other)
                .ok_or_else(|| D::Error::custom("expected a comma-separated string"))?],
        };

        Ok(raw
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect())
    }
}
