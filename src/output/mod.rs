//! JSON file output

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write `value` as 2-space indented UTF-8 JSON, creating parent directories.
///
/// Overwrites an existing file in place; there is no temp-file rename.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }

    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed serializing {}", path.display()))?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed writing {}", path.display()))
}

/// `"My Env"` → `"My_Env.json"`. Names differing only in spaces vs underscores collide.
pub fn environment_file_name(name: &str) -> String {
    format!("{name}.json").replace(' ', "_")
}
