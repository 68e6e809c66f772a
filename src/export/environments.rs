//! Environment export engine

use super::print_stats;
use crate::api::{ApiError, PostmanClient};
use crate::config::Settings;
use crate::domain::RunStats;
use crate::output::{environment_file_name, write_json_pretty};
use anyhow::{Context, Result};
use std::fs;

/// Write every environment to `<EXPORT_DIR>/<ENVIRONMENT_OUTPUT_DIR>/<name>.json`.
///
/// Nothing is created when the listing is empty. Fetch and write failures
/// are counted and reported per environment; only fatal API errors and a
/// failure to create the output directory end the run early.
pub fn export_environments(client: &PostmanClient<'_>, settings: &Settings) -> Result<RunStats> {
    let environments = client.list_environments()?;
    let mut stats = RunStats::default();
    if environments.is_empty() {
        println!("No environments found");
        return Ok(stats);
    }

    let output_dir = settings.environment_output_path();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed creating directory: {}", output_dir.display()))?;

    for environment in &environments {
        println!("Exporting: {}", environment.name);

        let payload = match client.get_environment(&environment.uid) {
            Ok(payload) => payload,
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(ApiError::Status { status, body }) => {
                println!("   Failed to fetch: {}", environment.name);
                println!("      Status: {status}");
                println!("      Body: {body}");
                stats.record_failure();
                continue;
            }
            Err(err) => {
                println!("   Error: {} - {err}", environment.name);
                stats.record_failure();
                continue;
            }
        };

        let path = output_dir.join(environment_file_name(&environment.name));
        match write_json_pretty(&path, &payload) {
            Ok(()) => {
                println!("   Saved: {}", path.display());
                stats.record_success();
            }
            Err(err) => {
                println!("   Error: {} - {err:#}", environment.name);
                stats.record_failure();
            }
        }
    }

    print_stats("environments", &stats);
    Ok(stats)
}
