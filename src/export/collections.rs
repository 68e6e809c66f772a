//! Collection merge engine
//!
//! Walks the configured target workspaces in order and nests every non-empty
//! collection under `root folder / workspace / collection`.

use super::print_stats;
use crate::api::{ApiError, CollectionFetch, PostmanClient};
use crate::config::Settings;
use crate::domain::{
    CollectionFolder, CollectionSummary, Folder, MergedDocument, RunStats, Workspace,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub document: MergedDocument,
    pub stats: RunStats,
}

/// Merge collections of the target workspaces into one document.
///
/// Returns `Ok(None)` when no workspaces could be listed or none of the
/// targets exist. Only fatal API errors are returned as `Err`.
pub fn merge_selected_workspaces(
    client: &PostmanClient<'_>,
    settings: &Settings,
) -> Result<Option<MergeReport>, ApiError> {
    println!("Fetching all workspaces...");
    let all_workspaces = client.list_workspaces()?;
    if all_workspaces.is_empty() {
        println!("No workspaces found or failed to fetch workspaces");
        return Ok(None);
    }

    let found = resolve_targets(&all_workspaces, &settings.target_workspaces);
    println!("\nFound {} target workspaces:", found.len());
    for (name, id) in &found {
        println!("   - {name}: {id}");
    }
    if found.is_empty() {
        println!("None of the target workspaces found: {:?}", settings.target_workspaces);
        return Ok(None);
    }

    let mut stats = RunStats::default();
    let mut workspace_folders = Vec::new();

    for target in &settings.target_workspaces {
        let Some(workspace_id) =
            found.iter().find(|(name, _)| *name == target.as_str()).map(|(_, id)| *id)
        else {
            println!("\nWorkspace '{target}' not found, skipping...");
            continue;
        };

        println!("\nProcessing workspace: {target}");
        let summaries = match client.get_workspace(workspace_id) {
            Ok(summaries) => summaries,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                println!("   Failed to get collections: {err}");
                tracing::warn!("skipping workspace {target} ({workspace_id}): {err}");
                continue;
            }
        };
        println!("   Found {} collections", summaries.len());

        let collection_folders = fetch_collections(client, &summaries, &mut stats)?;
        if !collection_folders.is_empty() {
            workspace_folders.push(Folder::new(target.clone(), collection_folders));
        }
    }

    print_stats("collections", &stats);

    Ok(Some(MergeReport {
        document: MergedDocument::new(&settings.root_folder_name, workspace_folders),
        stats,
    }))
}

/// Target workspaces present in the listing, as `(name, id)` in listing order.
///
/// A name listed twice keeps its first position and the last id seen.
fn resolve_targets<'w>(workspaces: &'w [Workspace], targets: &[String]) -> Vec<(&'w str, &'w str)> {
    let mut found: Vec<(&str, &str)> = Vec::new();
    for workspace in workspaces.iter().filter(|ws| targets.contains(&ws.name)) {
        match found.iter_mut().find(|(name, _)| *name == workspace.name) {
            Some(entry) => entry.1 = workspace.id.as_str(),
            None => found.push((workspace.name.as_str(), workspace.id.as_str())),
        }
    }
    found
}

fn fetch_collections(
    client: &PostmanClient<'_>,
    summaries: &[CollectionSummary],
    stats: &mut RunStats,
) -> Result<Vec<CollectionFolder>, ApiError> {
    let mut folders = Vec::new();

    for summary in summaries {
        println!("   Downloading: {}", summary.name);
        let Some(reference) = summary.reference() else {
            println!("      Skipped: no uid or id");
            tracing::warn!(
                "collection {} has neither uid nor id, counting it as failed",
                summary.name
            );
            stats.record_failure();
            continue;
        };

        match client.get_collection(reference, &summary.name)? {
            CollectionFetch::Found(detail) => {
                let items = detail.into_items();
                if items.is_empty() {
                    println!("      Empty collection");
                    stats.record_failure();
                } else {
                    folders.push(Folder::new(summary.name.clone(), items));
                    stats.record_success();
                    println!("      Success");
                }
            }
            CollectionFetch::Unavailable => stats.record_failure(),
        }
    }

    Ok(folders)
}
