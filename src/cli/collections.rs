//! Collections command implementation

use anyhow::Result;

use crate::api::{HttpTransport, PostmanClient};
use crate::config::Settings;
use crate::export::merge_selected_workspaces;
use crate::output::write_json_pretty;

pub fn run(settings: &Settings) -> Result<()> {
    println!("Starting Postman collection export...\n");

    let transport = HttpTransport::new(settings)?;
    let client = PostmanClient::new(&transport);

    let Some(report) = merge_selected_workspaces(&client, settings)? else {
        println!("No data to save");
        return Ok(());
    };

    let output_path = settings.collection_output_path();
    write_json_pretty(&output_path, &report.document)?;
    tracing::debug!(
        "merged {} workspaces, {} of {} collections",
        report.document.workspaces().len(),
        report.stats.success,
        report.stats.total
    );
    println!("\nMerged collection saved to: {}", output_path.display());
    Ok(())
}
