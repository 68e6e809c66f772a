//! Environments command implementation

use anyhow::Result;

use crate::api::{HttpTransport, PostmanClient};
use crate::config::Settings;
use crate::export::export_environments;

pub fn run(settings: &Settings) -> Result<()> {
    println!("Exporting all environments...\n");

    let transport = HttpTransport::new(settings)?;
    let client = PostmanClient::new(&transport);
    let stats = export_environments(&client, settings)?;

    tracing::debug!(
        "environment export finished: {} of {} saved",
        stats.success,
        stats.total
    );
    println!("\nDone.");
    Ok(())
}
