//! postman-export: Export Postman workspaces to JSON files
//!
//! Merges the collections of selected workspaces into one nested collection
//! and writes every environment to its own file, using the Postman REST API.

use anyhow::Result;

mod api;
mod cli;
mod config;
mod domain;
mod export;
mod output;

fn main() -> Result<()> {
    cli::run()
}
