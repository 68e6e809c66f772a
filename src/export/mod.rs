//! Export engines: collection merge and per-environment export

pub mod collections;
pub mod environments;

pub use collections::merge_selected_workspaces;
pub use environments::export_environments;

use crate::domain::RunStats;

const RULE_WIDTH: usize = 50;

/// Print the closing statistics block for a run over `noun` ("collections", "environments").
pub fn print_stats(noun: &str, stats: &RunStats) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!("Export Statistics:");
    println!("  Total {noun}: {}", stats.total);
    println!("  Successful: {}", stats.success);
    println!("  Failed: {}", stats.failed);
    println!("{rule}");
}
