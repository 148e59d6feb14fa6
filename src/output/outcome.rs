//! Reporting what a selection resolved to.

use std::path::Path;

use console::style;

use crate::error::Result;
use crate::output::tree_view::format_duration;
use crate::selection::SelectionOutcome;

/// Print the resolved entries and their total length.
pub fn print_outcome(outcome: &SelectionOutcome) {
    println!();
    println!(
        "{}",
        style(format!("Selected {} item(s):", outcome.len())).bold()
    );

    for (index, entry) in outcome.entries.iter().enumerate() {
        let duration = entry.duration().map(format_duration).unwrap_or_default();
        let badge = if entry.is_privileged() {
            style("member-only").yellow().to_string()
        } else {
            String::new()
        };
        println!("  {:>3}. {}  {}  {}", index + 1, entry.title(), duration, badge);
    }

    let total: u64 = outcome.entries.iter().filter_map(|e| e.duration()).sum();
    println!("  Total length: {}", format_duration(total));

    if outcome.requires_confirmation {
        println!(
            "  {}",
            style("Member-only items will be skipped without a login").yellow()
        );
    }
}

/// Write the resolved entries as pretty JSON.
pub fn write_plan(path: &Path, outcome: &SelectionOutcome) -> Result<()> {
    let content = serde_json::to_string_pretty(outcome)?;
    std::fs::write(path, content)?;
    tracing::debug!("Wrote download plan to {}", path.display());
    Ok(())
}
