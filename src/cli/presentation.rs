//! CLI presentation: text and JSON rendering of command results.

use crate::merge::MergeOutcome;
use crate::tree::render::RenderReport;
use serde_json::json;
use std::path::Path;

/// One-line text summary of a merge run.
pub fn format_merge_text(outcome: &MergeOutcome, dry_run: bool) -> String {
    let heading = if dry_run {
        "Merge (dry run)"
    } else {
        "Merge complete"
    };
    format!(
        "{}: {} sources merged, {} files copied, {} files skipped, {} directories created",
        heading,
        outcome.sources_merged,
        outcome.files_copied,
        outcome.files_skipped,
        outcome.dirs_created
    )
}

/// JSON summary of a merge run.
pub fn format_merge_json(outcome: &MergeOutcome, dry_run: bool) -> String {
    json!({
        "dry_run": dry_run,
        "sources_merged": outcome.sources_merged,
        "files_copied": outcome.files_copied,
        "files_skipped": outcome.files_skipped,
        "dirs_created": outcome.dirs_created,
    })
    .to_string()
}

/// One-line text summary of a tree render.
pub fn format_render_text(report: &RenderReport, output: &Path) -> String {
    format!(
        "Directory structure written to '{}' ({} directories, {} files)",
        output.display(),
        report.directories,
        report.files
    )
}

/// JSON summary of a tree render.
pub fn format_render_json(report: &RenderReport, output: &Path) -> String {
    json!({
        "output": output.display().to_string(),
        "directories": report.directories,
        "files": report.files,
        "unreadable": report.unreadable,
    })
    .to_string()
}
