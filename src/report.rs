//! Report rendering.
//!
//! Pure text assembly: the rendered report is a function of the frequency
//! table, the threshold, the processed-project metadata, and the supplied
//! timestamp. Writing the artifact to disk is the orchestrator's job.

use crate::aggregate::FrequencyTable;
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::path::PathBuf;

/// Render the plugins report.
///
/// Partitioning is strict: a count greater than `threshold` lands in
/// "Used Often"; a count equal to the threshold is "Used Less Often".
/// Either section is omitted entirely when empty. When `show_projects`
/// is set and `project_paths` is non-empty, the processed paths are
/// appended as their own section.
pub fn render(
    table: &FrequencyTable,
    threshold: u32,
    project_paths: &[PathBuf],
    show_projects: bool,
    generated_at: DateTime<Local>,
) -> String {
    let (often, less_often) = partition(table, threshold);

    let mut out = String::new();
    let _ = writeln!(out, "# Plugins Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    write_section(&mut out, "Used Often", &often);
    write_section(&mut out, "Used Less Often", &less_often);

    if show_projects && !project_paths.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Processed Projects");
        let _ = writeln!(out);
        for path in project_paths {
            let _ = writeln!(out, "- {}", path.display());
        }
    }

    out
}

fn write_section(out: &mut String, title: &str, entries: &[(String, u32)]) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    let _ = writeln!(out);
    for (name, count) in entries {
        let _ = writeln!(out, "- {name}: {count} times");
    }
}

/// Split the table into (often, less-often), each sorted by count
/// descending with identifier ascending as the tie-break.
fn partition(table: &FrequencyTable, threshold: u32) -> (Vec<(String, u32)>, Vec<(String, u32)>) {
    let mut often = Vec::new();
    let mut less_often = Vec::new();

    for (name, count) in table.iter() {
        if count > threshold {
            often.push((name.to_string(), count));
        } else {
            less_often.push((name.to_string(), count));
        }
    }

    sort_entries(&mut often);
    sort_entries(&mut less_often);
    (often, less_often)
}

fn sort_entries(entries: &mut [(String, u32)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}
