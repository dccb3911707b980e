//! myschema compare - Compare a desired schema with a live one
//!
//! Both sides are desired-state files; the live side is typically a dump
//! introspected from a running server, possibly of a different version.

use anyhow::Result;
use console::style;
use itertools::Itertools;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;
use std::path::Path;

use super::load_filtered_schema;
use crate::config::Config;
use crate::diff::{Classification, ObjectComparison, SchemaComparison, compare_schemas};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CompareFormat {
    /// One line per differing object
    Summary,
    /// Unified diffs of every differing definition
    Detailed,
}

/// Returns true if the schemas differ functionally
pub fn cmd_compare(
    config: &Config,
    desired: &Path,
    live: &Path,
    format: CompareFormat,
) -> Result<bool> {
    eprintln!("Comparing {} with {}...", desired.display(), live.display());
    let desired_schema = load_filtered_schema(config, desired)?;
    let live_schema = load_filtered_schema(config, live)?;

    let report = compare_schemas(&desired_schema, &live_schema, config.flavor);
    print!("{}", format_comparison(&report, format));
    Ok(report.has_changes())
}

pub fn format_comparison(report: &SchemaComparison, format: CompareFormat) -> String {
    let mut out = String::new();
    let differing = report
        .objects
        .iter()
        .filter(|o| o.classification != Classification::Identical)
        .collect::<Vec<_>>();

    // Writing to a String never fails
    for object in &differing {
        let _ = writeln!(
            out,
            "{:<10} {}",
            styled_classification(object.classification),
            object.key
        );
        if format == CompareFormat::Detailed {
            out.push_str(&detailed_object(object));
        }
    }

    if !report.has_changes() {
        out.push_str("No differences found\n");
    }

    let counts = report.counts();
    let summary = [
        Classification::Identical,
        Classification::Cosmetic,
        Classification::Changed,
        Classification::Added,
        Classification::Removed,
    ]
    .iter()
    .map(|c| format!("{} {}", counts.get(c).copied().unwrap_or(0), c))
    .join(", ");
    let _ = writeln!(out, "{}", summary);
    out
}

fn styled_classification(classification: Classification) -> String {
    let text = style(classification.as_str());
    match classification {
        Classification::Identical => text.dim(),
        Classification::Cosmetic => text.cyan(),
        Classification::Changed => text.yellow(),
        Classification::Added => text.green(),
        Classification::Removed => text.red(),
    }
    .to_string()
}

fn detailed_object(object: &ObjectComparison) -> String {
    let mut out = String::new();

    if object.classification == Classification::Cosmetic {
        for column in &object.columns {
            if column.classification == Classification::Cosmetic {
                let _ = writeln!(
                    out,
                    "    column {}: {} vs {}",
                    column.name,
                    column.live.as_deref().unwrap_or_default(),
                    column.desired.as_deref().unwrap_or_default()
                );
            }
        }
        return out;
    }

    let live = object.live.as_deref().unwrap_or_default();
    let desired = object.desired.as_deref().unwrap_or_default();
    out.push_str(&unified_definition_diff(live, desired));
    out
}

/// Line diff from the live definition to the desired one
pub fn unified_definition_diff(live: &str, desired: &str) -> String {
    let mut out = String::new();
    let diff = TextDiff::from_lines(live, desired);
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        let _ = match change.tag() {
            ChangeTag::Equal => writeln!(out, "      {}", line),
            ChangeTag::Delete => writeln!(out, "    {}", style(format!("- {}", line)).red()),
            ChangeTag::Insert => writeln!(out, "    {}", style(format!("+ {}", line)).green()),
        };
    }
    out
}
