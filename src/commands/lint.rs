//! myschema lint - Run lint rules over a desired-state schema

use anyhow::Result;
use console::style;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use super::load_filtered_schema;
use crate::config::Config;
use crate::lint::{Linter, Severity, rules};

/// Returns true if any annotation is at error severity
pub fn cmd_lint(config: &Config, path: &Path) -> Result<bool> {
    let schema = load_filtered_schema(config, path)?;
    let linter = Linter::new(&config.lint)?;
    let report = linter.lint(&schema, config.flavor);

    for annotation in &report.annotations {
        let label = match annotation.severity {
            Severity::Error => style(annotation.severity.as_str()).red(),
            _ => style(annotation.severity.as_str()).yellow(),
        };
        println!(
            "{} [{}] {}: {}",
            label, annotation.rule, annotation.object, annotation.note.message
        );
    }

    info!(
        "Lint finished: {} error(s), {} warning(s)",
        report.count(Severity::Error),
        report.count(Severity::Warning)
    );
    if report.annotations.is_empty() {
        println!("No lint problems found");
    }

    Ok(report.has_errors())
}

/// myschema lint --list-rules
pub fn cmd_list_rules(config: &Config) -> Result<()> {
    let linter = Linter::new(&config.lint)?;
    print!("{}", format_rules(&linter));
    Ok(())
}

/// One line per rule with its effective severity
pub fn format_rules(linter: &Linter) -> String {
    let mut out = String::new();
    for rule in rules() {
        let severity = linter.severity(rule.name).unwrap_or(rule.default_severity);
        // Writing to a String never fails
        let _ = writeln!(out, "{:<12} {:<8} {}", rule.name, severity.as_str(), rule.description);
    }
    out
}
