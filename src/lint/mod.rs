//! Lint rules over the schema object model
//!
//! Rules only read objects. Each one reports at most one [`Note`] per object,
//! and the configured [`Severity`] decides whether the note is shown and
//! whether it fails the run.
pub mod has_routine;
pub mod pk;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::Schema;
use crate::catalog::routine::Routine;
use crate::catalog::table::Table;
use crate::flavor::Flavor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ignore => "ignore",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Severity::Ignore),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(anyhow!(
                "Invalid severity {:?}: expected ignore, warning, or error",
                s
            )),
        }
    }
}

/// What a rule found about one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub summary: String,
    pub message: String,
}

/// The object kind a rule inspects, with its check function.
#[derive(Clone, Copy)]
pub enum Checker {
    Table(fn(&Table, Flavor) -> Option<Note>),
    Routine(fn(&Routine, Flavor) -> Option<Note>),
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub default_severity: Severity,
    pub checker: Checker,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("default_severity", &self.default_severity)
            .finish()
    }
}

static RULES: &[Rule] = &[has_routine::RULE, pk::RULE];

/// Every registered rule, sorted by name.
pub fn rules() -> &'static [Rule] {
    RULES
}

pub fn find_rule(name: &str) -> Option<&'static Rule> {
    rules().iter().find(|r| r.name == name)
}

/// A note attributed to a rule and object, at its effective severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub rule: &'static str,
    pub object: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub note: Note,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.severity, self.rule, self.note.message, self.note.summary
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub annotations: Vec<Annotation>,
}

impl LintReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.annotations
            .iter()
            .filter(|a| a.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

/// Runs every registered rule at its configured severity.
#[derive(Debug, Clone)]
pub struct Linter {
    severities: BTreeMap<&'static str, Severity>,
}

impl Linter {
    /// Build a linter with per-rule overrides applied on top of each rule's
    /// default severity. Unknown rule names are rejected.
    pub fn new(overrides: &BTreeMap<String, Severity>) -> Result<Self> {
        let mut severities: BTreeMap<&'static str, Severity> = rules()
            .iter()
            .map(|r| (r.name, r.default_severity))
            .collect();

        for (name, severity) in overrides {
            let rule = find_rule(name).ok_or_else(|| anyhow!("Unknown lint rule {:?}", name))?;
            severities.insert(rule.name, *severity);
        }

        Ok(Self { severities })
    }

    pub fn severity(&self, rule: &str) -> Option<Severity> {
        self.severities.get(rule).copied()
    }

    pub fn lint(&self, schema: &Schema, flavor: Flavor) -> LintReport {
        let mut annotations = Vec::new();

        for rule in rules() {
            let severity = self
                .severity(rule.name)
                .unwrap_or(rule.default_severity);
            if severity == Severity::Ignore {
                debug!("Skipping lint rule {}", rule.name);
                continue;
            }

            let notes: Vec<(String, Note)> = match rule.checker {
                Checker::Table(check) => schema
                    .tables
                    .iter()
                    .filter_map(|t| check(t, flavor).map(|n| (t.key().to_string(), n)))
                    .collect(),
                Checker::Routine(check) => schema
                    .routines
                    .iter()
                    .filter_map(|r| check(r, flavor).map(|n| (r.key().to_string(), n)))
                    .collect(),
            };

            annotations.extend(notes.into_iter().map(|(object, note)| Annotation {
                rule: rule.name,
                object,
                severity,
                note,
            }));
        }

        LintReport { annotations }
    }
}
