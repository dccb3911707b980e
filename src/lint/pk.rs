use super::{Checker, Note, Rule, Severity};
use crate::catalog::table::Table;
use crate::flavor::Flavor;

pub const RULE: Rule = Rule {
    name: "pk",
    description: "Flag tables that lack a primary key",
    default_severity: Severity::Warning,
    checker: Checker::Table(check),
};

fn check(table: &Table, _: Flavor) -> Option<Note> {
    if table.primary_key.is_some() {
        return None;
    }
    Some(Note {
        summary: "No primary key".to_string(),
        message: format!(
            "{} does not define a PRIMARY KEY. InnoDB falls back to a hidden row id, which slows row-based replication and leaves no stable key for online schema change tools.",
            table.key()
        ),
    })
}
