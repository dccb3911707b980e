use super::{Checker, Note, Rule, Severity};
use crate::catalog::routine::Routine;
use crate::flavor::Flavor;

/// Flags every stored procedure or function, for environments that
/// restrict their presence.
pub const RULE: Rule = Rule {
    name: "has-routine",
    description: "Flag any use of stored procs or funcs; intended for environments that restrict their presence",
    default_severity: Severity::Ignore,
    checker: Checker::Routine(check),
};

fn check(routine: &Routine, _: Flavor) -> Option<Note> {
    Some(Note {
        summary: "Routine present".to_string(),
        message: format!(
            "{} found. Some environments restrict use of stored procedures and functions for reasons of scalability or operational complexity.",
            routine.key()
        ),
    })
}
