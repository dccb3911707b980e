//! CREATE PROCEDURE / CREATE FUNCTION statements

use crate::catalog::routine::{Routine, RoutineKind, SecurityType, SqlDataAccess};
use crate::flavor::Flavor;
use crate::render::{comment_clause, escape_identifier};

/// Render a routine's CREATE statement as SHOW CREATE PROCEDURE/FUNCTION
/// prints it. Each non-default characteristic goes on its own line.
pub fn render_create_routine(routine: &Routine, _flavor: Flavor) -> String {
    let mut sql = String::from("CREATE ");

    if let Some(definer) = render_definer(&routine.definer) {
        sql.push_str(&format!("DEFINER={} ", definer));
    }

    sql.push_str(&format!(
        "{} {}({})",
        routine.kind.object_type().keyword(),
        escape_identifier(&routine.name),
        routine.params
    ));

    if routine.kind == RoutineKind::Function
        && let Some(ref return_type) = routine.return_type
    {
        sql.push_str(&format!(" RETURNS {}", return_type));
    }

    let mut characteristics = Vec::new();
    if routine.deterministic {
        characteristics.push("DETERMINISTIC".to_string());
    }
    if routine.sql_data_access != SqlDataAccess::ContainsSql {
        characteristics.push(routine.sql_data_access.keyword().to_string());
    }
    if routine.security_type == SecurityType::Invoker {
        characteristics.push("SQL SECURITY INVOKER".to_string());
    }
    if let Some(comment) = comment_clause(&routine.comment) {
        characteristics.push(comment);
    }
    for characteristic in characteristics {
        sql.push_str("\n    ");
        sql.push_str(&characteristic);
    }

    sql.push('\n');
    sql.push_str(&routine.body);
    sql
}

/// `user@host` becomes `` `user`@`host` ``. The host is split at the last `@`
/// since user names may contain one.
fn render_definer(definer: &str) -> Option<String> {
    if definer.is_empty() {
        return None;
    }
    Some(match definer.rsplit_once('@') {
        Some((user, host)) => format!("{}@{}", escape_identifier(user), escape_identifier(host)),
        None => escape_identifier(definer),
    })
}
