//! Constraint definition clauses, as printed inside CREATE TABLE.

use crate::catalog::constraint::{Check, ForeignKey, ReferentialAction};
use crate::flavor::Flavor;
use crate::render::escape_identifier;

/// Render a FOREIGN KEY constraint clause.
///
/// RESTRICT rules are the default and are never printed by the server.
pub fn render_foreign_key_definition(fk: &ForeignKey, _flavor: Flavor) -> String {
    let column_list = fk
        .columns
        .iter()
        .map(|c| escape_identifier(c))
        .collect::<Vec<_>>()
        .join(", ");
    let ref_column_list = fk
        .referenced_columns
        .iter()
        .map(|c| escape_identifier(c))
        .collect::<Vec<_>>()
        .join(", ");
    let ref_table = if fk.referenced_schema.is_empty() {
        escape_identifier(&fk.referenced_table)
    } else {
        format!(
            "{}.{}",
            escape_identifier(&fk.referenced_schema),
            escape_identifier(&fk.referenced_table)
        )
    };

    let mut sql = format!(
        "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
        escape_identifier(&fk.name),
        column_list,
        ref_table,
        ref_column_list
    );

    if fk.on_delete != ReferentialAction::Restrict {
        sql.push_str(&format!(" ON DELETE {}", fk.on_delete));
    }
    if fk.on_update != ReferentialAction::Restrict {
        sql.push_str(&format!(" ON UPDATE {}", fk.on_update));
    }

    sql
}

/// Render a CHECK constraint clause. Only MySQL-family servers support
/// unenforced checks, which they print with a versioned comment.
pub fn render_check_definition(check: &Check, flavor: Flavor) -> String {
    let mut sql = format!(
        "CONSTRAINT {} CHECK ({})",
        escape_identifier(&check.name),
        check.clause
    );
    if !check.enforced && flavor.is_mysql() {
        sql.push_str(" /*!80016 NOT ENFORCED */");
    }
    sql
}
