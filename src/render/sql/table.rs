//! CREATE TABLE statements
//!
//! The statement mirrors SHOW CREATE TABLE: one definition per line, indented
//! two spaces, followed by the table options line.

use crate::catalog::table::Table;
use crate::flavor::Flavor;
use crate::render::{escape_identifier, escape_value_for_create_table};

/// Render a complete CREATE TABLE statement for the given table.
///
/// Definitions are emitted in server order:
/// - columns
/// - primary key
/// - secondary indexes
/// - foreign keys
/// - check constraints
pub fn render_create_table(table: &Table, flavor: Flavor) -> String {
    let mut definitions: Vec<String> = table
        .columns
        .iter()
        .map(|column| column.definition(flavor))
        .collect();

    if let Some(ref pk) = table.primary_key {
        definitions.push(pk.definition(flavor));
    }
    definitions.extend(table.secondary_indexes.iter().map(|idx| idx.definition(flavor)));
    definitions.extend(table.foreign_keys.iter().map(|fk| fk.definition(flavor)));
    definitions.extend(table.checks.iter().map(|check| check.definition(flavor)));

    format!(
        "CREATE TABLE {} (\n  {}\n) {}",
        escape_identifier(&table.name),
        definitions.join(",\n  "),
        render_table_options(table)
    )
}

fn render_table_options(table: &Table) -> String {
    let mut options = format!("ENGINE={}", table.engine);

    if let Some(next) = table.next_auto_increment
        && next > 1
    {
        options.push_str(&format!(" AUTO_INCREMENT={}", next));
    }

    options.push_str(&format!(" DEFAULT CHARSET={}", table.charset));

    if table.show_collation {
        options.push_str(&format!(" COLLATE={}", table.collation));
    }

    if !table.create_options.is_empty() {
        options.push(' ');
        options.push_str(&table.create_options);
    }

    if !table.comment.is_empty() {
        options.push_str(&format!(
            " COMMENT='{}'",
            escape_value_for_create_table(&table.comment)
        ));
    }

    options
}
