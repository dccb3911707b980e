//! myschema render - Print canonical definitions for a desired-state schema

use anyhow::{Result, anyhow};
use std::path::Path;

use super::load_filtered_schema;
use crate::catalog::Schema;
use crate::config::Config;
use crate::flavor::Flavor;

/// Render every object, or a single table, as `;`-terminated statements
pub fn render_schema(schema: &Schema, flavor: Flavor, table: Option<&str>) -> Result<String> {
    let definitions: Vec<String> = match table {
        Some(name) => {
            let table = schema
                .table(name)
                .ok_or_else(|| anyhow!("Table {:?} not found in schema", name))?;
            vec![table.definition(flavor)]
        }
        None => schema.definitions(flavor).into_values().collect(),
    };

    Ok(definitions
        .iter()
        .map(|definition| format!("{};\n", definition))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn cmd_render(config: &Config, path: &Path, table: Option<&str>) -> Result<()> {
    let schema = load_filtered_schema(config, path)?;
    print!("{}", render_schema(&schema, config.flavor, table)?);
    Ok(())
}
