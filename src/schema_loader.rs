//! Load desired-state schema definitions from YAML or JSON files
use anyhow::{Context, Result, anyhow, bail};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::Schema;

const SCHEMA_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Handles discovery and parsing of schema definition files
pub struct SchemaLoader {
    root: PathBuf,
}

impl SchemaLoader {
    /// `root` may be a single file or a directory searched recursively.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self) -> Result<Schema> {
        let files = self.discover_schema_files()?;
        if files.is_empty() {
            bail!("No schema files found in {}", self.root.display());
        }

        let mut merged = Schema::default();
        let mut seen = BTreeSet::new();
        for path in &files {
            let schema = parse_schema_file(path)?;
            merge_into(&mut merged, schema, &mut seen)
                .with_context(|| format!("Failed to merge {}", path.display()))?;
        }

        info!(
            "Loaded {} tables and {} routines from {} file(s)",
            merged.tables.len(),
            merged.routines.len(),
            files.len()
        );
        Ok(merged)
    }

    /// Discover all schema files, sorted for deterministic ordering
    fn discover_schema_files(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.is_dir() {
            return Err(anyhow!("Schema path does not exist: {}", self.root.display()));
        }

        let mut files = Vec::new();
        discover_recursive(&self.root, &mut files)?;
        files.sort();
        Ok(files)
    }
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            discover_recursive(&path, files)?;
        } else if has_schema_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_schema_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCHEMA_EXTENSIONS.contains(&ext))
}

/// Parse one file, choosing the format by extension
pub fn parse_schema_file(path: &Path) -> Result<Schema> {
    debug!("Parsing schema file {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
    let schema = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid JSON schema file: {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid YAML schema file: {}", path.display()))?
    };
    Ok(schema)
}

fn merge_into(merged: &mut Schema, schema: Schema, seen: &mut BTreeSet<String>) -> Result<()> {
    if !schema.name.is_empty() {
        if merged.name.is_empty() {
            merged.name = schema.name;
        } else if merged.name != schema.name {
            bail!(
                "Conflicting schema names {:?} and {:?}",
                merged.name,
                schema.name
            );
        }
    }

    for table in schema.tables {
        if table.columns.is_empty() {
            bail!("{} has no columns", table.key());
        }
        if !seen.insert(table.key().to_string()) {
            bail!("Duplicate definition of {}", table.key());
        }
        merged.tables.push(table);
    }
    for routine in schema.routines {
        if !seen.insert(routine.key().to_string()) {
            bail!("Duplicate definition of {}", routine.key());
        }
        merged.routines.push(routine);
    }
    Ok(())
}
