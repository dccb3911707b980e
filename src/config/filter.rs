use crate::catalog::Schema;
use crate::config::types::Objects;
use glob::Pattern;
use tracing::debug;

/// Object filter for determining which tables are managed
pub struct ObjectFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl ObjectFilter {
    /// Create a new object filter from configuration
    pub fn new(config: &Objects) -> Self {
        Self {
            include: config.include.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// Check if a table should be included
    pub fn should_include_table(&self, table_name: &str) -> bool {
        // Check exclude patterns first
        if self.matches_patterns(&self.exclude, table_name) {
            return false;
        }

        // If include patterns are specified, table must match one of them
        if !self.include.is_empty() {
            return self.matches_patterns(&self.include, table_name);
        }

        true
    }

    /// Apply filter to a schema, removing tables that shouldn't be managed
    pub fn filter_schema(&self, mut schema: Schema) -> Schema {
        let before = schema.tables.len();
        schema
            .tables
            .retain(|table| self.should_include_table(&table.name));
        debug!(
            "Object filter kept {} of {} tables",
            schema.tables.len(),
            before
        );
        schema
    }

    fn matches_patterns(&self, patterns: &[String], name: &str) -> bool {
        patterns.iter().any(|pattern| {
            Pattern::new(pattern)
                .map(|p| p.matches(name))
                .unwrap_or(false)
        })
    }
}
