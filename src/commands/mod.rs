pub mod compare;
pub mod flavor;
pub mod lint;
pub mod render;

// Re-export all command functions
pub use compare::{CompareFormat, cmd_compare};
pub use flavor::cmd_flavor;
pub use lint::{cmd_lint, cmd_list_rules};
pub use render::cmd_render;

use anyhow::Result;
use std::path::Path;

use crate::catalog::Schema;
use crate::config::{Config, ObjectFilter};
use crate::schema_loader::SchemaLoader;

/// Load a schema file or directory and apply the configured object filter
pub fn load_filtered_schema(config: &Config, path: &Path) -> Result<Schema> {
    let schema = SchemaLoader::new(path).load()?;
    Ok(ObjectFilter::new(&config.objects).filter_schema(schema))
}
