use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::flavor::Flavor;
use crate::lint::Severity;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigInput {
    /// e.g. `mysql:8.0`, `percona:8.0.36`, `mariadb:11.7`
    pub flavor: Option<String>,
    pub objects: Option<ObjectsInput>,
    /// Rule name to severity overrides
    pub lint: Option<BTreeMap<String, Severity>>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub flavor: Flavor,
    pub objects: Objects,
    pub lint: BTreeMap<String, Severity>,
}

// Object filtering configuration. Patterns are globs matched against table
// names; routines are never filtered.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectsInput {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Objects {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

// CLI argument structures
#[derive(Debug, Clone, Default, Args)]
pub struct FlavorArgs {
    #[arg(long, help = "Target flavor, e.g. mysql:8.0 or mariadb:11.7")]
    pub flavor: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ObjectFilterArgs {
    #[arg(long, help = "Include only these tables (glob patterns)")]
    pub include_tables: Option<Vec<String>>,

    #[arg(long, help = "Exclude these tables (glob patterns)")]
    pub exclude_tables: Option<Vec<String>>,
}

impl From<ObjectFilterArgs> for ObjectsInput {
    fn from(args: ObjectFilterArgs) -> Self {
        ObjectsInput {
            include: args.include_tables,
            exclude: args.exclude_tables,
        }
    }
}

impl ConfigInput {
    /// Build the CLI layer from parsed arguments
    pub fn from_cli_args(flavor: FlavorArgs, objects: ObjectFilterArgs) -> Self {
        let objects = if objects.include_tables.is_none() && objects.exclude_tables.is_none() {
            None
        } else {
            Some(objects.into())
        };
        ConfigInput {
            flavor: flavor.flavor,
            objects,
            lint: None,
        }
    }
}
