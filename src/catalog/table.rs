//! Tables and their child objects
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::column::Column;
use super::constraint::{Check, ForeignKey};
use super::id::{ObjectKey, ObjectType};
use super::index::Index;
use super::utils::{charsets_equivalent, collations_equivalent};
use super::{SchemaObject, all_equivalent};
use crate::flavor::Flavor;
use crate::render::sql::render_create_table;

fn default_engine() -> String {
    "InnoDB".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default = "default_engine")]
    pub engine: String,
    pub charset: String,
    pub collation: String,
    /// Whether SHOW CREATE TABLE includes COLLATE=; logic differs by flavor
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_collation: bool,
    /// Extra table options, e.g. `ROW_FORMAT=COMPRESSED`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub create_options: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_auto_increment: Option<u64>,
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Index>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_indexes: Vec<Index>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<Check>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        charset: impl Into<String>,
        collation: impl Into<String>,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            name: name.into(),
            engine: default_engine(),
            charset: charset.into(),
            collation: collation.into(),
            show_collation: false,
            create_options: String::new(),
            comment: String::new(),
            next_auto_increment: None,
            columns,
            primary_key: None,
            secondary_indexes: Vec::new(),
            foreign_keys: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(ObjectType::Table, self.name.clone())
    }

    /// The full CREATE TABLE statement under the given flavor.
    pub fn definition(&self, flavor: Flavor) -> String {
        render_create_table(self, flavor)
    }

    /// True if equal, or only differing cosmetically: in any child object's
    /// cosmetic attributes, in utf8/utf8mb3 naming of the table default
    /// charset or collation, in COLLATE= visibility, or in the next
    /// auto-increment value.
    pub fn equivalent(&self, other: &Table) -> bool {
        if self == other {
            return true;
        }

        let children_equivalent = all_equivalent(&self.columns, &other.columns)
            && super::equivalent(self.primary_key.as_ref(), other.primary_key.as_ref())
            && all_equivalent(&self.secondary_indexes, &other.secondary_indexes)
            && all_equivalent(&self.foreign_keys, &other.foreign_keys)
            && all_equivalent(&self.checks, &other.checks);
        if !children_equivalent {
            debug!(table = %self.name, "child objects differ functionally");
            return false;
        }

        let mut normalized = self.clone();
        normalized.columns = other.columns.clone();
        normalized.primary_key = other.primary_key.clone();
        normalized.secondary_indexes = other.secondary_indexes.clone();
        normalized.foreign_keys = other.foreign_keys.clone();
        normalized.checks = other.checks.clone();
        normalized.show_collation = other.show_collation;
        normalized.next_auto_increment = other.next_auto_increment;
        if charsets_equivalent(&self.charset, &other.charset) {
            normalized.charset = other.charset.clone();
        }
        if collations_equivalent(&self.collation, &other.collation) {
            normalized.collation = other.collation.clone();
        }

        let equivalent = normalized == *other;
        if !equivalent {
            debug!(table = %self.name, "table options differ functionally");
        }
        equivalent
    }
}

impl SchemaObject for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        Table::definition(self, flavor)
    }

    fn equivalent(&self, other: &Self) -> bool {
        Table::equivalent(self, other)
    }
}
