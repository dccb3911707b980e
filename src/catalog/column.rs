//! Table columns
use serde::{Deserialize, Serialize};

use super::SchemaObject;
use super::column_type::ColumnType;
use super::utils::{
    empty_string_as_none, optional_charsets_equivalent, optional_collations_equivalent,
};
use crate::flavor::Flavor;
use crate::render::sql::render_column_definition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Virtual,
    Stored,
}

impl GenerationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            GenerationKind::Virtual => "VIRTUAL",
            GenerationKind::Stored => "STORED",
        }
    }
}

/// Expression of a generated column, always paired with its storage kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation {
    pub expression: String,
    pub kind: GenerationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Defaults to NOT NULL when omitted from a schema file, unlike
    /// [`Column::new`] which builds a nullable column.
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_increment: bool,
    /// Ready-to-emit expression, i.e. already quote-wrapped if a string
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<Generation>,
    /// Only populated for textual types
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub charset: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub collation: Option<String>,
    /// Whether SHOW CREATE TABLE includes the CHARACTER SET clause. Always true
    /// when the charset differs from the table default, sometimes true otherwise.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_charset: bool,
    /// Whether SHOW CREATE TABLE includes the COLLATE clause; logic differs by flavor.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_collation: bool,
    /// Column compression (Percona Server or MariaDB only)
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub compression: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invisible: bool,
    /// MariaDB inline check constraint clause
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_clause: Option<String>,
    /// Spatial reference system; `Some(0)` is an explicit SRID 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl Column {
    /// A nullable column with no attributes beyond its type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            auto_increment: false,
            default: None,
            on_update: None,
            generated: None,
            charset: None,
            collation: None,
            show_charset: false,
            show_collation: false,
            compression: None,
            comment: String::new(),
            invisible: false,
            check_clause: None,
            srid: None,
        }
    }

    /// This column's definition clause, for use as part of a DDL statement.
    pub fn definition(&self, flavor: Flavor) -> String {
        render_column_definition(self, flavor)
    }

    /// True if the two columns are equal, or only differ in cosmetic ways:
    /// CHARACTER SET / COLLATE clauses that are redundant with the table
    /// default, utf8 vs utf8mb3 naming, or the presence of an integer display
    /// width. Comments are never cosmetic.
    pub fn equivalent(&self, other: &Column) -> bool {
        if self == other {
            return true;
        }
        if !self.column_type.equivalent(&other.column_type) {
            return false;
        }

        let mut normalized = self.clone();
        normalized.column_type = other.column_type.clone();
        normalized.show_charset = other.show_charset;
        normalized.show_collation = other.show_collation;
        if optional_charsets_equivalent(self.charset.as_deref(), other.charset.as_deref()) {
            normalized.charset = other.charset.clone();
        }
        if optional_collations_equivalent(self.collation.as_deref(), other.collation.as_deref()) {
            normalized.collation = other.collation.clone();
        }
        normalized == *other
    }
}

impl SchemaObject for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        Column::definition(self, flavor)
    }

    fn equivalent(&self, other: &Self) -> bool {
        Column::equivalent(self, other)
    }
}
