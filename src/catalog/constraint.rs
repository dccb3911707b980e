//! Foreign key and check constraints
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SchemaObject;
use crate::flavor::Flavor;
use crate::render::sql::{render_check_definition, render_foreign_key_definition};

/* ---------- Data structures ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferentialAction {
    #[default]
    Restrict,
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
}

impl ReferentialAction {
    /// RESTRICT and NO ACTION behave identically in InnoDB.
    fn normalized(self) -> Self {
        match self {
            ReferentialAction::NoAction => ReferentialAction::Restrict,
            other => other,
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        };
        f.write_str(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    /// Empty when the referenced table lives in the same schema
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub referenced_schema: String,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    #[serde(default)]
    pub on_update: ReferentialAction,
    #[serde(default)]
    pub on_delete: ReferentialAction,
}

impl ForeignKey {
    pub fn definition(&self, flavor: Flavor) -> String {
        render_foreign_key_definition(self, flavor)
    }

    /// True if equal, or only differing in RESTRICT vs NO ACTION rules.
    pub fn equivalent(&self, other: &ForeignKey) -> bool {
        if self == other {
            return true;
        }
        let mut normalized = self.clone();
        if self.on_update.normalized() == other.on_update.normalized() {
            normalized.on_update = other.on_update;
        }
        if self.on_delete.normalized() == other.on_delete.normalized() {
            normalized.on_delete = other.on_delete;
        }
        normalized == *other
    }
}

impl SchemaObject for ForeignKey {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        ForeignKey::definition(self, flavor)
    }

    fn equivalent(&self, other: &Self) -> bool {
        ForeignKey::equivalent(self, other)
    }
}

fn default_enforced() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub clause: String,
    #[serde(default = "default_enforced")]
    pub enforced: bool,
}

impl Check {
    pub fn new(name: impl Into<String>, clause: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clause: clause.into(),
            enforced: true,
        }
    }

    pub fn definition(&self, flavor: Flavor) -> String {
        render_check_definition(self, flavor)
    }
}

impl SchemaObject for Check {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        Check::definition(self, flavor)
    }

    /// No known cosmetic differences exist for check constraints.
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}
