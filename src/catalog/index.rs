//! Indexes, including the primary key
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SchemaObject;
use crate::flavor::Flavor;
use crate::render::sql::render_index_definition;

/* ---------- Data structures ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Regular,
    Unique,
    Primary,
    Fulltext,
    Spatial,
}

impl IndexKind {
    pub fn keyword(self) -> &'static str {
        match self {
            IndexKind::Regular => "KEY",
            IndexKind::Unique => "UNIQUE KEY",
            IndexKind::Primary => "PRIMARY KEY",
            IndexKind::Fulltext => "FULLTEXT KEY",
            IndexKind::Spatial => "SPATIAL KEY",
        }
    }
}

/// Index algorithm, only shown when declared explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexAlgorithm {
    Btree,
    Hash,
}

impl fmt::Display for IndexAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexAlgorithm::Btree => write!(f, "BTREE"),
            IndexAlgorithm::Hash => write!(f, "HASH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexTarget {
    Column(String),
    /// Functional key part (MySQL 8.0.13+)
    Expression(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPart {
    pub target: IndexTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u16>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub descending: bool,
}

impl IndexPart {
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            target: IndexTarget::Column(name.into()),
            prefix_length: None,
            descending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub parts: Vec<IndexPart>,
    #[serde(default = "default_kind")]
    pub kind: IndexKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<IndexAlgorithm>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invisible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulltext_parser: Option<String>,
}

fn default_kind() -> IndexKind {
    IndexKind::Regular
}

impl Index {
    pub fn new(name: impl Into<String>, kind: IndexKind, parts: Vec<IndexPart>) -> Self {
        Self {
            name: name.into(),
            parts,
            kind,
            algorithm: None,
            comment: String::new(),
            invisible: false,
            fulltext_parser: None,
        }
    }

    pub fn primary_key(columns: &[&str]) -> Self {
        Self::new(
            "PRIMARY",
            IndexKind::Primary,
            columns.iter().map(|c| IndexPart::column(*c)).collect(),
        )
    }

    pub fn definition(&self, flavor: Flavor) -> String {
        render_index_definition(self, flavor)
    }

    /// True if equal, or if the only difference is an explicit `USING BTREE`,
    /// which is the default algorithm for every index kind that accepts one.
    pub fn equivalent(&self, other: &Index) -> bool {
        if self == other {
            return true;
        }
        let mut normalized = self.clone();
        if self.accepts_default_btree() && other.accepts_default_btree() {
            normalized.algorithm = other.algorithm;
        }
        normalized == *other
    }

    fn accepts_default_btree(&self) -> bool {
        !matches!(self.kind, IndexKind::Fulltext | IndexKind::Spatial)
            && matches!(self.algorithm, None | Some(IndexAlgorithm::Btree))
    }
}

impl SchemaObject for Index {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        Index::definition(self, flavor)
    }

    fn equivalent(&self, other: &Self) -> bool {
        Index::equivalent(self, other)
    }
}
