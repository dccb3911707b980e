use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::flavor::Flavor;
use id::ObjectKey;

pub mod column;
pub mod column_type;
pub mod constraint;
pub mod id;
pub mod index;
pub mod routine;
pub mod table;
pub mod utils;

/// Contract shared by every schema object kind.
///
/// Exact equality is the derived `PartialEq`. `equivalent` is looser: it also
/// holds when the two values differ only cosmetically, e.g. because they were
/// introspected from different server versions.
pub trait SchemaObject: Clone + PartialEq {
    fn name(&self) -> &str;

    /// Canonical DDL text for this object under `flavor`.
    fn definition(&self, flavor: Flavor) -> String;

    fn equivalent(&self, other: &Self) -> bool;
}

/// Exact equality, where two absent objects are equal to each other and
/// unequal to any present object.
pub fn equals<T: SchemaObject>(a: Option<&T>, b: Option<&T>) -> bool {
    a == b
}

/// Cosmetic-tolerant equality with the same absent-object handling as [`equals`].
pub fn equivalent<T: SchemaObject>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.equivalent(b),
        (None, None) => true,
        _ => false,
    }
}

/// True if both lists have the same length and are pairwise equivalent.
pub fn all_equivalent<T: SchemaObject>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
}

/// A named collection of tables and routines, as loaded from desired-state
/// files or produced by introspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tables: Vec<table::Table>,
    #[serde(default)]
    pub routines: Vec<routine::Routine>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&table::Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Every top-level object's key mapped to its rendered definition.
    pub fn definitions(&self, flavor: Flavor) -> BTreeMap<ObjectKey, String> {
        let tables = self
            .tables
            .iter()
            .map(|t| (t.key(), t.definition(flavor)));
        let routines = self
            .routines
            .iter()
            .map(|r| (r.key(), r.definition(flavor)));
        tables.chain(routines).collect()
    }
}
