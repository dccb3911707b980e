//! Classify differences between a desired schema and a live one
pub mod columns;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, info};

use crate::catalog::id::ObjectKey;
use crate::catalog::{Schema, SchemaObject, equals, equivalent};
use crate::flavor::Flavor;
use columns::ColumnComparison;

/// How one side of a pair relates to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Exactly equal
    Identical,
    /// Equivalent but not equal, e.g. `int(11)` vs `int`
    Cosmetic,
    Changed,
    /// Only present in the desired schema
    Added,
    /// Only present in the live schema
    Removed,
}

impl Classification {
    /// Whether applying the desired state would change anything on the server.
    pub fn is_functional(self) -> bool {
        !matches!(self, Classification::Identical | Classification::Cosmetic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Identical => "identical",
            Classification::Cosmetic => "cosmetic",
            Classification::Changed => "changed",
            Classification::Added => "added",
            Classification::Removed => "removed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a desired/live pair of the same object kind.
pub fn classify<T: SchemaObject>(desired: Option<&T>, live: Option<&T>) -> Classification {
    match (desired, live) {
        (Some(_), None) => Classification::Added,
        (None, Some(_)) => Classification::Removed,
        _ if equals(desired, live) => Classification::Identical,
        _ if equivalent(desired, live) => Classification::Cosmetic,
        _ => Classification::Changed,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectComparison {
    pub key: String,
    pub classification: Classification,
    pub desired: Option<String>,
    pub live: Option<String>,
    /// Per-column breakdown; tables present on both sides only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnComparison>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaComparison {
    pub flavor: Flavor,
    pub objects: Vec<ObjectComparison>,
}

impl SchemaComparison {
    pub fn has_changes(&self) -> bool {
        self.objects
            .iter()
            .any(|o| o.classification.is_functional())
    }

    /// Number of objects per classification, in classification order.
    pub fn counts(&self) -> BTreeMap<Classification, usize> {
        let mut counts = BTreeMap::new();
        for object in &self.objects {
            *counts.entry(object.classification).or_insert(0) += 1;
        }
        counts
    }
}

/// Pair tables and routines by key and classify every pair. Objects are
/// reported in key order; definitions are rendered under `flavor`.
pub fn compare_schemas(desired: &Schema, live: &Schema, flavor: Flavor) -> SchemaComparison {
    info!("Comparing schemas under {}", flavor);

    let desired_tables: BTreeMap<ObjectKey, _> =
        desired.tables.iter().map(|t| (t.key(), t)).collect();
    let live_tables: BTreeMap<ObjectKey, _> = live.tables.iter().map(|t| (t.key(), t)).collect();
    let desired_routines: BTreeMap<ObjectKey, _> =
        desired.routines.iter().map(|r| (r.key(), r)).collect();
    let live_routines: BTreeMap<ObjectKey, _> =
        live.routines.iter().map(|r| (r.key(), r)).collect();

    let mut objects = compare_list(&desired_tables, &live_tables, flavor, |d, l| {
        columns::compare_columns(&d.columns, &l.columns, flavor)
    });
    objects.extend(compare_list(
        &desired_routines,
        &live_routines,
        flavor,
        |_, _| Vec::new(),
    ));

    debug!("Classified {} objects", objects.len());
    SchemaComparison { flavor, objects }
}

fn compare_list<T, F>(
    desired: &BTreeMap<ObjectKey, &T>,
    live: &BTreeMap<ObjectKey, &T>,
    flavor: Flavor,
    children: F,
) -> Vec<ObjectComparison>
where
    T: SchemaObject,
    F: Fn(&T, &T) -> Vec<ColumnComparison>,
{
    let keys: BTreeSet<&ObjectKey> = desired.keys().chain(live.keys()).collect();

    keys.into_iter()
        .map(|key| {
            let d = desired.get(key).copied();
            let l = live.get(key).copied();
            let classification = classify(d, l);
            if let Some(object) = d.or(l) {
                debug!("{} {} is {}", key.object_type, object.name(), classification);
            }
            let columns = match (d, l) {
                (Some(d), Some(l)) if classification != Classification::Identical => children(d, l),
                _ => Vec::new(),
            };
            ObjectComparison {
                key: key.to_string(),
                classification,
                desired: d.map(|o| o.definition(flavor)),
                live: l.map(|o| o.definition(flavor)),
                columns,
            }
        })
        .collect()
}
