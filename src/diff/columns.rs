use serde::Serialize;

use super::{Classification, classify};
use crate::catalog::column::Column;
use crate::flavor::Flavor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnComparison {
    pub name: String,
    pub classification: Classification,
    pub desired: Option<String>,
    pub live: Option<String>,
}

/// Pair columns by name. Desired columns come first in their own order,
/// followed by columns only present on the live side.
pub fn compare_columns(desired: &[Column], live: &[Column], flavor: Flavor) -> Vec<ColumnComparison> {
    let find = |columns: &'_ [Column], name: &str| columns.iter().find(|c| c.name == name).cloned();

    let names = desired
        .iter()
        .map(|c| c.name.as_str())
        .chain(
            live.iter()
                .map(|c| c.name.as_str())
                .filter(|name| !desired.iter().any(|c| c.name == *name)),
        );

    names
        .map(|name| {
            let d = find(desired, name);
            let l = find(live, name);
            ColumnComparison {
                name: name.to_string(),
                classification: classify(d.as_ref(), l.as_ref()),
                desired: d.map(|c| c.definition(flavor)),
                live: l.map(|c| c.definition(flavor)),
            }
        })
        .collect()
}
