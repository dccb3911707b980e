//! Column definition clauses
//!
//! The clause order below matches what each flavor prints in SHOW CREATE
//! TABLE. Rendering must reproduce that output byte for byte, since equivalence
//! checks against live servers compare against it.

use itertools::Itertools;

use crate::catalog::column::Column;
use crate::flavor::Flavor;
use crate::render::{comment_clause, escape_identifier};

type ClauseBuilder = fn(&Column, Flavor) -> Option<String>;

/// Every possible column clause, in output order.
const COLUMN_CLAUSES: [ClauseBuilder; 15] = [
    name_clause,
    type_clause,
    charset_clause,
    collation_clause,
    generated_clause,
    nullability_clause,
    srid_clause,
    early_invisible_clause,
    column_format_clause,
    default_clause,
    on_update_clause,
    auto_increment_clause,
    late_invisible_clause,
    column_comment_clause,
    check_clause,
];

/// Where a flavor prints column compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompressionPlacement {
    /// MariaDB: a versioned comment immediately after the type
    AfterType,
    /// Percona Server: a versioned COLUMN_FORMAT comment before DEFAULT
    ColumnFormat,
}

fn compression_placement(flavor: Flavor) -> Option<CompressionPlacement> {
    if flavor.is_mariadb() {
        Some(CompressionPlacement::AfterType)
    } else if flavor.is_percona() {
        Some(CompressionPlacement::ColumnFormat)
    } else {
        None
    }
}

/// Where a flavor prints the INVISIBLE attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvisiblePlacement {
    /// MariaDB 10.3 through 11.6: bare keyword right after nullability/SRID
    BeforeDefault,
    /// MySQL, and MariaDB 11.7+ (MDEV-35308): after AUTO_INCREMENT
    AfterAutoIncrement(&'static str),
}

fn invisible_placement(flavor: Flavor) -> InvisiblePlacement {
    if flavor.is_mariadb() && !flavor.min_mariadb(11, 7) {
        InvisiblePlacement::BeforeDefault
    } else if flavor.is_mariadb() {
        InvisiblePlacement::AfterAutoIncrement("INVISIBLE")
    } else {
        InvisiblePlacement::AfterAutoIncrement("/*!80023 INVISIBLE */")
    }
}

/// Render the column's definition clause under the given flavor.
pub fn render_column_definition(column: &Column, flavor: Flavor) -> String {
    COLUMN_CLAUSES
        .iter()
        .filter_map(|clause| clause(column, flavor))
        .join(" ")
}

fn name_clause(column: &Column, _: Flavor) -> Option<String> {
    Some(escape_identifier(&column.name))
}

fn type_clause(column: &Column, flavor: Flavor) -> Option<String> {
    let type_text = column.column_type.to_string();
    match (&column.compression, compression_placement(flavor)) {
        (Some(codec), Some(CompressionPlacement::AfterType)) => {
            let open = flavor.compressed_column_open_comment().unwrap_or_default();
            Some(format!("{} {}{}*/", type_text, open, codec))
        }
        _ => Some(type_text),
    }
}

fn charset_clause(column: &Column, _: Flavor) -> Option<String> {
    column
        .charset
        .as_ref()
        .filter(|_| column.show_charset)
        .map(|charset| format!("CHARACTER SET {}", charset))
}

fn collation_clause(column: &Column, _: Flavor) -> Option<String> {
    column
        .collation
        .as_ref()
        .filter(|_| column.show_collation)
        .map(|collation| format!("COLLATE {}", collation))
}

fn generated_clause(column: &Column, _: Flavor) -> Option<String> {
    column.generated.as_ref().map(|generation| {
        format!(
            "GENERATED ALWAYS AS ({}) {}",
            generation.expression,
            generation.kind.keyword()
        )
    })
}

fn nullability_clause(column: &Column, _: Flavor) -> Option<String> {
    if !column.nullable {
        Some("NOT NULL".to_string())
    } else if column.column_type.base == "timestamp" {
        // timestamp always displays its nullability, other types never do
        Some("NULL".to_string())
    } else {
        None
    }
}

fn srid_clause(column: &Column, flavor: Flavor) -> Option<String> {
    column
        .srid
        .filter(|_| flavor.supports_srid_display())
        .map(|srid| format!("/*!80003 SRID {} */", srid))
}

fn early_invisible_clause(column: &Column, flavor: Flavor) -> Option<String> {
    match invisible_placement(flavor) {
        InvisiblePlacement::BeforeDefault if column.invisible => Some("INVISIBLE".to_string()),
        _ => None,
    }
}

fn column_format_clause(column: &Column, flavor: Flavor) -> Option<String> {
    match (&column.compression, compression_placement(flavor)) {
        (Some(codec), Some(CompressionPlacement::ColumnFormat)) => {
            let open = flavor.compressed_column_open_comment().unwrap_or_default();
            Some(format!("{}COLUMN_FORMAT {} */", open, codec))
        }
        _ => None,
    }
}

fn default_clause(column: &Column, _: Flavor) -> Option<String> {
    column
        .default
        .as_ref()
        .map(|default| format!("DEFAULT {}", default))
}

fn on_update_clause(column: &Column, _: Flavor) -> Option<String> {
    column
        .on_update
        .as_ref()
        .map(|on_update| format!("ON UPDATE {}", on_update))
}

fn auto_increment_clause(column: &Column, _: Flavor) -> Option<String> {
    column.auto_increment.then(|| "AUTO_INCREMENT".to_string())
}

fn late_invisible_clause(column: &Column, flavor: Flavor) -> Option<String> {
    match invisible_placement(flavor) {
        InvisiblePlacement::AfterAutoIncrement(token) if column.invisible => Some(token.to_string()),
        _ => None,
    }
}

fn column_comment_clause(column: &Column, _: Flavor) -> Option<String> {
    comment_clause(&column.comment)
}

fn check_clause(column: &Column, _: Flavor) -> Option<String> {
    column
        .check_clause
        .as_ref()
        .map(|clause| format!("CHECK ({})", clause))
}
