//! Index definition clauses, as printed inside CREATE TABLE.

use crate::catalog::index::{Index, IndexKind, IndexPart, IndexTarget};
use crate::flavor::Flavor;
use crate::render::{comment_clause, escape_identifier};

/// Render an index definition line for the given flavor.
///
/// Covers every index shape SHOW CREATE TABLE prints:
/// - PRIMARY KEY without a name
/// - column prefixes, DESC parts and functional parts
/// - explicit USING algorithms
/// - comments and invisibility (versioned comment on MySQL, IGNORED on MariaDB)
/// - fulltext parsers
pub fn render_index_definition(index: &Index, flavor: Flavor) -> String {
    let mut sql = String::from(index.kind.keyword());

    if index.kind != IndexKind::Primary {
        sql.push(' ');
        sql.push_str(&escape_identifier(&index.name));
    }

    let parts: Vec<String> = index.parts.iter().map(render_index_part).collect();
    sql.push_str(&format!(" ({})", parts.join(",")));

    if let Some(algorithm) = index.algorithm {
        sql.push_str(&format!(" USING {}", algorithm));
    }

    if let Some(comment) = comment_clause(&index.comment) {
        sql.push(' ');
        sql.push_str(&comment);
    }

    if index.invisible {
        if flavor.is_mariadb() {
            sql.push_str(" IGNORED");
        } else {
            sql.push_str(" /*!80000 INVISIBLE */");
        }
    }

    if let Some(ref parser) = index.fulltext_parser
        && index.kind == IndexKind::Fulltext
    {
        // The server prints a trailing space after this comment
        sql.push_str(&format!(
            " /*!50100 WITH PARSER {} */ ",
            escape_identifier(parser)
        ));
    }

    sql
}

fn render_index_part(part: &IndexPart) -> String {
    let mut spec = match &part.target {
        IndexTarget::Column(name) => escape_identifier(name),
        IndexTarget::Expression(expr) => format!("({})", expr),
    };

    if let Some(length) = part.prefix_length {
        spec.push_str(&format!("({})", length));
    }

    if part.descending {
        spec.push_str(" DESC");
    }

    spec
}
