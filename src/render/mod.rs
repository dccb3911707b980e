pub mod sql;

/// Wrap an identifier in backticks, doubling any embedded backticks.
pub fn escape_identifier(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Escape text for embedding inside a single-quoted literal, the way SHOW
/// CREATE TABLE renders comments and enum values. The result is not wrapped
/// in quotes.
pub fn escape_value_for_create_table(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\0' => escaped.push_str("\\0"),
            '\'' => escaped.push_str("''"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a `COMMENT '...'` clause, or None for an empty comment.
pub fn comment_clause(comment: &str) -> Option<String> {
    if comment.is_empty() {
        None
    } else {
        Some(format!("COMMENT '{}'", escape_value_for_create_table(comment)))
    }
}
