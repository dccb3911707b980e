use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` the same as absent.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// The one charset known under two names: older servers report `utf8`, newer
/// ones `utf8mb3`.
const UTF8MB3_ALIASES: (&str, &str) = ("utf8", "utf8mb3");

fn is_utf8mb3_alias_pair(a: &str, b: &str) -> bool {
    let (short, long) = UTF8MB3_ALIASES;
    (a == short && b == long) || (a == long && b == short)
}

/// True if two character set names refer to the same character set.
pub fn charsets_equivalent(a: &str, b: &str) -> bool {
    a == b || is_utf8mb3_alias_pair(a, b)
}

/// True if two collation names refer to the same collation, accounting for
/// flavor differences in how utf8mb3 collations are named.
pub fn collations_equivalent(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let (a_charset, a_rest) = a.split_once('_').unwrap_or((a, ""));
    let (b_charset, b_rest) = b.split_once('_').unwrap_or((b, ""));
    a_rest == b_rest && is_utf8mb3_alias_pair(a_charset, b_charset)
}

/// Optional-value forms of the rules above: absent only matches absent.
pub fn optional_charsets_equivalent(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => charsets_equivalent(a, b),
        (None, None) => true,
        _ => false,
    }
}

pub fn optional_collations_equivalent(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => collations_equivalent(a, b),
        (None, None) => true,
        _ => false,
    }
}
