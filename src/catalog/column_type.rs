//! Structured column data types
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::render::escape_value_for_create_table;

/// Parenthesized arguments following a type's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgs {
    None,
    /// Integer display width, e.g. `int(11)`. Purely cosmetic on the server.
    DisplayWidth(u16),
    /// Character/byte length, bit count, or fractional seconds precision.
    Length(u32),
    Numeric {
        precision: u8,
        scale: Option<u8>,
    },
    /// Unescaped enum or set values.
    Values(Vec<String>),
}

/// A column's data type: base name, arguments, and numeric attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnType {
    pub base: String,
    pub args: TypeArgs,
    pub unsigned: bool,
    pub zerofill: bool,
}

const INTEGER_TYPES: &[&str] = &["tinyint", "smallint", "mediumint", "int", "integer", "bigint"];
const NUMERIC_TYPES: &[&str] = &["decimal", "numeric", "float", "double", "real"];

impl ColumnType {
    /// A type with no arguments or attributes, e.g. `text` or `json`.
    pub fn simple(base: &str) -> Self {
        Self {
            base: base.to_ascii_lowercase(),
            args: TypeArgs::None,
            unsigned: false,
            zerofill: false,
        }
    }

    pub fn is_integer(&self) -> bool {
        INTEGER_TYPES.contains(&self.base.as_str())
    }

    /// True if the two types are identical, or differ only in the presence or
    /// absence of an integer display width. Changing a width value is a real
    /// difference; adding or removing one is not.
    pub fn equivalent(&self, other: &ColumnType) -> bool {
        if self == other {
            return true;
        }
        if self.base != other.base
            || self.unsigned != other.unsigned
            || self.zerofill != other.zerofill
            || !self.is_integer()
        {
            return false;
        }
        matches!(
            (&self.args, &other.args),
            (TypeArgs::DisplayWidth(_), TypeArgs::None) | (TypeArgs::None, TypeArgs::DisplayWidth(_))
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        match &self.args {
            TypeArgs::None => {}
            TypeArgs::DisplayWidth(width) => write!(f, "({})", width)?,
            TypeArgs::Length(length) => write!(f, "({})", length)?,
            TypeArgs::Numeric {
                precision,
                scale: Some(scale),
            } => write!(f, "({},{})", precision, scale)?,
            TypeArgs::Numeric {
                precision,
                scale: None,
            } => write!(f, "({})", precision)?,
            TypeArgs::Values(values) => {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|v| format!("'{}'", escape_value_for_create_table(v)))
                    .collect();
                write!(f, "({})", quoted.join(","))?;
            }
        }
        if self.unsigned {
            f.write_str(" unsigned")?;
        }
        if self.zerofill {
            f.write_str(" zerofill")?;
        }
        Ok(())
    }
}

impl FromStr for ColumnType {
    type Err = anyhow::Error;

    /// Parse a type as SHOW CREATE TABLE prints it, e.g. `int(10) unsigned`,
    /// `decimal(10,2)` or `enum('a','b')`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (base, args, rest) = match s.find('(') {
            Some(open) => {
                let close = closing_paren(s, open)
                    .ok_or_else(|| anyhow!("unbalanced parentheses in type {:?}", s))?;
                (&s[..open], Some(&s[open + 1..close]), &s[close + 1..])
            }
            None => match s.split_once(char::is_whitespace) {
                Some((base, rest)) => (base, None, rest),
                None => (s, None, ""),
            },
        };

        let base = base.trim().to_ascii_lowercase();
        if base.is_empty() || !base.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!("invalid type name in {:?}", s);
        }

        let mut column_type = ColumnType::simple(&base);
        if let Some(args) = args {
            column_type.args = parse_args(&column_type, args)
                .with_context(|| format!("invalid arguments in type {:?}", s))?;
        }

        for attribute in rest.split_whitespace() {
            match attribute.to_ascii_lowercase().as_str() {
                "unsigned" => column_type.unsigned = true,
                "zerofill" => column_type.zerofill = true,
                other => bail!("unsupported attribute {:?} in type {:?}", other, s),
            }
        }
        Ok(column_type)
    }
}

impl TryFrom<String> for ColumnType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.to_string()
    }
}

fn parse_args(column_type: &ColumnType, args: &str) -> Result<TypeArgs> {
    let base = column_type.base.as_str();
    if base == "enum" || base == "set" {
        return parse_quoted_list(args).map(TypeArgs::Values);
    }

    let args = args.trim();
    if column_type.is_integer() {
        return Ok(TypeArgs::DisplayWidth(args.parse()?));
    }
    if NUMERIC_TYPES.contains(&base) {
        let (precision, scale) = match args.split_once(',') {
            Some((p, s)) => (p.trim().parse()?, Some(s.trim().parse()?)),
            None => (args.parse()?, None),
        };
        return Ok(TypeArgs::Numeric { precision, scale });
    }
    Ok(TypeArgs::Length(args.parse()?))
}

/// Byte offset of the `)` matching the `(` at `open`, skipping quoted text.
fn closing_paren(s: &str, open: usize) -> Option<usize> {
    let mut in_quote = false;
    let mut escaped = false;
    for (pos, ch) in s[open + 1..].char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_quote => escaped = true,
            '\'' => in_quote = !in_quote,
            ')' if !in_quote => return Some(open + 1 + pos),
            _ => {}
        }
    }
    None
}

fn parse_quoted_list(args: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();
    let mut chars = args.trim().chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\'' {
            bail!("expected quoted value, found {:?}", ch);
        }
        let mut value = String::new();
        loop {
            match chars.next() {
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    value.push('\'');
                }
                Some('\'') => break,
                Some('\\') => match chars.next() {
                    Some('0') => value.push('\0'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some(other) => value.push(other),
                    None => bail!("unterminated escape sequence"),
                },
                Some(other) => value.push(other),
                None => bail!("unterminated quoted value"),
            }
        }
        values.push(value);

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => {
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
            }
            Some(other) => bail!("expected ',' between values, found {:?}", other),
        }
    }
    Ok(values)
}
