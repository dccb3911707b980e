//! Stored procedures and functions
use serde::{Deserialize, Serialize};

use super::SchemaObject;
use super::id::{ObjectKey, ObjectType};
use super::utils::{charsets_equivalent, collations_equivalent};
use crate::flavor::Flavor;
use crate::render::sql::render_create_routine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Procedure,
    Function,
}

impl RoutineKind {
    pub fn object_type(self) -> ObjectType {
        match self {
            RoutineKind::Procedure => ObjectType::Procedure,
            RoutineKind::Function => ObjectType::Function,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlDataAccess {
    #[default]
    ContainsSql,
    NoSql,
    ReadsSqlData,
    ModifiesSqlData,
}

impl SqlDataAccess {
    pub fn keyword(self) -> &'static str {
        match self {
            SqlDataAccess::ContainsSql => "CONTAINS SQL",
            SqlDataAccess::NoSql => "NO SQL",
            SqlDataAccess::ReadsSqlData => "READS SQL DATA",
            SqlDataAccess::ModifiesSqlData => "MODIFIES SQL DATA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityType {
    #[default]
    Definer,
    Invoker,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub kind: RoutineKind,
    /// `user@host`, unescaped; empty means no DEFINER clause
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub definer: String,
    #[serde(default)]
    pub params: String,
    /// Functions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deterministic: bool,
    #[serde(default)]
    pub sql_data_access: SqlDataAccess,
    #[serde(default)]
    pub security_type: SecurityType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sql_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub character_set_client: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collation_connection: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub database_collation: String,
}

impl Routine {
    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(self.kind.object_type(), self.name.clone())
    }

    /// The full CREATE PROCEDURE or CREATE FUNCTION statement.
    pub fn definition(&self, flavor: Flavor) -> String {
        render_create_routine(self, flavor)
    }

    /// True if equal, or only differing in utf8/utf8mb3 naming of the
    /// creation-time character set metadata.
    pub fn equivalent(&self, other: &Routine) -> bool {
        if self == other {
            return true;
        }
        let mut normalized = self.clone();
        if charsets_equivalent(&self.character_set_client, &other.character_set_client) {
            normalized.character_set_client = other.character_set_client.clone();
        }
        if collations_equivalent(&self.collation_connection, &other.collation_connection) {
            normalized.collation_connection = other.collation_connection.clone();
        }
        if collations_equivalent(&self.database_collation, &other.database_collation) {
            normalized.database_collation = other.database_collation.clone();
        }
        normalized == *other
    }
}

impl SchemaObject for Routine {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self, flavor: Flavor) -> String {
        Routine::definition(self, flavor)
    }

    fn equivalent(&self, other: &Self) -> bool {
        Routine::equivalent(self, other)
    }
}
