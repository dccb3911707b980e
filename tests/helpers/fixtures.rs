//! Shared schema objects and schema files used across tests

use myschema::catalog::column::Column;
use myschema::catalog::constraint::{Check, ForeignKey, ReferentialAction};
use myschema::catalog::index::{Index, IndexKind, IndexPart};
use myschema::catalog::table::Table;

pub fn column(name: &str, column_type: &str) -> Column {
    Column::new(name, column_type.parse().expect("valid column type"))
}

pub fn not_null(name: &str, column_type: &str) -> Column {
    Column {
        nullable: false,
        ..column(name, column_type)
    }
}

/// An `orders` table exercising every kind of child object
pub fn orders_table() -> Table {
    let id = Column {
        auto_increment: true,
        ..not_null("id", "bigint unsigned")
    };
    let customer_id = not_null("customer_id", "int unsigned");
    let status = Column {
        default: Some("'new'".to_string()),
        ..not_null("status", "enum('new','paid','shipped')")
    };
    let note = Column {
        charset: Some("utf8mb4".to_string()),
        collation: Some("utf8mb4_0900_ai_ci".to_string()),
        default: Some("NULL".to_string()),
        comment: "free-form note".to_string(),
        ..column("note", "varchar(200)")
    };
    let created_at = Column {
        default: Some("CURRENT_TIMESTAMP".to_string()),
        ..not_null("created_at", "timestamp")
    };

    Table {
        next_auto_increment: Some(1001),
        primary_key: Some(Index::primary_key(&["id"])),
        secondary_indexes: vec![Index::new(
            "idx_customer",
            IndexKind::Regular,
            vec![IndexPart::column("customer_id")],
        )],
        foreign_keys: vec![ForeignKey {
            name: "fk_customer".to_string(),
            columns: vec!["customer_id".to_string()],
            referenced_schema: String::new(),
            referenced_table: "customers".to_string(),
            referenced_columns: vec!["id".to_string()],
            on_update: ReferentialAction::Restrict,
            on_delete: ReferentialAction::Cascade,
        }],
        checks: vec![Check::new("chk_status", "`status` <> 'shipped' or `customer_id` > 0")],
        ..Table::new(
            "orders",
            "utf8mb4",
            "utf8mb4_0900_ai_ci",
            vec![id, customer_id, status, note, created_at],
        )
    }
}

pub const DESIRED_YAML: &str = r#"
name: shop
tables:
  - name: customers
    charset: utf8mb4
    collation: utf8mb4_0900_ai_ci
    columns:
      - name: id
        type: int unsigned
        auto_increment: true
      - name: email
        type: varchar(255)
    primary_key:
      name: PRIMARY
      kind: primary
      parts:
        - target: { column: id }
routines:
  - name: purge_customers
    kind: procedure
    body: "BEGIN\n  DELETE FROM customers;\nEND"
"#;

/// Same schema as introspected from an older server: display widths and
/// utf8 aliases differ only cosmetically
pub const LIVE_COSMETIC_YAML: &str = r#"
name: shop
tables:
  - name: customers
    charset: utf8mb4
    collation: utf8mb4_0900_ai_ci
    next_auto_increment: 57
    columns:
      - name: id
        type: int(10) unsigned
        auto_increment: true
      - name: email
        type: varchar(255)
    primary_key:
      name: PRIMARY
      kind: primary
      parts:
        - target: { column: id }
routines:
  - name: purge_customers
    kind: procedure
    body: "BEGIN\n  DELETE FROM customers;\nEND"
"#;

/// Live schema where `email` has been widened
pub const LIVE_CHANGED_YAML: &str = r#"
name: shop
tables:
  - name: customers
    charset: utf8mb4
    collation: utf8mb4_0900_ai_ci
    columns:
      - name: id
        type: int unsigned
        auto_increment: true
      - name: email
        type: varchar(320)
    primary_key:
      name: PRIMARY
      kind: primary
      parts:
        - target: { column: id }
routines:
  - name: purge_customers
    kind: procedure
    body: "BEGIN\n  DELETE FROM customers;\nEND"
"#;
