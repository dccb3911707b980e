//! CREATE TABLE snapshot tests
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta review
//! ```

use insta::assert_snapshot;
use myschema::catalog::column::Column;
use myschema::catalog::constraint::Check;
use myschema::catalog::index::{Index, IndexAlgorithm, IndexKind, IndexPart, IndexTarget};
use myschema::catalog::table::Table;
use myschema::flavor::Flavor;

use crate::helpers::fixtures::{column, orders_table};

#[test]
fn test_snapshot_orders_mysql8() {
    let table = Table {
        show_collation: true,
        ..orders_table()
    };
    assert_snapshot!(table.definition(Flavor::mysql(8, 0, 36)), @r#"
    CREATE TABLE `orders` (
      `id` bigint unsigned NOT NULL AUTO_INCREMENT,
      `customer_id` int unsigned NOT NULL,
      `status` enum('new','paid','shipped') NOT NULL DEFAULT 'new',
      `note` varchar(200) DEFAULT NULL COMMENT 'free-form note',
      `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,
      PRIMARY KEY (`id`),
      KEY `idx_customer` (`customer_id`),
      CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`) ON DELETE CASCADE,
      CONSTRAINT `chk_status` CHECK (`status` <> 'shipped' or `customer_id` > 0)
    ) ENGINE=InnoDB AUTO_INCREMENT=1001 DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_0900_ai_ci
    "#);
}

#[test]
fn test_snapshot_mariadb_invisible_objects() {
    let mut table = orders_table();
    table.next_auto_increment = Some(1);
    table.columns[3].invisible = true;
    table.secondary_indexes[0].invisible = true;
    table.checks[0].enforced = false;

    assert_snapshot!(table.definition(Flavor::mariadb(10, 6, 16)), @r#"
    CREATE TABLE `orders` (
      `id` bigint unsigned NOT NULL AUTO_INCREMENT,
      `customer_id` int unsigned NOT NULL,
      `status` enum('new','paid','shipped') NOT NULL DEFAULT 'new',
      `note` varchar(200) INVISIBLE DEFAULT NULL COMMENT 'free-form note',
      `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,
      PRIMARY KEY (`id`),
      KEY `idx_customer` (`customer_id`) IGNORED,
      CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`) ON DELETE CASCADE,
      CONSTRAINT `chk_status` CHECK (`status` <> 'shipped' or `customer_id` > 0)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
    "#);
}

#[test]
fn test_snapshot_index_shapes() {
    let doc = Column {
        nullable: false,
        ..column("doc", "json")
    };
    let mut table = Table::new(
        "docs",
        "latin1",
        "latin1_swedish_ci",
        vec![column("title", "varchar(100)"), doc],
    );
    table.create_options = "ROW_FORMAT=DYNAMIC".to_string();
    table.comment = "documents 'v2'".to_string();
    table.secondary_indexes = vec![
        Index {
            algorithm: Some(IndexAlgorithm::Btree),
            comment: "prefix".to_string(),
            ..Index::new(
                "idx_title",
                IndexKind::Unique,
                vec![IndexPart {
                    prefix_length: Some(20),
                    descending: true,
                    ..IndexPart::column("title")
                }],
            )
        },
        Index::new(
            "idx_kind",
            IndexKind::Regular,
            vec![IndexPart {
                target: IndexTarget::Expression("cast(`doc`->>'$.kind' as char(10))".to_string()),
                prefix_length: None,
                descending: false,
            }],
        ),
    ];
    table.checks = vec![Check::new("chk_doc", "json_valid(`doc`)")];

    assert_snapshot!(table.definition(Flavor::mysql(8, 0, 36)), @r#"
    CREATE TABLE `docs` (
      `title` varchar(100),
      `doc` json NOT NULL,
      UNIQUE KEY `idx_title` (`title`(20) DESC) USING BTREE COMMENT 'prefix',
      KEY `idx_kind` ((cast(`doc`->>'$.kind' as char(10)))),
      CONSTRAINT `chk_doc` CHECK (json_valid(`doc`))
    ) ENGINE=InnoDB DEFAULT CHARSET=latin1 ROW_FORMAT=DYNAMIC COMMENT='documents ''v2'''
    "#);
}

#[test]
fn test_rendering_is_deterministic() {
    let table = orders_table();
    for flavor in [
        Flavor::mysql(5, 7, 44),
        Flavor::percona(8, 0, 36),
        Flavor::mariadb(11, 7, 2),
    ] {
        assert_eq!(table.definition(flavor), table.clone().definition(flavor));
    }
}
