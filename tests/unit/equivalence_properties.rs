//! Algebraic properties of equals/equivalent over sample objects of every kind

use myschema::catalog::column::Column;
use myschema::catalog::constraint::{Check, ForeignKey, ReferentialAction};
use myschema::catalog::index::{Index, IndexAlgorithm, IndexKind, IndexPart};
use myschema::catalog::routine::{Routine, RoutineKind, SecurityType, SqlDataAccess};
use myschema::catalog::table::Table;
use myschema::catalog::{SchemaObject, equals, equivalent};
use rstest::rstest;

use crate::helpers::fixtures::{column, not_null, orders_table};

/// Reflexive, symmetric, and implied by exact equality, over every pair
fn assert_properties<T: SchemaObject + std::fmt::Debug>(samples: &[T]) {
    for a in samples {
        assert!(equals(Some(a), Some(a)), "equals not reflexive: {:?}", a);
        assert!(equivalent(Some(a), Some(a)), "equivalent not reflexive: {:?}", a);
        assert!(!equals(Some(a), None));
        assert!(!equivalent(None, Some(a)));

        for b in samples {
            assert_eq!(
                a.equivalent(b),
                b.equivalent(a),
                "equivalent not symmetric: {:?} vs {:?}",
                a,
                b
            );
            if equals(Some(a), Some(b)) {
                assert!(equivalent(Some(a), Some(b)));
            }
        }
    }
}

fn sample_columns() -> Vec<Column> {
    vec![
        not_null("id", "int"),
        not_null("id", "int(11)"),
        not_null("id", "int(10)"),
        not_null("id", "int unsigned"),
        column("id", "int"),
        Column {
            charset: Some("utf8".to_string()),
            collation: Some("utf8_general_ci".to_string()),
            ..column("name", "varchar(50)")
        },
        Column {
            charset: Some("utf8mb3".to_string()),
            collation: Some("utf8mb3_general_ci".to_string()),
            show_charset: true,
            ..column("name", "varchar(50)")
        },
        Column {
            charset: Some("utf8mb4".to_string()),
            collation: Some("utf8mb4_general_ci".to_string()),
            ..column("name", "varchar(50)")
        },
        Column {
            comment: "x".to_string(),
            ..not_null("id", "int")
        },
        Column {
            invisible: true,
            ..not_null("id", "int")
        },
    ]
}

fn sample_indexes() -> Vec<Index> {
    let base = Index::new("idx_a", IndexKind::Regular, vec![IndexPart::column("a")]);
    vec![
        base.clone(),
        Index {
            algorithm: Some(IndexAlgorithm::Btree),
            ..base.clone()
        },
        Index {
            algorithm: Some(IndexAlgorithm::Hash),
            ..base.clone()
        },
        Index {
            invisible: true,
            ..base.clone()
        },
        Index::new("idx_a", IndexKind::Fulltext, vec![IndexPart::column("a")]),
        Index::new("idx_b", IndexKind::Regular, vec![IndexPart::column("a")]),
    ]
}

fn sample_foreign_keys() -> Vec<ForeignKey> {
    let base = orders_table().foreign_keys[0].clone();
    vec![
        base.clone(),
        ForeignKey {
            on_update: ReferentialAction::NoAction,
            ..base.clone()
        },
        ForeignKey {
            on_delete: ReferentialAction::SetNull,
            ..base.clone()
        },
        ForeignKey {
            referenced_table: "clients".to_string(),
            ..base
        },
    ]
}

fn sample_routines() -> Vec<Routine> {
    let base = Routine {
        name: "total".to_string(),
        kind: RoutineKind::Function,
        definer: "root@localhost".to_string(),
        params: "a INT".to_string(),
        return_type: Some("int".to_string()),
        body: "RETURN a".to_string(),
        deterministic: true,
        sql_data_access: SqlDataAccess::NoSql,
        security_type: SecurityType::Definer,
        comment: String::new(),
        sql_mode: String::new(),
        character_set_client: "utf8".to_string(),
        collation_connection: "utf8_general_ci".to_string(),
        database_collation: "utf8_general_ci".to_string(),
    };
    vec![
        base.clone(),
        Routine {
            character_set_client: "utf8mb3".to_string(),
            collation_connection: "utf8mb3_general_ci".to_string(),
            ..base.clone()
        },
        Routine {
            security_type: SecurityType::Invoker,
            ..base.clone()
        },
        Routine {
            kind: RoutineKind::Procedure,
            return_type: None,
            ..base
        },
    ]
}

fn sample_tables() -> Vec<Table> {
    let base = orders_table();
    let mut widened = base.clone();
    widened.columns[1] = not_null("customer_id", "int(10) unsigned");
    let mut renamed_index = base.clone();
    renamed_index.secondary_indexes[0].name = "idx_cust".to_string();
    vec![
        base.clone(),
        Table {
            show_collation: true,
            next_auto_increment: Some(5),
            ..base.clone()
        },
        widened,
        renamed_index,
        Table {
            engine: "MyISAM".to_string(),
            ..base
        },
    ]
}

#[test]
fn test_column_properties() {
    assert_properties(&sample_columns());
}

#[test]
fn test_index_properties() {
    assert_properties(&sample_indexes());
}

#[test]
fn test_foreign_key_properties() {
    assert_properties(&sample_foreign_keys());
}

#[test]
fn test_check_properties() {
    let check = Check::new("chk", "`a` > 0");
    let unenforced = Check {
        enforced: false,
        ..check.clone()
    };
    assert_properties(&[check, unenforced]);
}

#[test]
fn test_routine_properties() {
    assert_properties(&sample_routines());
}

#[test]
fn test_table_properties() {
    assert_properties(&sample_tables());
}

#[rstest]
#[case::display_width_added(not_null("id", "int"), not_null("id", "int(11)"), true)]
#[case::display_width_changed(not_null("id", "int(10)"), not_null("id", "int(11)"), false)]
#[case::signedness(not_null("id", "int"), not_null("id", "int unsigned"), false)]
#[case::nullability(not_null("id", "int"), column("id", "int"), false)]
#[case::comment(not_null("id", "int"), Column { comment: "x".to_string(), ..not_null("id", "int") }, false)]
#[case::varchar_length(column("s", "varchar(10)"), column("s", "varchar(20)"), false)]
fn test_column_equivalence_cases(#[case] a: Column, #[case] b: Column, #[case] expected: bool) {
    assert_eq!(a.equivalent(&b), expected);
    assert!(!equals(Some(&a), Some(&b)));
}

#[test]
fn test_cosmetic_table_pair() {
    let tables = sample_tables();
    assert!(tables[0].equivalent(&tables[1]));
    assert!(tables[0].equivalent(&tables[2]));
    assert!(!tables[0].equivalent(&tables[3]));
    assert!(!tables[0].equivalent(&tables[4]));
}
