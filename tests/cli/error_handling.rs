//! CLI error handling tests
//!
//! Negative paths: invalid input should fail with a message naming the problem.

use crate::helpers::cli::CliTestHelper;
use crate::helpers::fixtures::DESIRED_YAML;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_invalid_flavor_argument() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["flavor", "oracle:19"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle:19"));
}

#[test]
fn test_missing_schema_path() {
    let helper = CliTestHelper::new();
    helper
        .command()
        .args(["render", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema path does not exist"));
}

#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("shop.yaml", DESIRED_YAML)?;
    helper.write_config("invalid: yaml: content: [unbalanced")?;

    helper
        .command()
        .args(["render", "shop.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
    Ok(())
}

#[test]
fn test_unknown_lint_rule_in_config() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("shop.yaml", DESIRED_YAML)?;
    helper.write_config("lint:\n  no-such-rule: error\n")?;

    helper
        .command()
        .args(["lint", "shop.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown lint rule"));
    Ok(())
}

#[test]
fn test_duplicate_table_across_files() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("schema/a.yaml", DESIRED_YAML)?;
    helper.write_file("schema/b.yaml", DESIRED_YAML)?;

    helper
        .command()
        .args(["render", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate definition"));
    Ok(())
}

#[test]
fn test_invalid_column_type() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file(
        "bad.yaml",
        "tables:\n  - name: t\n    charset: latin1\n    collation: latin1_bin\n    columns:\n      - name: a\n        type: int frobnicated\n",
    )?;

    helper
        .command()
        .args(["render", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.yaml"));
    Ok(())
}
