/// Tests for the render, compare, lint and flavor commands
use crate::helpers::cli::CliTestHelper;
use crate::helpers::fixtures::{DESIRED_YAML, LIVE_CHANGED_YAML, LIVE_COSMETIC_YAML};
use anyhow::Result;
use predicates::prelude::*;

mod render {
    use super::*;

    #[test]
    fn test_render_schema_file() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("schema/shop.yaml", DESIRED_YAML)?;

        helper
            .command()
            .args(["render", "schema", "--flavor", "mysql:8.0.36"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "CREATE TABLE `customers` (\n  `id` int unsigned NOT NULL AUTO_INCREMENT,\n  `email` varchar(255) NOT NULL,\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
            ))
            .stdout(predicate::str::contains(
                "CREATE PROCEDURE `purge_customers`()\nBEGIN",
            ));
        Ok(())
    }

    #[test]
    fn test_render_single_table_uses_config_flavor() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_config("flavor: mariadb:10.6\n")?;
        helper.write_file(
            "docs.yaml",
            r#"
tables:
  - name: docs
    charset: latin1
    collation: latin1_swedish_ci
    columns:
      - name: body
        type: text
        nullable: true
        compression: COMPRESSED
"#,
        )?;

        helper
            .command()
            .args(["render", "docs.yaml", "--table", "docs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("`body` text /*!100301 COMPRESSED*/"));
        Ok(())
    }

    #[test]
    fn test_env_flavor_overrides_config_file() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_config("flavor: mariadb:10.6\n")?;
        helper.write_file(
            "docs.yaml",
            r#"
tables:
  - name: docs
    charset: latin1
    collation: latin1_swedish_ci
    columns:
      - name: body
        type: text
        nullable: true
        compression: COMPRESSED
"#,
        )?;

        helper
            .command()
            .env("MYSCHEMA_FLAVOR", "percona:8.0")
            .args(["render", "docs.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "`body` text /*!50633 COLUMN_FORMAT COMPRESSED */",
            ));
        Ok(())
    }

    #[test]
    fn test_render_excluded_table_not_found() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("shop.yaml", DESIRED_YAML)?;

        helper
            .command()
            .args([
                "render",
                "shop.yaml",
                "--table",
                "customers",
                "--exclude-tables",
                "cust*",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
        Ok(())
    }
}

mod compare {
    use super::*;

    #[test]
    fn test_compare_identical() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("desired.yaml", DESIRED_YAML)?;
        helper.write_file("live.yaml", DESIRED_YAML)?;

        helper
            .command()
            .args(["compare", "desired.yaml", "live.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No differences found"))
            .stdout(predicate::str::contains("2 identical"));
        Ok(())
    }

    #[test]
    fn test_compare_cosmetic_only_succeeds() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("desired.yaml", DESIRED_YAML)?;
        helper.write_file("live.yaml", LIVE_COSMETIC_YAML)?;

        helper
            .command()
            .args(["compare", "desired.yaml", "live.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cosmetic   table `customers`"))
            .stdout(predicate::str::contains("column id:"))
            .stdout(predicate::str::contains("No differences found"));
        Ok(())
    }

    #[test]
    fn test_compare_changed_exits_one() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("desired.yaml", DESIRED_YAML)?;
        helper.write_file("live.yaml", LIVE_CHANGED_YAML)?;

        helper
            .command()
            .args(["compare", "desired.yaml", "live.yaml"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("changed    table `customers`"))
            .stdout(predicate::str::contains("-   `email` varchar(320) NOT NULL,"))
            .stdout(predicate::str::contains("+   `email` varchar(255) NOT NULL,"));
        Ok(())
    }

    #[test]
    fn test_compare_summary_format() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("desired.yaml", DESIRED_YAML)?;
        helper.write_file("live.yaml", LIVE_CHANGED_YAML)?;

        helper
            .command()
            .args(["compare", "desired.yaml", "live.yaml", "--format", "summary"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("varchar").not())
            .stdout(predicate::str::contains("1 identical, 0 cosmetic, 1 changed"));
        Ok(())
    }
}

mod lint {
    use super::*;

    #[test]
    fn test_lint_defaults_report_nothing() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("shop.yaml", DESIRED_YAML)?;

        helper
            .command()
            .args(["lint", "shop.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No lint problems found"));
        Ok(())
    }

    #[test]
    fn test_lint_severity_from_config() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file("shop.yaml", DESIRED_YAML)?;

        helper.write_config("lint:\n  has-routine: warning\n")?;
        helper
            .command()
            .args(["lint", "shop.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "[has-routine] procedure `purge_customers`: procedure `purge_customers` found.",
            ));

        helper.write_config("lint:\n  has-routine: error\n")?;
        helper
            .command()
            .args(["lint", "shop.yaml"])
            .assert()
            .code(1);
        Ok(())
    }
}

mod lint_rules {
    use super::*;

    #[test]
    fn test_list_rules_without_path() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_config("lint:\n  pk: error\n")?;

        helper
            .command()
            .args(["lint", "--list-rules"])
            .assert()
            .success()
            .stdout(predicate::str::contains("has-routine  ignore"))
            .stdout(predicate::str::contains(
                "pk           error    Flag tables that lack a primary key",
            ));
        Ok(())
    }

    #[test]
    fn test_lint_requires_path_or_list_rules() {
        let helper = CliTestHelper::new();
        helper.command().arg("lint").assert().failure();
    }

    #[test]
    fn test_table_without_primary_key_warns() -> Result<()> {
        let helper = CliTestHelper::new();
        helper.write_file(
            "log.yaml",
            "tables:\n  - name: log\n    charset: latin1\n    collation: latin1_swedish_ci\n    columns:\n      - name: line\n        type: text\n",
        )?;

        helper
            .command()
            .args(["lint", "log.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "[pk] table `log`: table `log` does not define a PRIMARY KEY.",
            ));
        Ok(())
    }
}

mod flavor {
    use super::*;

    #[test]
    fn test_flavor_capabilities() {
        let helper = CliTestHelper::new();
        helper
            .command()
            .args(["flavor", "percona/percona-server:8.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("flavor:               percona:8.0.0"))
            .stdout(predicate::str::contains("vendor family:        mysql"));
    }

    #[test]
    fn test_flavor_from_registry_image() {
        let helper = CliTestHelper::new();
        helper
            .command()
            .args(["flavor", "registry.local:5000/mysql/mysql-server:8.0.36"])
            .assert()
            .success()
            .stdout(predicate::str::contains("flavor:               mysql:8.0.36"));
    }
}
