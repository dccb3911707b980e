//! myschema flavor - Show what a flavor's DDL output looks like

use anyhow::Result;
use console::style;
use std::fmt::Write;

use crate::flavor::Flavor;

/// Human-readable capability listing for a flavor
pub fn describe_flavor(flavor: Flavor) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut out = String::new();

    // Writing to a String never fails
    let _ = writeln!(out, "flavor:               {}", flavor);
    let _ = writeln!(out, "vendor family:        {}", flavor.vendor.family());
    let _ = writeln!(
        out,
        "invisible columns:    {}",
        yes_no(flavor.supports_invisible_columns())
    );
    let _ = writeln!(
        out,
        "SRID display:         {}",
        yes_no(flavor.supports_srid_display())
    );
    let _ = writeln!(
        out,
        "unenforced checks:    {}",
        yes_no(flavor.supports_unenforced_checks())
    );
    let _ = writeln!(
        out,
        "column compression:   {}",
        match flavor.compressed_column_open_comment() {
            Some(open) => format!("{}...*/", open),
            None => "none".to_string(),
        }
    );
    out
}

pub fn cmd_flavor(value: &str) -> Result<()> {
    let flavor: Flavor = value.parse()?;
    println!("{}", style(format!("Flavor {}", flavor)).bold());
    print!("{}", describe_flavor(flavor));
    Ok(())
}
