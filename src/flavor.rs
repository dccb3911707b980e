//! Database server flavors: a vendor plus a version.
//!
//! Every rendering and comparison operation takes a [`Flavor`] explicitly, so the
//! same object values can be rendered for a different server than the one they
//! were introspected from.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    MySql,
    Percona,
    MariaDb,
}

impl Vendor {
    /// The vendor whose version history this vendor follows. Percona Server
    /// releases track MySQL releases.
    pub fn family(self) -> Vendor {
        match self {
            Vendor::Percona => Vendor::MySql,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::MySql => "mysql",
            Vendor::Percona => "percona",
            Vendor::MariaDb => "mariadb",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mysql-server" => Ok(Vendor::MySql),
            "percona" | "percona-server" => Ok(Vendor::Percona),
            "mariadb" => Ok(Vendor::MariaDb),
            other => Err(anyhow!("unknown database vendor {:?}", other)),
        }
    }
}

/// A (major, minor, patch) version triple. Ordering is lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u16, pub u16, pub u16);

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Version(major, minor, patch)
    }

}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    /// Accepts "8", "8.0" or "8.0.23"; omitted parts are 0. Any suffix after the
    /// numeric parts (e.g. "-log", "-MariaDB") is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let numeric = s
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .next()
            .unwrap_or_default();
        let mut parts = [0u16; 3];
        let mut seen = 0;
        for (n, part) in numeric.split('.').filter(|p| !p.is_empty()).enumerate() {
            if n >= parts.len() {
                bail!("too many version components in {:?}", s);
            }
            parts[n] = part
                .parse()
                .with_context(|| format!("invalid version component {:?} in {:?}", part, s))?;
            seen += 1;
        }
        if seen == 0 {
            bail!("missing version number in {:?}", s);
        }
        Ok(Version(parts[0], parts[1], parts[2]))
    }
}

/// A specific database server family and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flavor {
    pub vendor: Vendor,
    pub version: Version,
}

impl Flavor {
    pub const fn new(vendor: Vendor, version: Version) -> Self {
        Self { vendor, version }
    }

    pub const fn mysql(major: u16, minor: u16, patch: u16) -> Self {
        Self::new(Vendor::MySql, Version::new(major, minor, patch))
    }

    pub const fn percona(major: u16, minor: u16, patch: u16) -> Self {
        Self::new(Vendor::Percona, Version::new(major, minor, patch))
    }

    pub const fn mariadb(major: u16, minor: u16, patch: u16) -> Self {
        Self::new(Vendor::MariaDb, Version::new(major, minor, patch))
    }

    /// True if this flavor is `vendor`, or a variant of it. Percona Server
    /// counts as MySQL, but not the other way around.
    pub fn is_vendor(self, vendor: Vendor) -> bool {
        self.vendor == vendor || self.vendor.family() == vendor
    }

    /// True if this flavor belongs to `vendor` and is at least the supplied
    /// version. Always false across vendor families.
    pub fn at_least(self, vendor: Vendor, major: u16, minor: u16, patch: u16) -> bool {
        self.is_vendor(vendor) && self.version >= Version::new(major, minor, patch)
    }

    pub fn is_mysql(self) -> bool {
        self.is_vendor(Vendor::MySql)
    }

    pub fn is_percona(self) -> bool {
        self.is_vendor(Vendor::Percona)
    }

    pub fn is_mariadb(self) -> bool {
        self.is_vendor(Vendor::MariaDb)
    }

    pub fn min_mysql(self, major: u16, minor: u16) -> bool {
        self.at_least(Vendor::MySql, major, minor, 0)
    }

    pub fn min_mariadb(self, major: u16, minor: u16) -> bool {
        self.at_least(Vendor::MariaDb, major, minor, 0)
    }

    /// Opening half of the version-gated comment wrapping column compression
    /// clauses, or None if this flavor has no column-level compression.
    pub(crate) fn compressed_column_open_comment(self) -> Option<&'static str> {
        if self.is_mariadb() {
            Some("/*!100301 ")
        } else if self.is_percona() {
            Some("/*!50633 ")
        } else {
            None
        }
    }

    /// Whether SHOW CREATE TABLE exposes a column's SRID attribute.
    pub fn supports_srid_display(self) -> bool {
        // MariaDB has REF_SYSTEM_ID but never shows it in SHOW CREATE TABLE
        self.min_mysql(8, 0)
    }

    /// Whether invisible columns exist at all on this flavor.
    pub fn supports_invisible_columns(self) -> bool {
        self.at_least(Vendor::MySql, 8, 0, 23) || self.min_mariadb(10, 3)
    }

    /// Whether CHECK constraints may be declared NOT ENFORCED.
    pub fn supports_unenforced_checks(self) -> bool {
        self.at_least(Vendor::MySql, 8, 0, 16)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vendor, self.version)
    }
}

impl FromStr for Flavor {
    type Err = anyhow::Error;

    /// Parses "vendor:version", e.g. "mysql:8.0.23" or "mariadb:11.7". Image
    /// names such as "percona/percona-server:8.0" are also accepted; the tag
    /// follows the last `:` so registry hosts may carry a port.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, version) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("flavor {:?} must have the form vendor:version", s))?;
        let name = name.rsplit('/').next().unwrap_or(name);
        let vendor: Vendor = name
            .parse()
            .with_context(|| format!("invalid flavor {:?}", s))?;
        let version: Version = version
            .parse()
            .with_context(|| format!("invalid flavor {:?}", s))?;
        Ok(Flavor { vendor, version })
    }
}

impl TryFrom<String> for Flavor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Flavor> for String {
    fn from(flavor: Flavor) -> Self {
        flavor.to_string()
    }
}
