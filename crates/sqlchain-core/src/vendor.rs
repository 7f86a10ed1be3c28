//! Database vendor identifiers.
//!
//! A [`Vendor`] names the SQL dialect a connection speaks. The compiler reads
//! it at every node to decide whether a vendor-specific override applies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// The SQL dialect of a database connection.
///
/// The four well-known vendors get their own variants; anything else is kept
/// verbatim in [`Vendor::Other`] so third-party backends can still be matched
/// by name.
///
/// # Examples
///
/// ```
/// use sqlchain_core::Vendor;
///
/// let vendor: Vendor = "postgres".parse().unwrap();
/// assert_eq!(vendor, Vendor::PostgreSQL);
/// assert_eq!(vendor.to_string(), "postgresql");
///
/// let custom: Vendor = "cockroachdb".parse().unwrap();
/// assert_eq!(custom, Vendor::Other("cockroachdb".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Vendor {
    /// PostgreSQL.
    PostgreSQL,
    /// MySQL / MariaDB.
    MySQL,
    /// SQLite.
    #[default]
    SQLite,
    /// Oracle.
    Oracle,
    /// Any other backend, identified by its lowercase name.
    Other(String),
}

impl Vendor {
    /// Returns the canonical lowercase identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PostgreSQL => "postgresql",
            Self::MySQL => "mysql",
            Self::SQLite => "sqlite",
            Self::Oracle => "oracle",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" => Err(QueryError::ConfigurationError(
                "Vendor name must not be empty".to_string(),
            )),
            "postgresql" | "postgres" => Ok(Self::PostgreSQL),
            "mysql" => Ok(Self::MySQL),
            "sqlite" | "sqlite3" => Ok(Self::SQLite),
            "oracle" => Ok(Self::Oracle),
            _ => Ok(Self::Other(name)),
        }
    }
}

impl TryFrom<String> for Vendor {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vendor> for String {
    fn from(vendor: Vendor) -> Self {
        vendor.as_str().to_string()
    }
}
