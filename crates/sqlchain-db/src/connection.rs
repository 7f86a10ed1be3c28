//! The connection collaborator.
//!
//! The engine never executes SQL. All it needs from a database connection is
//! the vendor it speaks and how it quotes identifiers; [`Connection`] captures
//! exactly that, and [`ConnectionInfo`] is a plain implementation built from
//! [`Settings`].

use sqlchain_core::{Settings, Vendor};

/// What the compiler consumes from a database connection.
pub trait Connection: Send + Sync {
    /// Returns the SQL dialect of this connection.
    fn vendor(&self) -> &Vendor;

    /// Quotes a table or column name.
    ///
    /// Names that are already quoted are returned unchanged.
    fn quote_name(&self, name: &str) -> String {
        quote_with(name, '"')
    }
}

/// A connection description: an alias, a vendor, and a quote character.
///
/// # Examples
///
/// ```
/// use sqlchain_core::Vendor;
/// use sqlchain_db::connection::{Connection, ConnectionInfo};
///
/// let conn = ConnectionInfo::new(Vendor::PostgreSQL);
/// assert_eq!(conn.vendor(), &Vendor::PostgreSQL);
/// assert_eq!(conn.quote_name("author"), "\"author\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// The connection alias (e.g. "default").
    pub alias: String,
    /// The SQL dialect.
    pub vendor: Vendor,
    /// The identifier quote character.
    pub quote_char: char,
}

impl ConnectionInfo {
    /// Creates a connection named "default" that quotes with double quotes.
    pub fn new(vendor: Vendor) -> Self {
        Self {
            alias: "default".to_string(),
            vendor,
            quote_char: '"',
        }
    }

    /// Creates a connection from engine settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            alias: settings.connection_alias.clone(),
            vendor: settings.vendor.clone(),
            quote_char: settings.quote_char,
        }
    }
}

impl Connection for ConnectionInfo {
    fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    fn quote_name(&self, name: &str) -> String {
        quote_with(name, self.quote_char)
    }
}

fn quote_with(name: &str, quote: char) -> String {
    if name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote) {
        return name.to_string();
    }
    format!("{quote}{name}{quote}")
}
