//! # sqlchain
//!
//! Lookup and transform expression engine.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. You can depend on `sqlchain` to get the whole engine, or depend on
//! individual crates for finer-grained control.
//!
//! # Examples
//!
//! ```
//! use sqlchain::core::Vendor;
//! use sqlchain::db::fields::{builtin, Field, Table};
//! use sqlchain::db::{compile, resolve_path, ConnectionInfo, Expression, Value};
//!
//! let table = Table::new("experiments").with_field(Field::new("change", builtin::INTEGER_FIELD));
//! let lookup = resolve_path(&table, "change__abs__lt", Some(Expression::value(27))).unwrap();
//! let (sql, params) = compile(&lookup.into(), &ConnectionInfo::new(Vendor::PostgreSQL));
//! assert_eq!(sql, "ABS(\"experiments\".\"change\") < %s");
//! assert_eq!(params, vec![Value::Int(27)]);
//! ```

/// Error types, settings, vendors, and logging.
pub use sqlchain_core as core;

/// Registry, resolver, expression nodes, and the SQL compiler.
pub use sqlchain_db as db;

pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

use sqlchain_core::logging::setup_logging;
use sqlchain_core::{Settings, SETTINGS};
use sqlchain_db::LOOKUPS;

/// Initializes the engine from `settings`.
///
/// Installs them as the global settings, sets up logging, and applies the
/// registry policy to [`LOOKUPS`]. Custom lookups should be registered after
/// this call and before [`LOOKUPS.freeze()`](sqlchain_db::query::GlobalRegistry::freeze).
///
/// # Panics
///
/// Panics if the global settings have already been configured. Nothing else
/// is touched in that case.
pub fn init(settings: Settings) {
    SETTINGS.configure(settings);
    let settings = SETTINGS.get();
    setup_logging(settings);
    LOOKUPS.configure(settings);
    tracing::info!(
        vendor = %settings.vendor,
        alias = %settings.connection_alias,
        "sqlchain initialized"
    );
}
