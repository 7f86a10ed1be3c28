//! Vendor-dispatching SQL compiler.
//!
//! This module defines [`SqlCompiler`], which turns a resolved expression tree
//! into a parameterized SQL string. Every node, at every depth, is compiled
//! through [`SqlCompiler::compile`]: that is the one place where the
//! connection's vendor is consulted and a node's vendor-specific rendering is
//! preferred over its generic one.
//!
//! Compiled SQL uses `%s` for every parameter and `%%` for a literal percent
//! sign. [`render_placeholders`] rewrites that into the native style of a
//! vendor's driver (`$1, $2, ...` for PostgreSQL, `?` for SQLite and MySQL).

use sqlchain_core::logging::compile_span;
use sqlchain_core::Vendor;

use crate::connection::Connection;
use crate::query::expressions::{CompiledSql, Expression};

/// The positional parameter placeholder in compiled SQL.
pub const PLACEHOLDER: &str = "%s";

/// Compiles expression trees for one connection.
///
/// The compiler is stateless apart from the borrowed connection, so one
/// instance can be shared by any number of compile calls.
pub struct SqlCompiler<'c> {
    connection: &'c dyn Connection,
}

impl<'c> SqlCompiler<'c> {
    /// Creates a compiler for `connection`.
    pub fn new(connection: &'c dyn Connection) -> Self {
        Self { connection }
    }

    /// The vendor of the underlying connection.
    pub fn vendor(&self) -> &Vendor {
        self.connection.vendor()
    }

    /// Quotes a table or column name the way the connection does.
    pub fn quote_name(&self, name: &str) -> String {
        self.connection.quote_name(name)
    }

    /// Compiles `expr`, preferring its rendering for the connection's vendor
    /// and falling back to the generic one.
    pub fn compile(&self, expr: &Expression) -> CompiledSql {
        let vendor = self.vendor();
        let compiled = if let Some(compiled) = expr.compile_for_vendor(vendor, self) {
            tracing::trace!(node = expr.node_name(), vendor = %vendor, "Vendor-specific compile");
            compiled
        } else {
            expr.compile_generic(self)
        };
        if expr.is_lookup() {
            debug_assert_eq!(
                count_placeholders(&compiled.0),
                compiled.1.len(),
                "placeholder count does not match parameter count in `{}`",
                compiled.0
            );
        }
        compiled
    }
}

/// Compiles `expr` for `connection` inside a `compile` tracing span.
///
/// # Examples
///
/// ```
/// use sqlchain_core::Vendor;
/// use sqlchain_db::connection::ConnectionInfo;
/// use sqlchain_db::fields::{Field, FieldTypeId};
/// use sqlchain_db::query::compiler::compile;
/// use sqlchain_db::query::expressions::Expression;
///
/// let conn = ConnectionInfo::new(Vendor::SQLite);
/// let expr = Expression::col("author", &Field::new("name", FieldTypeId::ROOT));
/// assert_eq!(compile(&expr, &conn).0, "\"author\".\"name\"");
/// ```
pub fn compile(expr: &Expression, connection: &dyn Connection) -> CompiledSql {
    let span = compile_span(connection.vendor());
    let _guard = span.enter();
    let compiled = SqlCompiler::new(connection).compile(expr);
    tracing::debug!(sql = %compiled.0, params = compiled.1.len(), "Compiled expression");
    compiled
}

/// Counts `%s` placeholders in compiled SQL, skipping `%%` escapes.
pub fn count_placeholders(sql: &str) -> usize {
    let mut count = 0;
    let mut chars = sql.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some('s') = chars.next() {
                count += 1;
            }
        }
    }
    count
}

/// Rewrites `%s` placeholders into the vendor's native parameter style and
/// unescapes `%%`.
///
/// PostgreSQL gets numbered `$1, $2, ...`; SQLite and MySQL get `?`; Oracle
/// gets `:1, :2, ...`. Other vendors keep `%s`.
pub fn render_placeholders(sql: &str, vendor: &Vendor) -> String {
    let mut rendered = String::with_capacity(sql.len());
    let mut index = 0;
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            rendered.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                rendered.push('%');
            }
            Some('s') => {
                chars.next();
                index += 1;
                match vendor {
                    Vendor::PostgreSQL => rendered.push_str(&format!("${index}")),
                    Vendor::SQLite | Vendor::MySQL => rendered.push('?'),
                    Vendor::Oracle => rendered.push_str(&format!(":{index}")),
                    Vendor::Other(_) => rendered.push_str(PLACEHOLDER),
                }
            }
            _ => rendered.push('%'),
        }
    }
    rendered
}
