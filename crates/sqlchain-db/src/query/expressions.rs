//! Expression nodes.
//!
//! An [`Expression`] is one node of a resolved lookup tree. The tree for
//! `change__abs__lt=27` looks like:
//!
//! ```text
//! Lookup(lt)
//! ├── lhs: Transform(abs)
//! │        └── lhs: Col("experiments"."change")
//! └── rhs: Value(27)
//! ```
//!
//! Trees are immutable once built and cheap to clone: lookup and transform
//! behavior is shared through `Arc`ed class objects. Nodes are compiled only
//! through [`SqlCompiler::compile`], which is where vendor dispatch happens.

use sqlchain_core::Vendor;

use crate::fields::{Field, FieldTypeId};
use crate::query::compiler::SqlCompiler;
use crate::query::lookups::Lookup;
use crate::query::transforms::Transform;
use crate::value::Value;

/// A compiled SQL fragment and its positional parameters, in placeholder order.
pub type CompiledSql = (String, Vec<Value>);

/// A reference to a table column: the field-reference leaf of every tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Col {
    /// The table alias.
    pub alias: String,
    /// The column name.
    pub column: String,
    /// The declared field type of the column.
    pub output_type: FieldTypeId,
}

impl Col {
    /// Creates a column reference for `field` on the table aliased `alias`.
    pub fn new(alias: impl Into<String>, field: &Field) -> Self {
        Self {
            alias: alias.into(),
            column: field.column.clone(),
            output_type: field.field_type,
        }
    }
}

/// A node in a lookup expression tree.
#[derive(Debug, Clone)]
pub enum Expression {
    /// A column reference.
    Col(Col),
    /// An opaque literal, compiled to a placeholder plus a parameter.
    Value(Value),
    /// A terminal binary predicate (`lhs OP rhs`).
    Lookup(Box<Lookup>),
    /// A unary transform of its left-hand side.
    Transform(Box<Transform>),
}

impl Expression {
    /// Creates a literal value expression.
    pub fn value(v: impl Into<Value>) -> Self {
        Self::Value(v.into())
    }

    /// Creates a column reference expression.
    pub fn col(alias: impl Into<String>, field: &Field) -> Self {
        Self::Col(Col::new(alias, field))
    }

    /// Returns the field type this node's value behaves as.
    ///
    /// Literals and lookups have no field type; subsequent chain segments
    /// can only be resolved against columns and transforms.
    pub fn output_type(&self) -> Option<FieldTypeId> {
        match self {
            Self::Col(col) => Some(col.output_type),
            Self::Transform(transform) => Some(transform.output_type()),
            Self::Value(_) | Self::Lookup(_) => None,
        }
    }

    /// Returns the untransformed input of a transform node.
    ///
    /// Lookups use this to operate on the raw value beneath a transform
    /// instead of its wrapped form.
    pub fn source(&self) -> Option<&Self> {
        match self {
            Self::Transform(transform) => Some(transform.lhs()),
            _ => None,
        }
    }

    /// Returns `true` for terminal lookup nodes.
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }

    /// Returns a short description of the node kind, for logs and errors.
    pub fn node_name(&self) -> &str {
        match self {
            Self::Col(_) => "col",
            Self::Value(_) => "value",
            Self::Lookup(lookup) => lookup.lookup_name(),
            Self::Transform(transform) => transform.lookup_name(),
        }
    }

    /// Compiles this node without consulting vendor overrides.
    pub(crate) fn compile_generic(&self, compiler: &SqlCompiler<'_>) -> CompiledSql {
        match self {
            Self::Col(col) => (
                format!(
                    "{}.{}",
                    escape_percent(&compiler.quote_name(&col.alias)),
                    escape_percent(&compiler.quote_name(&col.column))
                ),
                Vec::new(),
            ),
            Self::Value(value) => compile_value(value),
            Self::Lookup(lookup) => lookup.class().as_sql(lookup, compiler),
            Self::Transform(transform) => transform.class().as_sql(transform, compiler),
        }
    }

    /// Compiles this node with the override registered for `vendor`, if any.
    pub(crate) fn compile_for_vendor(
        &self,
        vendor: &Vendor,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        match self {
            Self::Lookup(lookup) => lookup.class().as_vendor_sql(vendor, lookup, compiler),
            Self::Transform(transform) => {
                transform.class().as_vendor_sql(vendor, transform, compiler)
            }
            Self::Col(_) | Self::Value(_) => None,
        }
    }
}

/// Doubles `%` so identifiers never read as placeholders.
fn escape_percent(sql: &str) -> String {
    sql.replace('%', "%%")
}

/// Compiles a literal: one placeholder per scalar, lists as a parenthesized group.
fn compile_value(value: &Value) -> CompiledSql {
    match value {
        Value::List(items) => {
            let placeholders = vec!["%s"; items.len()].join(", ");
            (format!("({placeholders})"), items.clone())
        }
        other => ("%s".to_string(), vec![other.clone()]),
    }
}

impl From<Col> for Expression {
    fn from(col: Col) -> Self {
        Self::Col(col)
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Lookup> for Expression {
    fn from(lookup: Lookup) -> Self {
        Self::Lookup(Box::new(lookup))
    }
}

impl From<Transform> for Expression {
    fn from(transform: Transform) -> Self {
        Self::Transform(Box::new(transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionInfo;

    fn name_field() -> Field {
        Field::new("name", FieldTypeId::ROOT)
    }

    #[test]
    fn test_col_compiles_qualified() {
        let conn = ConnectionInfo::new(Vendor::SQLite);
        let compiler = SqlCompiler::new(&conn);
        let expr = Expression::col("author", &name_field());
        assert_eq!(
            compiler.compile(&expr),
            ("\"author\".\"name\"".to_string(), vec![])
        );
    }

    #[test]
    fn test_col_escapes_percent_in_identifiers() {
        let conn = ConnectionInfo::new(Vendor::SQLite);
        let compiler = SqlCompiler::new(&conn);
        let expr = Expression::col("a%sb", &Field::new("x%sy", FieldTypeId::ROOT));
        let (sql, params) = compiler.compile(&expr);
        assert_eq!(sql, "\"a%%sb\".\"x%%sy\"");
        assert!(params.is_empty());
        assert_eq!(crate::query::compiler::count_placeholders(&sql), 0);
        assert_eq!(
            crate::query::compiler::render_placeholders(&sql, &Vendor::PostgreSQL),
            "\"a%sb\".\"x%sy\""
        );
    }

    #[test]
    fn test_value_compiles_to_placeholder() {
        let conn = ConnectionInfo::new(Vendor::SQLite);
        let compiler = SqlCompiler::new(&conn);
        let (sql, params) = compiler.compile(&Expression::value("Jack"));
        assert_eq!(sql, "%s");
        assert_eq!(params, vec![Value::from("Jack")]);
    }

    #[test]
    fn test_list_value_compiles_to_group() {
        let conn = ConnectionInfo::new(Vendor::SQLite);
        let compiler = SqlCompiler::new(&conn);
        let list = Expression::value(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let (sql, params) = compiler.compile(&list);
        assert_eq!(sql, "(%s, %s, %s)");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_output_types() {
        let col = Expression::col("author", &Field::new("age", FieldTypeId(4)));
        assert_eq!(col.output_type(), Some(FieldTypeId(4)));
        assert_eq!(Expression::value(1).output_type(), None);
    }

    #[test]
    fn test_source_of_non_transform() {
        let col = Expression::col("author", &name_field());
        assert!(col.source().is_none());
        assert!(!col.is_lookup());
        assert_eq!(col.node_name(), "col");
    }

    #[test]
    fn test_col_has_no_vendor_override() {
        let conn = ConnectionInfo::new(Vendor::MySQL);
        let compiler = SqlCompiler::new(&conn);
        let col = Expression::col("author", &name_field());
        assert!(col.compile_for_vendor(&Vendor::MySQL, &compiler).is_none());
    }
}
