//! Field type handles, field declarations, and tables.

use std::fmt;

use crate::query::expressions::Col;

/// Handle of a field type inside a registry's type hierarchy.
///
/// Field types form a single-rooted tree (e.g. `Field` → `IntegerField` →
/// `BigIntegerField`). The handle is an index into the registry arena, so it
/// is only meaningful for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldTypeId(pub(crate) usize);

impl FieldTypeId {
    /// The root of every hierarchy, the base `Field` type.
    pub const ROOT: Self = Self(0);

    /// Returns the arena index of this handle.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handles of the built-in field types.
///
/// `LookupRegistry::with_defaults` issues exactly these ids, in this order.
pub mod builtin {
    use super::FieldTypeId;

    /// `Field`, the root.
    pub const FIELD: FieldTypeId = FieldTypeId::ROOT;
    /// `CharField`.
    pub const CHAR_FIELD: FieldTypeId = FieldTypeId(1);
    /// `TextField`, a `CharField`.
    pub const TEXT_FIELD: FieldTypeId = FieldTypeId(2);
    /// `IntegerField`.
    pub const INTEGER_FIELD: FieldTypeId = FieldTypeId(3);
    /// `BigIntegerField`, an `IntegerField`.
    pub const BIG_INTEGER_FIELD: FieldTypeId = FieldTypeId(4);
    /// `FloatField`.
    pub const FLOAT_FIELD: FieldTypeId = FieldTypeId(5);
    /// `BooleanField`.
    pub const BOOLEAN_FIELD: FieldTypeId = FieldTypeId(6);
    /// `DateField`.
    pub const DATE_FIELD: FieldTypeId = FieldTypeId(7);
    /// `DateTimeField`, a `DateField`.
    pub const DATE_TIME_FIELD: FieldTypeId = FieldTypeId(8);
}

impl fmt::Display for FieldTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A model field: its attribute name, database column, and field type.
///
/// # Examples
///
/// ```
/// use sqlchain_db::fields::{Field, FieldTypeId};
///
/// let field = Field::new("name", FieldTypeId::ROOT).db_column("author_name");
/// assert_eq!(field.name, "name");
/// assert_eq!(field.column, "author_name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The attribute name used in lookup paths.
    pub name: String,
    /// The database column name (defaults to `name`).
    pub column: String,
    /// The field type lookups are resolved against.
    pub field_type: FieldTypeId,
}

impl Field {
    /// Creates a field whose column name equals its attribute name.
    pub fn new(name: impl Into<String>, field_type: FieldTypeId) -> Self {
        let name = name.into();
        Self {
            column: name.clone(),
            name,
            field_type,
        }
    }

    /// Sets the database column name.
    #[must_use]
    pub fn db_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }
}

/// A table alias and the fields reachable through it.
///
/// # Examples
///
/// ```
/// use sqlchain_db::fields::{Field, FieldTypeId, Table};
///
/// let table = Table::new("author").with_field(Field::new("name", FieldTypeId::ROOT));
/// assert!(table.get_field("name").is_some());
/// assert!(table.get_field("age").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The alias columns are qualified with in compiled SQL.
    pub alias: String,
    fields: Vec<Field>,
}

impl Table {
    /// Creates a table with no fields.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to this table.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field with the given attribute name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the attribute names of all fields, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns a column reference for the named field.
    pub fn col(&self, name: &str) -> Option<Col> {
        self.get_field(name).map(|field| Col::new(&self.alias, field))
    }
}
