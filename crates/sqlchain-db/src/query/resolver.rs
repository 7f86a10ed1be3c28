//! Name-chain resolution.
//!
//! Turns a lookup path such as `change__abs__lt` into an expression tree. The
//! first segment names a field of the table; every following segment except
//! the last must be a transform, and the last is either a lookup or a
//! transform (in which case `exact` is applied to its result). A path with no
//! segments after the field means `exact`.
//!
//! Each segment is resolved against the node built so far: first in the local
//! table of the transform class when that node is a transform, then against
//! the node's output field type and its ancestors.

use std::sync::Arc;

use sqlchain_core::{QueryError, QueryResult};

use crate::fields::Table;
use crate::query::expressions::Expression;
use crate::query::lookups::Lookup;
use crate::query::registry::{LookupRegistry, RegisteredLookup, LOOKUP_SEP, LOOKUPS};
use crate::query::transforms::Transform;

/// The lookup applied when a path ends without one.
pub const DEFAULT_LOOKUP: &str = "exact";

/// Resolves name chains against a registry.
#[derive(Debug, Clone, Copy)]
pub struct NameChainResolver<'r> {
    registry: &'r LookupRegistry,
}

impl<'r> NameChainResolver<'r> {
    /// Creates a resolver reading from `registry`.
    pub const fn new(registry: &'r LookupRegistry) -> Self {
        Self { registry }
    }

    /// Builds a lookup from `lhs` and the segments following the field name.
    ///
    /// `rhs` is the comparison operand; lookups that require one fail with
    /// [`QueryError::LookupConfigurationError`] when it is missing.
    pub fn resolve(
        &self,
        lhs: impl Into<Expression>,
        segments: &[&str],
        rhs: Option<Expression>,
    ) -> QueryResult<Lookup> {
        let mut current = lhs.into();
        if current.output_type().is_none() {
            return Err(QueryError::FieldError(format!(
                "Cannot resolve lookups against a {} expression",
                current.node_name()
            )));
        }
        let Some((last, transforms)) = segments.split_last() else {
            return self.build_default(current, rhs);
        };
        for segment in transforms {
            current = self.try_transform(current, segment)?;
        }
        self.build_lookup(current, last, rhs)
    }

    /// Resolves a full path whose first segment is a field of `table`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlchain_db::fields::{builtin, Field, Table};
    /// use sqlchain_db::query::registry::LookupRegistry;
    /// use sqlchain_db::query::resolver::NameChainResolver;
    /// use sqlchain_db::value::Value;
    ///
    /// let registry = LookupRegistry::with_defaults();
    /// let table = Table::new("author").with_field(Field::new("name", builtin::CHAR_FIELD));
    /// let lookup = NameChainResolver::new(&registry)
    ///     .resolve_path(&table, "name__lower__startswith", Some(Value::from("j").into()))
    ///     .unwrap();
    /// assert_eq!(lookup.lookup_name(), "startswith");
    /// ```
    pub fn resolve_path(
        &self,
        table: &Table,
        path: &str,
        rhs: Option<Expression>,
    ) -> QueryResult<Lookup> {
        tracing::trace!(table = %table.alias, path, "Resolving lookup path");
        let mut parts = path.split(LOOKUP_SEP);
        let keyword = parts.next().unwrap_or_default();
        let col = table.col(keyword).ok_or_else(|| {
            QueryError::FieldError(format!(
                "Cannot resolve keyword '{keyword}' into field. Choices are: {}",
                table.field_names().join(", ")
            ))
        })?;
        let segments: Vec<&str> = parts.collect();
        self.resolve(col, &segments, rhs)
    }

    /// Finds `name` for the node `current`: the transform-local table first,
    /// then the output type's hierarchy.
    fn find(&self, current: &Expression, name: &str) -> Option<&'r RegisteredLookup> {
        if let Expression::Transform(transform) = current {
            let local = self
                .registry
                .resolve_for_transform(transform.class().class_name(), name);
            if local.is_some() {
                return local;
            }
        }
        self.registry.resolve(current.output_type()?, name)
    }

    fn try_transform(&self, current: Expression, name: &str) -> QueryResult<Expression> {
        match self.find(&current, name) {
            Some(RegisteredLookup::Transform(class)) => {
                Ok(Transform::new(current, name, Arc::clone(class))?.into())
            }
            Some(RegisteredLookup::Lookup(_)) => Err(QueryError::FieldError(format!(
                "Lookup '{name}' must be the last segment of a lookup path"
            ))),
            None => Err(self.unsupported(&current, name)),
        }
    }

    fn build_lookup(
        &self,
        current: Expression,
        name: &str,
        rhs: Option<Expression>,
    ) -> QueryResult<Lookup> {
        match self.find(&current, name) {
            Some(RegisteredLookup::Lookup(class)) => {
                Lookup::new(current, name, Arc::clone(class), rhs)
            }
            Some(RegisteredLookup::Transform(class)) => {
                let transformed = Transform::new(current, name, Arc::clone(class))?;
                self.build_default(transformed.into(), rhs)
            }
            None => Err(self.unsupported(&current, name)),
        }
    }

    fn build_default(&self, current: Expression, rhs: Option<Expression>) -> QueryResult<Lookup> {
        match self.find(&current, DEFAULT_LOOKUP) {
            Some(RegisteredLookup::Lookup(class)) => {
                Lookup::new(current, DEFAULT_LOOKUP, Arc::clone(class), rhs)
            }
            _ => Err(self.unsupported(&current, DEFAULT_LOOKUP)),
        }
    }

    fn unsupported(&self, current: &Expression, name: &str) -> QueryError {
        let type_name = current
            .output_type()
            .and_then(|ty| self.registry.field_type_name(ty))
            .unwrap_or("expression");
        let message =
            format!("Unsupported lookup '{name}' for {type_name} or join on the field not permitted");
        match current {
            Expression::Transform(transform) => QueryError::FieldError(format!(
                "{message} (after transform '{}')",
                transform.lookup_name()
            )),
            _ => QueryError::FieldError(message),
        }
    }
}

/// Resolves `path` on `table` against the process-wide [`LOOKUPS`] registry.
pub fn resolve_path(table: &Table, path: &str, rhs: Option<Expression>) -> QueryResult<Lookup> {
    let registry = LOOKUPS.read();
    NameChainResolver::new(&registry).resolve_path(table, path, rhs)
}
