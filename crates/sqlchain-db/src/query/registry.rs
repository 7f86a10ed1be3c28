//! Lookup and transform registry.
//!
//! The registry maps a lookup name to the class that implements it, scoped to
//! a *host*: either a field type or a transform class.
//!
//! # Architecture
//!
//! - **Field types** form a single-rooted hierarchy stored in an arena
//!   (`Field` → `IntegerField` → `BigIntegerField`). Resolving a name against
//!   a type walks its ancestor chain, so a lookup registered on `Field` is
//!   visible from every descendant unless the descendant overrides it.
//! - **Transform-local tables** hold lookups and transforms that are only
//!   valid directly after one transform class. They are keyed by the
//!   transform's [`class_name`](TransformClass::class_name), not by its
//!   output type.
//!
//! Registration is an initialization-time activity. The process-wide
//! [`LOOKUPS`] registry enforces that with a freeze lifecycle: once frozen,
//! writes fail unless late registration has been explicitly allowed.
//!
//! # Examples
//!
//! ```
//! use sqlchain_db::fields::builtin;
//! use sqlchain_db::query::registry::LookupRegistry;
//!
//! let registry = LookupRegistry::with_defaults();
//! // `exact` is registered on `Field` and inherited by every other type.
//! let entry = registry.resolve(builtin::BIG_INTEGER_FIELD, "exact").unwrap();
//! assert!(entry.lookup().is_some());
//! assert!(registry.resolve(builtin::BOOLEAN_FIELD, "lower").is_none());
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;
use sqlchain_core::{QueryError, QueryResult, Settings};

use crate::fields::{builtin, FieldTypeId};
use crate::query::lookups::{builtin_lookups, LookupClass};
use crate::query::transforms::{builtin_transforms, TransformClass};

/// The separator between segments of a lookup path (`change__abs__lt`).
pub const LOOKUP_SEP: &str = "__";

/// A registry entry: the class implementing a name, in one of two roles.
#[derive(Debug, Clone)]
pub enum RegisteredLookup {
    /// A terminal lookup.
    Lookup(Arc<dyn LookupClass>),
    /// A chainable transform.
    Transform(Arc<dyn TransformClass>),
}

impl RegisteredLookup {
    /// Returns the lookup class, if this entry is a lookup.
    pub const fn lookup(&self) -> Option<&Arc<dyn LookupClass>> {
        match self {
            Self::Lookup(class) => Some(class),
            Self::Transform(_) => None,
        }
    }

    /// Returns the transform class, if this entry is a transform.
    pub const fn transform(&self) -> Option<&Arc<dyn TransformClass>> {
        match self {
            Self::Transform(class) => Some(class),
            Self::Lookup(_) => None,
        }
    }

    /// `"lookup"` or `"transform"`.
    pub const fn role(&self) -> &'static str {
        match self {
            Self::Lookup(_) => "lookup",
            Self::Transform(_) => "transform",
        }
    }

    /// The implementing class's name.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Lookup(class) => class.class_name(),
            Self::Transform(class) => class.class_name(),
        }
    }
}

/// Where a registration lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupHost {
    /// A field type's table, inherited by its descendants.
    FieldType(FieldTypeId),
    /// The local table of the transform class with this class name.
    Transform(String),
}

impl LookupHost {
    /// The local table of `class`.
    pub fn transform_of(class: &dyn TransformClass) -> Self {
        Self::Transform(class.class_name().to_string())
    }
}

impl From<FieldTypeId> for LookupHost {
    fn from(id: FieldTypeId) -> Self {
        Self::FieldType(id)
    }
}

impl fmt::Display for LookupHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldType(id) => write!(f, "field type {id}"),
            Self::Transform(class) => write!(f, "transform {class}"),
        }
    }
}

#[derive(Debug, Clone)]
struct FieldTypeNode {
    name: String,
    parent: Option<FieldTypeId>,
    lookups: HashMap<String, RegisteredLookup>,
}

/// Field type hierarchy plus every lookup table.
#[derive(Debug, Clone)]
pub struct LookupRegistry {
    types: Vec<FieldTypeNode>,
    transform_lookups: HashMap<String, HashMap<String, RegisteredLookup>>,
}

impl Default for LookupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupRegistry {
    /// Creates a registry whose hierarchy holds only the root `Field` type
    /// and whose tables are empty.
    pub fn new() -> Self {
        Self {
            types: vec![FieldTypeNode {
                name: "Field".to_string(),
                parent: None,
                lookups: HashMap::new(),
            }],
            transform_lookups: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in field types, lookups and transforms.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, parent, expected) in [
            ("CharField", builtin::FIELD, builtin::CHAR_FIELD),
            ("TextField", builtin::CHAR_FIELD, builtin::TEXT_FIELD),
            ("IntegerField", builtin::FIELD, builtin::INTEGER_FIELD),
            ("BigIntegerField", builtin::INTEGER_FIELD, builtin::BIG_INTEGER_FIELD),
            ("FloatField", builtin::FIELD, builtin::FLOAT_FIELD),
            ("BooleanField", builtin::FIELD, builtin::BOOLEAN_FIELD),
            ("DateField", builtin::FIELD, builtin::DATE_FIELD),
            ("DateTimeField", builtin::DATE_FIELD, builtin::DATE_TIME_FIELD),
        ] {
            let id = registry.push_type(name, parent);
            debug_assert_eq!(id, expected, "built-in field type {name} out of order");
        }

        for class in builtin_lookups() {
            let name = class.lookup_name().to_string();
            registry.types[builtin::FIELD.index()]
                .lookups
                .insert(name, RegisteredLookup::Lookup(class));
        }
        for (host, class) in builtin_transforms() {
            let name = class.lookup_name().to_string();
            registry.types[host.index()]
                .lookups
                .insert(name, RegisteredLookup::Transform(class));
        }
        registry
    }

    fn push_type(&mut self, name: &str, parent: FieldTypeId) -> FieldTypeId {
        let id = FieldTypeId(self.types.len());
        self.types.push(FieldTypeNode {
            name: name.to_string(),
            parent: Some(parent),
            lookups: HashMap::new(),
        });
        id
    }

    fn node(&self, id: FieldTypeId) -> Option<&FieldTypeNode> {
        self.types.get(id.index())
    }

    // ── Field type hierarchy ─────────────────────────────────────────

    /// Adds a field type as a child of `parent`.
    ///
    /// Type names are unique; the root is named `Field`.
    pub fn add_field_type(
        &mut self,
        name: impl Into<String>,
        parent: FieldTypeId,
    ) -> QueryResult<FieldTypeId> {
        let name = name.into();
        if name.is_empty() {
            return Err(QueryError::RegistrationError(
                "Field type name cannot be empty".to_string(),
            ));
        }
        if self.node(parent).is_none() {
            return Err(QueryError::RegistrationError(format!(
                "Unknown parent field type {parent} for '{name}'"
            )));
        }
        if self.field_type(&name).is_some() {
            return Err(QueryError::RegistrationError(format!(
                "Field type '{name}' is already defined"
            )));
        }
        let id = self.push_type(&name, parent);
        tracing::debug!(field_type = %name, id = %id, parent = %parent, "Added field type");
        Ok(id)
    }

    /// Looks up a field type by name.
    pub fn field_type(&self, name: &str) -> Option<FieldTypeId> {
        self.types
            .iter()
            .position(|node| node.name == name)
            .map(FieldTypeId)
    }

    /// The name of a field type.
    pub fn field_type_name(&self, id: FieldTypeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// The immediate parent of a field type. `None` for the root.
    pub fn parent_of(&self, id: FieldTypeId) -> Option<FieldTypeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// The ancestor chain of `id`, starting with `id` itself and ending at the
    /// root. Empty for an unknown id.
    pub fn ancestors(&self, id: FieldTypeId) -> Vec<FieldTypeId> {
        let mut chain = Vec::new();
        let mut current = self.node(id).map(|_| id);
        while let Some(ty) = current {
            chain.push(ty);
            current = self.parent_of(ty);
        }
        chain
    }

    /// Returns `true` if `id` is `ancestor` or one of its descendants.
    pub fn is_subtype(&self, id: FieldTypeId, ancestor: FieldTypeId) -> bool {
        self.ancestors(id).contains(&ancestor)
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Registers `entry` under `name` on `host`.
    ///
    /// Registering the same name on the same host again replaces the prior
    /// entry. In a transform-local table a name may hold only one role:
    /// registering a lookup where a transform of that name exists (or vice
    /// versa) fails with [`QueryError::AmbiguousResolutionError`]. On any
    /// error the registry is left unchanged.
    pub fn register(
        &mut self,
        host: impl Into<LookupHost>,
        name: &str,
        entry: RegisteredLookup,
    ) -> QueryResult<()> {
        validate_lookup_name(name)?;
        let host = host.into();
        let previous = match &host {
            LookupHost::FieldType(id) => {
                let node = self.types.get_mut(id.index()).ok_or_else(|| {
                    QueryError::RegistrationError(format!(
                        "Cannot register '{name}' on unknown field type {id}"
                    ))
                })?;
                node.lookups.insert(name.to_string(), entry.clone())
            }
            LookupHost::Transform(class) => {
                let existing = self
                    .transform_lookups
                    .get(class)
                    .and_then(|table| table.get(name));
                if let Some(existing) = existing {
                    if existing.role() != entry.role() {
                        return Err(QueryError::AmbiguousResolutionError(format!(
                            "'{name}' is already registered as a {} on transform {class}; \
                             cannot also register it as a {}",
                            existing.role(),
                            entry.role()
                        )));
                    }
                }
                self.transform_lookups
                    .entry(class.clone())
                    .or_default()
                    .insert(name.to_string(), entry.clone())
            }
        };
        match previous {
            Some(previous) => tracing::debug!(
                host = %host,
                name,
                class = entry.class_name(),
                replaced = previous.class_name(),
                "Replaced registered {}",
                entry.role()
            ),
            None => tracing::debug!(
                host = %host,
                name,
                class = entry.class_name(),
                "Registered {}",
                entry.role()
            ),
        }
        Ok(())
    }

    /// Registers a lookup class under its own name.
    pub fn register_lookup(
        &mut self,
        host: impl Into<LookupHost>,
        class: Arc<dyn LookupClass>,
    ) -> QueryResult<()> {
        let name = class.lookup_name().to_string();
        self.register(host, &name, RegisteredLookup::Lookup(class))
    }

    /// Registers a transform class under its own name.
    pub fn register_transform(
        &mut self,
        host: impl Into<LookupHost>,
        class: Arc<dyn TransformClass>,
    ) -> QueryResult<()> {
        let name = class.lookup_name().to_string();
        self.register(host, &name, RegisteredLookup::Transform(class))
    }

    /// Removes `name` from `host`'s own table, returning the removed entry.
    ///
    /// Ancestors are not touched, so an inherited entry becomes visible again.
    pub fn unregister(
        &mut self,
        host: impl Into<LookupHost>,
        name: &str,
    ) -> Option<RegisteredLookup> {
        match host.into() {
            LookupHost::FieldType(id) => self.types.get_mut(id.index())?.lookups.remove(name),
            LookupHost::Transform(class) => self.transform_lookups.get_mut(&class)?.remove(name),
        }
    }

    // ── Resolution ───────────────────────────────────────────────────

    /// Resolves `name` against `field_type`, walking up to the root.
    pub fn resolve(&self, field_type: FieldTypeId, name: &str) -> Option<&RegisteredLookup> {
        let mut current = Some(field_type);
        while let Some(id) = current {
            let node = self.node(id)?;
            if let Some(entry) = node.lookups.get(name) {
                return Some(entry);
            }
            current = node.parent;
        }
        None
    }

    /// Resolves `name` in the local table of the transform class `class_name`
    /// only.
    pub fn resolve_for_transform(
        &self,
        class_name: &str,
        name: &str,
    ) -> Option<&RegisteredLookup> {
        self.transform_lookups.get(class_name)?.get(name)
    }

    /// Every name resolvable from `field_type`, sorted.
    pub fn lookup_names(&self, field_type: FieldTypeId) -> Vec<&str> {
        self.ancestors(field_type)
            .into_iter()
            .filter_map(|id| self.node(id))
            .flat_map(|node| node.lookups.keys().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every name in the local table of a transform class, sorted.
    pub fn transform_lookup_names(&self, class_name: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .transform_lookups
            .get(class_name)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

/// Checks that `name` can be registered: non-empty and free of [`LOOKUP_SEP`].
pub fn validate_lookup_name(name: &str) -> QueryResult<()> {
    if name.is_empty() {
        return Err(QueryError::RegistrationError(
            "Lookup name cannot be empty".to_string(),
        ));
    }
    if name.contains(LOOKUP_SEP) {
        return Err(QueryError::RegistrationError(format!(
            "Lookup name '{name}' cannot contain '{LOOKUP_SEP}'"
        )));
    }
    Ok(())
}

// ── Global registry ──────────────────────────────────────────────────

/// A process-wide registry with a write-then-freeze lifecycle.
///
/// Writes are expected during startup. After [`freeze`](Self::freeze) every
/// write fails with [`QueryError::RegistrationError`] unless late
/// registration has been allowed, in which case writes still go through the
/// lock and become visible to subsequent readers.
pub struct GlobalRegistry {
    inner: RwLock<LookupRegistry>,
    frozen: AtomicBool,
    allow_late_registration: AtomicBool,
}

impl fmt::Debug for GlobalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalRegistry")
            .field("frozen", &self.is_frozen())
            .field("allow_late_registration", &self.allows_late_registration())
            .finish_non_exhaustive()
    }
}

impl GlobalRegistry {
    /// Wraps `registry` in an unfrozen global registry.
    pub fn new(registry: LookupRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
            frozen: AtomicBool::new(false),
            allow_late_registration: AtomicBool::new(false),
        }
    }

    fn write<T>(
        &self,
        what: &str,
        f: impl FnOnce(&mut LookupRegistry) -> QueryResult<T>,
    ) -> QueryResult<T> {
        let mut registry = self.inner.write().expect("lookup registry lock poisoned");
        if self.is_frozen() {
            if !self.allows_late_registration() {
                tracing::warn!(what, "Rejected write to frozen lookup registry");
                return Err(QueryError::RegistrationError(format!(
                    "Cannot register {what}: the lookup registry is frozen"
                )));
            }
            tracing::info!(what, "Late write to frozen lookup registry");
        }
        f(&mut registry)
    }

    /// Registers `entry` under `name` on `host`. See [`LookupRegistry::register`].
    pub fn register(
        &self,
        host: impl Into<LookupHost>,
        name: &str,
        entry: RegisteredLookup,
    ) -> QueryResult<()> {
        self.write(&format!("'{name}'"), |registry| {
            registry.register(host, name, entry)
        })
    }

    /// Registers a lookup class under its own name.
    pub fn register_lookup(
        &self,
        host: impl Into<LookupHost>,
        class: Arc<dyn LookupClass>,
    ) -> QueryResult<()> {
        let name = class.lookup_name().to_string();
        self.register(host, &name, RegisteredLookup::Lookup(class))
    }

    /// Registers a transform class under its own name.
    pub fn register_transform(
        &self,
        host: impl Into<LookupHost>,
        class: Arc<dyn TransformClass>,
    ) -> QueryResult<()> {
        let name = class.lookup_name().to_string();
        self.register(host, &name, RegisteredLookup::Transform(class))
    }

    /// Adds a field type. See [`LookupRegistry::add_field_type`].
    pub fn add_field_type(&self, name: &str, parent: FieldTypeId) -> QueryResult<FieldTypeId> {
        self.write(&format!("field type '{name}'"), |registry| {
            registry.add_field_type(name, parent)
        })
    }

    /// Ends the registration phase.
    pub fn freeze(&self) {
        let _registry = self.inner.write().expect("lookup registry lock poisoned");
        if !self.frozen.swap(true, Ordering::AcqRel) {
            tracing::info!("Lookup registry frozen");
        }
    }

    /// Returns `true` once [`freeze`](Self::freeze) has been called.
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }

    /// Sets whether writes are accepted after the registry is frozen.
    pub fn set_allow_late_registration(&self, allow: bool) {
        self.allow_late_registration.store(allow, Ordering::Release);
    }

    /// Returns `true` if writes are accepted after the registry is frozen.
    pub fn allows_late_registration(&self) -> bool {
        self.allow_late_registration.load(Ordering::Acquire)
    }

    /// Applies registry-related settings.
    pub fn configure(&self, settings: &Settings) {
        self.set_allow_late_registration(settings.allow_late_registration);
    }

    /// Acquires a read guard for resolution.
    pub fn read(&self) -> RwLockReadGuard<'_, LookupRegistry> {
        self.inner.read().expect("lookup registry lock poisoned")
    }
}

/// The process-wide lookup registry, seeded with the built-in catalogue.
///
/// # Examples
///
/// ```
/// use sqlchain_db::fields::builtin;
/// use sqlchain_db::query::registry::LOOKUPS;
///
/// let registry = LOOKUPS.read();
/// assert!(registry.resolve(builtin::CHAR_FIELD, "icontains").is_some());
/// ```
pub static LOOKUPS: Lazy<GlobalRegistry> =
    Lazy::new(|| GlobalRegistry::new(LookupRegistry::with_defaults()));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::lookups::{Comparison, Exact};
    use crate::query::transforms::{FuncTransform, Length};

    #[test]
    fn test_new_has_only_root() {
        let registry = LookupRegistry::new();
        assert_eq!(registry.field_type("Field"), Some(FieldTypeId::ROOT));
        assert_eq!(registry.parent_of(FieldTypeId::ROOT), None);
        assert!(registry.lookup_names(FieldTypeId::ROOT).is_empty());
    }

    #[test]
    fn test_builtin_hierarchy() {
        let registry = LookupRegistry::with_defaults();
        assert_eq!(registry.field_type("DateTimeField"), Some(builtin::DATE_TIME_FIELD));
        assert_eq!(
            registry.ancestors(builtin::DATE_TIME_FIELD),
            vec![builtin::DATE_TIME_FIELD, builtin::DATE_FIELD, builtin::FIELD]
        );
        assert!(registry.is_subtype(builtin::TEXT_FIELD, builtin::CHAR_FIELD));
        assert!(!registry.is_subtype(builtin::CHAR_FIELD, builtin::TEXT_FIELD));
    }

    #[test]
    fn test_add_field_type() {
        let mut registry = LookupRegistry::with_defaults();
        let id = registry
            .add_field_type("PositiveIntegerField", builtin::INTEGER_FIELD)
            .unwrap();
        assert_eq!(registry.field_type_name(id), Some("PositiveIntegerField"));
        assert!(registry.resolve(id, "abs").is_some());
        assert!(registry.resolve(id, "exact").is_some());
    }

    #[test]
    fn test_add_field_type_errors() {
        let mut registry = LookupRegistry::new();
        assert!(registry.add_field_type("", FieldTypeId::ROOT).is_err());
        assert!(registry.add_field_type("Field", FieldTypeId::ROOT).is_err());
        let err = registry.add_field_type("X", FieldTypeId(42)).unwrap_err();
        assert!(matches!(err, QueryError::RegistrationError(_)));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = LookupRegistry::new();
        registry.register_lookup(FieldTypeId::ROOT, Arc::new(Exact)).unwrap();
        registry
            .register(
                FieldTypeId::ROOT,
                "exact",
                RegisteredLookup::Lookup(Arc::new(Comparison::LESS_THAN)),
            )
            .unwrap();
        let entry = registry.resolve(FieldTypeId::ROOT, "exact").unwrap();
        assert_eq!(entry.class_name(), "LessThan");
    }

    #[test]
    fn test_register_rejects_separator() {
        let mut registry = LookupRegistry::new();
        let err = registry
            .register(FieldTypeId::ROOT, "fo__o", RegisteredLookup::Lookup(Arc::new(Exact)))
            .unwrap_err();
        assert!(matches!(err, QueryError::RegistrationError(_)));
        assert!(registry.lookup_names(FieldTypeId::ROOT).is_empty());
    }

    #[test]
    fn test_register_rejects_empty_and_unknown_host() {
        let mut registry = LookupRegistry::new();
        assert!(registry
            .register(FieldTypeId::ROOT, "", RegisteredLookup::Lookup(Arc::new(Exact)))
            .is_err());
        assert!(registry.register_lookup(FieldTypeId(9), Arc::new(Exact)).is_err());
    }

    #[test]
    fn test_override_on_descendant() {
        let mut registry = LookupRegistry::with_defaults();
        registry
            .register(
                builtin::INTEGER_FIELD,
                "exact",
                RegisteredLookup::Lookup(Arc::new(Comparison::GREATER_THAN)),
            )
            .unwrap();
        assert_eq!(
            registry.resolve(builtin::BIG_INTEGER_FIELD, "exact").unwrap().class_name(),
            "GreaterThan"
        );
        assert_eq!(
            registry.resolve(builtin::CHAR_FIELD, "exact").unwrap().class_name(),
            "Exact"
        );
    }

    #[test]
    fn test_unregister_restores_inherited() {
        let mut registry = LookupRegistry::with_defaults();
        registry
            .register_lookup(builtin::CHAR_FIELD, Arc::new(Comparison::GREATER_THAN))
            .unwrap();
        assert!(registry.unregister(builtin::CHAR_FIELD, "gt").is_some());
        assert_eq!(
            registry.resolve(builtin::CHAR_FIELD, "gt").unwrap().class_name(),
            "GreaterThan"
        );
        assert!(registry.unregister(builtin::CHAR_FIELD, "gt").is_none());
    }

    #[test]
    fn test_transform_local_table() {
        let mut registry = LookupRegistry::with_defaults();
        let host = LookupHost::transform_of(&FuncTransform::ABS);
        registry
            .register_lookup(host.clone(), Arc::new(Comparison::LESS_THAN))
            .unwrap();
        assert!(registry.resolve_for_transform("Abs", "lt").is_some());
        assert!(registry.resolve_for_transform("Abs", "gt").is_none());
        assert!(registry.resolve_for_transform("Lower", "lt").is_none());
        assert_eq!(registry.transform_lookup_names("Abs"), vec!["lt"]);
    }

    #[test]
    fn test_transform_local_role_conflict() {
        let mut registry = LookupRegistry::new();
        let host = LookupHost::Transform("Abs".to_string());
        registry
            .register(host.clone(), "length", RegisteredLookup::Lookup(Arc::new(Exact)))
            .unwrap();
        let err = registry
            .register(host.clone(), "length", RegisteredLookup::Transform(Arc::new(Length)))
            .unwrap_err();
        assert!(matches!(err, QueryError::AmbiguousResolutionError(_)));
        assert!(registry
            .resolve_for_transform("Abs", "length")
            .unwrap()
            .lookup()
            .is_some());
        registry
            .register(host, "length", RegisteredLookup::Lookup(Arc::new(Comparison::LESS_THAN)))
            .unwrap();
    }

    #[test]
    fn test_lookup_names_merged() {
        let registry = LookupRegistry::with_defaults();
        let names = registry.lookup_names(builtin::TEXT_FIELD);
        assert!(names.contains(&"exact"));
        assert!(names.contains(&"lower"));
        assert!(!names.contains(&"abs"));
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_global_registry_freeze() {
        let global = GlobalRegistry::new(LookupRegistry::new());
        global.register_lookup(FieldTypeId::ROOT, Arc::new(Exact)).unwrap();
        global.freeze();
        assert!(global.is_frozen());
        let err = global
            .register_lookup(FieldTypeId::ROOT, Arc::new(Comparison::LESS_THAN))
            .unwrap_err();
        assert!(err.to_string().contains("frozen"));
        assert!(global.read().resolve(FieldTypeId::ROOT, "lt").is_none());
        assert!(global.add_field_type("CharField", FieldTypeId::ROOT).is_err());
    }

    #[test]
    fn test_global_registry_late_registration() {
        let global = GlobalRegistry::new(LookupRegistry::new());
        global.freeze();
        global.configure(&Settings {
            allow_late_registration: true,
            ..Settings::default()
        });
        global
            .register_lookup(FieldTypeId::ROOT, Arc::new(Comparison::LESS_THAN))
            .unwrap();
        assert!(global.read().resolve(FieldTypeId::ROOT, "lt").is_some());
    }

    #[test]
    fn test_global_lookups_seeded() {
        let registry = LOOKUPS.read();
        assert!(registry.resolve(builtin::DATE_TIME_FIELD, "year").is_some());
        assert!(registry.resolve(builtin::DATE_FIELD, "hour").is_none());
    }
}
