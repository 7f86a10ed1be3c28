//! Integration tests for lookup registration, resolution and compilation.
//!
//! Tests cover: custom lookups on the base field type, custom transforms with
//! the default `exact` lookup, transform-local lookups that bypass their
//! parent transform, vendor overrides, registration errors, inheritance and
//! override precedence, placeholder accounting, concurrent compilation over a
//! frozen shared registry, and late registration while readers are active.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use sqlchain_core::settings_loader;
use sqlchain_core::{QueryError, Vendor};
use sqlchain_db::fields::{builtin, Field, FieldTypeId, Table};
use sqlchain_db::query::{
    compile, count_placeholders, CompiledSql, Expression, GlobalRegistry, Lookup, LookupClass,
    LookupHost, LookupRegistry, NameChainResolver, RegisteredLookup, SqlCompiler, Transform,
    TransformClass,
};
use sqlchain_db::{ConnectionInfo, Value};

// ── Custom classes ───────────────────────────────────────────────────

#[derive(Debug)]
struct NotEqual;

impl LookupClass for NotEqual {
    fn lookup_name(&self) -> &str {
        "ne"
    }

    fn class_name(&self) -> &str {
        "NotEqual"
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        lookup.as_binary("<>", compiler)
    }
}

#[derive(Debug)]
struct MySqlNotEqual;

impl LookupClass for MySqlNotEqual {
    fn lookup_name(&self) -> &str {
        "ne"
    }

    fn class_name(&self) -> &str {
        "MySQLNotEqual"
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        lookup.as_binary("<>", compiler)
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        (*vendor == Vendor::MySQL).then(|| lookup.as_binary("!=", compiler))
    }
}

#[derive(Debug)]
struct AbsoluteValue;

impl TransformClass for AbsoluteValue {
    fn lookup_name(&self) -> &str {
        "abs"
    }

    fn class_name(&self) -> &str {
        "AbsoluteValue"
    }

    fn function(&self) -> &str {
        "ABS"
    }
}

/// `abs(x) < y` rewritten as `x < y AND x > -y` so an index on `x` is usable.
#[derive(Debug)]
struct AbsoluteValueLessThan;

impl LookupClass for AbsoluteValueLessThan {
    fn lookup_name(&self) -> &str {
        "lt"
    }

    fn class_name(&self) -> &str {
        "AbsoluteValueLessThan"
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let source = lookup.lhs().source().unwrap_or_else(|| lookup.lhs());
        let (lhs, lhs_params) = compiler.compile(source);
        let (rhs, rhs_params) = lookup.process_rhs(compiler);
        let mut params = lhs_params.clone();
        params.extend(rhs_params.iter().cloned());
        params.extend(lhs_params);
        params.extend(rhs_params);
        (format!("{lhs} < {rhs} AND {lhs} > -{rhs}"), params)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────

fn author() -> Table {
    Table::new("author")
        .with_field(Field::new("name", builtin::CHAR_FIELD))
        .with_field(Field::new("bio", builtin::TEXT_FIELD))
        .with_field(Field::new("born", builtin::DATE_FIELD))
}

fn experiments() -> Table {
    Table::new("experiments")
        .with_field(Field::new("change", builtin::INTEGER_FIELD))
        .with_field(Field::new("total", builtin::BIG_INTEGER_FIELD))
}

fn registry_with_custom_classes() -> LookupRegistry {
    let mut registry = LookupRegistry::with_defaults();
    registry
        .register_lookup(builtin::FIELD, Arc::new(NotEqual))
        .unwrap();
    registry
        .register_transform(builtin::INTEGER_FIELD, Arc::new(AbsoluteValue))
        .unwrap();
    registry
        .register_lookup(
            LookupHost::transform_of(&AbsoluteValue),
            Arc::new(AbsoluteValueLessThan),
        )
        .unwrap();
    registry
}

fn compile_path(
    registry: &LookupRegistry,
    table: &Table,
    path: &str,
    rhs: impl Into<Value>,
    vendor: Vendor,
) -> CompiledSql {
    let lookup = NameChainResolver::new(registry)
        .resolve_path(table, path, Some(Expression::value(rhs)))
        .unwrap();
    compile(&lookup.into(), &ConnectionInfo::new(vendor))
}

// ═════════════════════════════════════════════════════════════════════
// 1. Custom lookup on the base field type
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_not_equal_on_base_type() {
    let registry = registry_with_custom_classes();
    let (sql, params) = compile_path(&registry, &author(), "name__ne", "Jack", Vendor::SQLite);
    assert_eq!(sql, "\"author\".\"name\" <> %s");
    assert_eq!(params, vec![Value::from("Jack")]);
}

// ═════════════════════════════════════════════════════════════════════
// 2. Custom transform with the default lookup
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_absolute_value_defaults_to_exact() {
    let registry = registry_with_custom_classes();
    let (sql, params) =
        compile_path(&registry, &experiments(), "change__abs", 27, Vendor::PostgreSQL);
    assert_eq!(sql, "ABS(\"experiments\".\"change\") = %s");
    assert_eq!(params, vec![Value::Int(27)]);
}

#[test]
fn test_trailing_transform_equals_explicit_exact() {
    let registry = registry_with_custom_classes();
    let implicit = compile_path(&registry, &experiments(), "change__abs", 27, Vendor::SQLite);
    let explicit =
        compile_path(&registry, &experiments(), "change__abs__exact", 27, Vendor::SQLite);
    assert_eq!(implicit, explicit);
}

// ═════════════════════════════════════════════════════════════════════
// 3. Transform-local lookup bypassing its parent transform
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_absolute_value_less_than_uses_raw_column() {
    let registry = registry_with_custom_classes();
    let (sql, params) =
        compile_path(&registry, &experiments(), "change__abs__lt", 27, Vendor::SQLite);
    assert_eq!(
        sql,
        "\"experiments\".\"change\" < %s AND \"experiments\".\"change\" > -%s"
    );
    assert_eq!(params, vec![Value::Int(27), Value::Int(27)]);
}

#[test]
fn test_transform_local_lookup_not_visible_elsewhere() {
    let registry = registry_with_custom_classes();
    let (sql, _) = compile_path(&registry, &experiments(), "change__lt", 27, Vendor::SQLite);
    assert_eq!(sql, "\"experiments\".\"change\" < %s");
}

// ═════════════════════════════════════════════════════════════════════
// 4. Vendor override replacing a registration
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_mysql_not_equal_override() {
    let mut registry = registry_with_custom_classes();
    registry
        .register_lookup(builtin::FIELD, Arc::new(MySqlNotEqual))
        .unwrap();

    let (mysql_sql, mysql_params) =
        compile_path(&registry, &author(), "name__ne", "Jack", Vendor::MySQL);
    assert_eq!(mysql_sql, "\"author\".\"name\" != %s");
    assert_eq!(mysql_params, vec![Value::from("Jack")]);

    let (sqlite_sql, _) = compile_path(&registry, &author(), "name__ne", "Jack", Vendor::SQLite);
    assert_eq!(sqlite_sql, "\"author\".\"name\" <> %s");
}

#[test]
fn test_same_tree_compiles_per_vendor() {
    let mut registry = LookupRegistry::with_defaults();
    registry
        .register_lookup(builtin::FIELD, Arc::new(MySqlNotEqual))
        .unwrap();
    let lookup: Expression = NameChainResolver::new(&registry)
        .resolve_path(&author(), "name__ne", Some(Expression::value("Jack")))
        .unwrap()
        .into();
    let mysql = compile(&lookup, &ConnectionInfo::new(Vendor::MySQL));
    let oracle = compile(&lookup, &ConnectionInfo::new(Vendor::Oracle));
    assert_eq!(mysql.0, "\"author\".\"name\" != %s");
    assert_eq!(oracle.0, "\"author\".\"name\" <> %s");
}

// ═════════════════════════════════════════════════════════════════════
// 5. Registration errors
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_separator_in_name_rejected() {
    let mut registry = registry_with_custom_classes();
    let before: Vec<String> = registry
        .lookup_names(builtin::FIELD)
        .into_iter()
        .map(str::to_string)
        .collect();

    let err = registry
        .register(
            builtin::FIELD,
            "fo__o",
            RegisteredLookup::Lookup(Arc::new(NotEqual)),
        )
        .unwrap_err();
    assert!(matches!(err, QueryError::RegistrationError(_)));
    assert_eq!(err.kind(), "registration");

    let after: Vec<String> = registry
        .lookup_names(builtin::FIELD)
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_transform_local_role_conflict() {
    let mut registry = registry_with_custom_classes();
    let err = registry
        .register(
            LookupHost::transform_of(&AbsoluteValue),
            "lt",
            RegisteredLookup::Transform(Arc::new(AbsoluteValue)),
        )
        .unwrap_err();
    assert!(matches!(err, QueryError::AmbiguousResolutionError(_)));
}

// ═════════════════════════════════════════════════════════════════════
// 6. Inheritance and override precedence
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_base_registration_visible_to_descendants() {
    let registry = registry_with_custom_classes();
    for ty in [
        builtin::CHAR_FIELD,
        builtin::TEXT_FIELD,
        builtin::BIG_INTEGER_FIELD,
        builtin::DATE_TIME_FIELD,
    ] {
        let entry = registry.resolve(ty, "ne").unwrap();
        assert_eq!(entry.class_name(), "NotEqual");
    }
}

#[test]
fn test_descendant_override_wins() {
    let mut registry = registry_with_custom_classes();
    registry
        .register_lookup(builtin::INTEGER_FIELD, Arc::new(MySqlNotEqual))
        .unwrap();
    assert_eq!(
        registry.resolve(builtin::BIG_INTEGER_FIELD, "ne").unwrap().class_name(),
        "MySQLNotEqual"
    );
    assert_eq!(
        registry.resolve(builtin::CHAR_FIELD, "ne").unwrap().class_name(),
        "NotEqual"
    );
}

#[test]
fn test_custom_field_type_inherits_transforms() {
    let mut registry = registry_with_custom_classes();
    let positive = registry
        .add_field_type("PositiveIntegerField", builtin::INTEGER_FIELD)
        .unwrap();
    let table = Table::new("t").with_field(Field::new("n", positive));
    let (sql, params) = compile_path(&registry, &table, "n__abs__lt", 5, Vendor::SQLite);
    assert_eq!(sql, "\"t\".\"n\" < %s AND \"t\".\"n\" > -%s");
    assert_eq!(params.len(), 2);
}

#[test]
fn test_builtin_date_transforms() {
    let registry = LookupRegistry::with_defaults();
    let (sql, params) = compile_path(&registry, &author(), "born__year__gte", 1990, Vendor::SQLite);
    assert_eq!(
        sql,
        "CAST(STRFTIME('%%Y', \"author\".\"born\") AS INTEGER) >= %s"
    );
    assert_eq!(params, vec![Value::Int(1990)]);
}

#[test]
fn test_builtin_text_lookups() {
    let registry = LookupRegistry::with_defaults();
    let (sql, params) =
        compile_path(&registry, &author(), "bio__icontains", "rust", Vendor::PostgreSQL);
    assert_eq!(sql, "\"author\".\"bio\" ILIKE %s");
    assert_eq!(params, vec![Value::from("%rust%")]);
}

// ═════════════════════════════════════════════════════════════════════
// 7. Placeholder accounting
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_placeholder_count_matches_params() {
    let registry = registry_with_custom_classes();
    let table = author();
    let cases = [
        ("name__ne", Value::from("Jack")),
        ("name__lower__startswith", Value::from("j")),
        ("name__in", Value::List(vec![Value::from("a"), Value::from("b")])),
        ("born__month__range", Value::List(vec![Value::Int(1), Value::Int(6)])),
        ("name__isnull", Value::Bool(true)),
        ("name__regex", Value::from("^J")),
    ];
    for vendor in [Vendor::PostgreSQL, Vendor::MySQL, Vendor::SQLite, Vendor::Oracle] {
        for (path, rhs) in &cases {
            let (sql, params) = compile_path(&registry, &table, path, rhs.clone(), vendor.clone());
            assert_eq!(count_placeholders(&sql), params.len(), "{vendor} {path}: {sql}");
        }
    }
}

#[test]
fn test_params_follow_textual_order() {
    #[derive(Debug)]
    struct Between;

    impl LookupClass for Between {
        fn lookup_name(&self) -> &str {
            "between"
        }

        fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
            let (lhs, mut params) = lookup.process_lhs(compiler);
            let (rhs, rhs_params) = lookup.process_rhs(compiler);
            params.extend(rhs_params);
            (format!("{lhs} BETWEEN {rhs}"), params)
        }
    }

    let shifted = Transform::new(
        Expression::value(Value::Int(100)),
        "abs",
        Arc::new(AbsoluteValueTyped),
    )
    .unwrap();
    let lookup = Lookup::new(
        shifted.into(),
        "between",
        Arc::new(Between),
        Some(Expression::value(Value::Int(200))),
    )
    .unwrap();
    let (sql, params) = compile(&lookup.into(), &ConnectionInfo::new(Vendor::SQLite));
    assert_eq!(sql, "ABS(%s) BETWEEN %s");
    assert_eq!(params, vec![Value::Int(100), Value::Int(200)]);
}

#[derive(Debug)]
struct AbsoluteValueTyped;

impl TransformClass for AbsoluteValueTyped {
    fn lookup_name(&self) -> &str {
        "abs"
    }

    fn function(&self) -> &str {
        "ABS"
    }

    fn output_type(&self) -> Option<FieldTypeId> {
        Some(builtin::INTEGER_FIELD)
    }
}

// ═════════════════════════════════════════════════════════════════════
// 8. Concurrency over a frozen registry
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_concurrent_compilation_over_frozen_registry() {
    let global = Arc::new(GlobalRegistry::new(LookupRegistry::with_defaults()));
    global
        .register_lookup(builtin::FIELD, Arc::new(MySqlNotEqual))
        .unwrap();
    global
        .register_transform(builtin::INTEGER_FIELD, Arc::new(AbsoluteValue))
        .unwrap();
    global
        .register_lookup(
            LookupHost::transform_of(&AbsoluteValue),
            Arc::new(AbsoluteValueLessThan),
        )
        .unwrap();
    global.freeze();

    let handles: Vec<_> = (0..8_i64)
        .map(|i| {
            let global = Arc::clone(&global);
            thread::spawn(move || {
                let vendor = if i % 2 == 0 { Vendor::MySQL } else { Vendor::SQLite };
                let registry = global.read();
                let resolver = NameChainResolver::new(&registry);
                let mut out = Vec::new();
                for _ in 0..50 {
                    let lookup = resolver
                        .resolve_path(&experiments(), "change__abs__lt", Some(Expression::value(i)))
                        .unwrap();
                    out.push(compile(&lookup.into(), &ConnectionInfo::new(vendor.clone())));
                    let lookup = resolver
                        .resolve_path(&author(), "name__ne", Some(Expression::value("Jack")))
                        .unwrap();
                    out.push(compile(&lookup.into(), &ConnectionInfo::new(vendor.clone())));
                }
                (i, out)
            })
        })
        .collect();

    for handle in handles {
        let (i, results) = handle.join().unwrap();
        let ne = if i % 2 == 0 { "!=" } else { "<>" };
        for pair in results.chunks(2) {
            assert_eq!(
                pair[0].0,
                "\"experiments\".\"change\" < %s AND \"experiments\".\"change\" > -%s"
            );
            assert_eq!(pair[0].1, vec![Value::Int(i), Value::Int(i)]);
            assert_eq!(pair[1].0, format!("\"author\".\"name\" {ne} %s"));
        }
    }

    let err = global
        .register_lookup(builtin::FIELD, Arc::new(NotEqual))
        .unwrap_err();
    assert!(matches!(err, QueryError::RegistrationError(_)));
}

#[test]
fn test_late_registration_visible_to_active_readers() {
    let global = Arc::new(GlobalRegistry::new(LookupRegistry::with_defaults()));
    global.freeze();
    global.set_allow_late_registration(true);
    let written = Arc::new(AtomicBool::new(false));
    let start = Arc::new(Barrier::new(5));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let global = Arc::clone(&global);
            let written = Arc::clone(&written);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                let mut misses = 0_usize;
                loop {
                    let was_written = written.load(Ordering::Acquire);
                    let registry = global.read();
                    let resolver = NameChainResolver::new(&registry);
                    let exact = resolver
                        .resolve_path(&author(), "name", Some(Expression::value("Jack")))
                        .unwrap();
                    assert_eq!(exact.lookup_name(), "exact");
                    let ne =
                        resolver.resolve_path(&author(), "name__ne", Some(Expression::value("Jack")));
                    match ne {
                        Ok(lookup) => {
                            assert_eq!(lookup.class().class_name(), "NotEqual");
                            return misses;
                        }
                        Err(err) => {
                            assert!(!was_written, "write not visible after it completed");
                            assert!(matches!(err, QueryError::FieldError(_)));
                            misses += 1;
                        }
                    }
                    drop(registry);
                    thread::yield_now();
                }
            })
        })
        .collect();

    start.wait();
    global
        .register_lookup(builtin::FIELD, Arc::new(NotEqual))
        .unwrap();
    written.store(true, Ordering::Release);

    for reader in readers {
        reader.join().unwrap();
    }
    assert!(global.read().resolve(builtin::CHAR_FIELD, "ne").is_some());
    assert!(global.allows_late_registration());
}

// ═════════════════════════════════════════════════════════════════════
// 9. Connection from settings
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_connection_from_loaded_settings() {
    let settings = settings_loader::from_toml_str(
        r#"
        vendor = "mysql"
        quote_char = "`"
        "#,
    )
    .unwrap();
    let conn = ConnectionInfo::from_settings(&settings);
    let registry = registry_with_custom_classes();
    let lookup = NameChainResolver::new(&registry)
        .resolve_path(&author(), "name__iexact", Some(Expression::value("jack")))
        .unwrap();
    let (sql, params) = compile(&lookup.into(), &conn);
    assert_eq!(sql, "`author`.`name` LIKE %s");
    assert_eq!(params, vec![Value::from("jack")]);
}
