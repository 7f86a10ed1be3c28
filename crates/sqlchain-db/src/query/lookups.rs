//! Lookups: terminal binary predicates.
//!
//! A [`Lookup`] node compares a (possibly transformed) left-hand side with a
//! right-hand side value. What the comparison compiles to is decided by its
//! [`LookupClass`], the registered behavior object that the name-chain
//! resolver found for the trailing path segment.
//!
//! # Writing a lookup
//!
//! ```
//! use sqlchain_core::Vendor;
//! use sqlchain_db::query::compiler::SqlCompiler;
//! use sqlchain_db::query::expressions::CompiledSql;
//! use sqlchain_db::query::lookups::{Lookup, LookupClass};
//!
//! #[derive(Debug)]
//! struct NotEqual;
//!
//! impl LookupClass for NotEqual {
//!     fn lookup_name(&self) -> &str {
//!         "ne"
//!     }
//!
//!     fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
//!         lookup.as_binary("<>", compiler)
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use sqlchain_core::{QueryError, QueryResult, Vendor};

use crate::query::compiler::SqlCompiler;
use crate::query::expressions::{CompiledSql, Expression};
use crate::value::Value;

/// Oracle rejects `IN` lists longer than this.
pub const ORACLE_MAX_IN_LIST_SIZE: usize = 1000;

/// The behavior of a registered lookup.
///
/// Implementations decide their own SQL. The generic rendering lives in
/// [`as_sql`](LookupClass::as_sql); per-vendor renderings are returned from
/// [`as_vendor_sql`](LookupClass::as_vendor_sql), where `None` means "use the
/// generic one".
pub trait LookupClass: fmt::Debug + Send + Sync {
    /// The default name this lookup is registered under.
    fn lookup_name(&self) -> &str;

    /// A name identifying the implementation, used in logs.
    fn class_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether a right-hand side must be supplied.
    fn requires_rhs(&self) -> bool {
        true
    }

    /// Checks the shape of the right-hand side when the lookup is built.
    fn validate_rhs(&self, _rhs: Option<&Expression>) -> QueryResult<()> {
        Ok(())
    }

    /// Compiles the lookup for any vendor.
    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql;

    /// Compiles the lookup for a specific vendor, if it needs special handling.
    fn as_vendor_sql(
        &self,
        _vendor: &Vendor,
        _lookup: &Lookup,
        _compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        None
    }
}

/// A lookup node: `lhs OP rhs`, tagged with the name it was resolved from.
#[derive(Debug, Clone)]
pub struct Lookup {
    lhs: Expression,
    rhs: Option<Expression>,
    lookup_name: String,
    class: Arc<dyn LookupClass>,
}

impl Lookup {
    /// Builds a lookup node.
    ///
    /// Fails with [`QueryError::LookupConfigurationError`] when `lhs` is itself
    /// a lookup, when a required right-hand side is missing, or when the class
    /// rejects the right-hand side's shape.
    pub fn new(
        lhs: Expression,
        lookup_name: impl Into<String>,
        class: Arc<dyn LookupClass>,
        rhs: Option<Expression>,
    ) -> QueryResult<Self> {
        let lookup_name = lookup_name.into();
        if lhs.is_lookup() {
            return Err(QueryError::LookupConfigurationError(format!(
                "Lookup '{lookup_name}' cannot be applied to the result of lookup '{}'",
                lhs.node_name()
            )));
        }
        if rhs.is_none() && class.requires_rhs() {
            return Err(QueryError::LookupConfigurationError(format!(
                "Lookup '{lookup_name}' requires a right-hand side value"
            )));
        }
        class.validate_rhs(rhs.as_ref())?;
        Ok(Self {
            lhs,
            rhs,
            lookup_name,
            class,
        })
    }

    /// The left-hand side.
    pub const fn lhs(&self) -> &Expression {
        &self.lhs
    }

    /// The right-hand side, if any.
    pub const fn rhs(&self) -> Option<&Expression> {
        self.rhs.as_ref()
    }

    /// The right-hand side when it is a plain literal.
    pub const fn rhs_value(&self) -> Option<&Value> {
        match &self.rhs {
            Some(Expression::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// The name this lookup was resolved from.
    pub fn lookup_name(&self) -> &str {
        &self.lookup_name
    }

    /// The behavior object.
    pub fn class(&self) -> &dyn LookupClass {
        self.class.as_ref()
    }

    /// Compiles the left-hand side through the compiler.
    pub fn process_lhs(&self, compiler: &SqlCompiler<'_>) -> CompiledSql {
        compiler.compile(&self.lhs)
    }

    /// Compiles the right-hand side through the compiler. Literals become
    /// placeholders; a missing right-hand side compiles to nothing.
    pub fn process_rhs(&self, compiler: &SqlCompiler<'_>) -> CompiledSql {
        self.rhs
            .as_ref()
            .map_or_else(|| (String::new(), Vec::new()), |rhs| compiler.compile(rhs))
    }

    /// Renders `lhs OPERATOR rhs` with parameters in textual order.
    pub fn as_binary(&self, operator: &str, compiler: &SqlCompiler<'_>) -> CompiledSql {
        binary_sql(self.process_lhs(compiler), operator, self.process_rhs(compiler))
    }
}

/// Joins two compiled operands around an operator, concatenating parameters
/// left to right.
pub fn binary_sql(lhs: CompiledSql, operator: &str, rhs: CompiledSql) -> CompiledSql {
    let (lhs_sql, mut params) = lhs;
    let (rhs_sql, rhs_params) = rhs;
    params.extend(rhs_params);
    (format!("{lhs_sql} {operator} {rhs_sql}"), params)
}

fn rhs_error(lookup_name: &str, message: &str) -> QueryError {
    QueryError::LookupConfigurationError(format!("Lookup '{lookup_name}' {message}"))
}

/// Rejects NULL and list literals.
fn require_scalar(lookup_name: &str, rhs: Option<&Expression>) -> QueryResult<()> {
    match rhs {
        Some(Expression::Value(Value::Null)) => Err(rhs_error(
            lookup_name,
            "cannot compare against NULL; use 'isnull' instead",
        )),
        Some(Expression::Value(Value::List(_))) => {
            Err(rhs_error(lookup_name, "does not accept a list of values"))
        }
        _ => Ok(()),
    }
}

fn is_null_rhs(lookup: &Lookup) -> bool {
    matches!(lookup.rhs_value(), Some(Value::Null))
}

fn is_null_sql(lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
    let (sql, params) = lookup.process_lhs(compiler);
    (format!("{sql} IS NULL"), params)
}

// ── exact / iexact ──────────────────────────────────────────────────────

/// `exact`: equality. A NULL right-hand side compiles to `IS NULL`.
#[derive(Debug, Clone, Copy)]
pub struct Exact;

impl LookupClass for Exact {
    fn lookup_name(&self) -> &str {
        "exact"
    }

    fn class_name(&self) -> &str {
        "Exact"
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        match rhs {
            Some(Expression::Value(Value::List(_))) => {
                Err(rhs_error("exact", "does not accept a list of values; use 'in'"))
            }
            _ => Ok(()),
        }
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        if is_null_rhs(lookup) {
            return is_null_sql(lookup, compiler);
        }
        lookup.as_binary("=", compiler)
    }
}

/// `iexact`: case-insensitive equality.
#[derive(Debug, Clone, Copy)]
pub struct IExact;

impl LookupClass for IExact {
    fn lookup_name(&self) -> &str {
        "iexact"
    }

    fn class_name(&self) -> &str {
        "IExact"
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        match rhs {
            Some(Expression::Value(Value::List(_))) => {
                Err(rhs_error("iexact", "does not accept a list of values"))
            }
            _ => Ok(()),
        }
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        if is_null_rhs(lookup) {
            return is_null_sql(lookup, compiler);
        }
        let (lhs_sql, mut params) = lookup.process_lhs(compiler);
        let (rhs_sql, rhs_params) = lookup.process_rhs(compiler);
        params.extend(rhs_params);
        (format!("UPPER({lhs_sql}) = UPPER({rhs_sql})"), params)
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        // MySQL collations compare case-insensitively already.
        if *vendor != Vendor::MySQL || is_null_rhs(lookup) {
            return None;
        }
        match lookup.rhs_value() {
            Some(Value::String(text)) => {
                let (lhs_sql, mut params) = lookup.process_lhs(compiler);
                params.push(Value::String(escape_like(text)));
                Some((format!("{lhs_sql} LIKE %s"), params))
            }
            _ => Some(lookup.as_binary("LIKE", compiler)),
        }
    }
}

// ── gt / gte / lt / lte ─────────────────────────────────────────────────

/// An ordering comparison rendered as `lhs OPERATOR rhs` on every vendor.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    name: &'static str,
    class: &'static str,
    operator: &'static str,
}

impl Comparison {
    /// `gt`.
    pub const GREATER_THAN: Self = Self::new("gt", "GreaterThan", ">");
    /// `gte`.
    pub const GREATER_THAN_OR_EQUAL: Self = Self::new("gte", "GreaterThanOrEqual", ">=");
    /// `lt`.
    pub const LESS_THAN: Self = Self::new("lt", "LessThan", "<");
    /// `lte`.
    pub const LESS_THAN_OR_EQUAL: Self = Self::new("lte", "LessThanOrEqual", "<=");

    /// Creates a comparison lookup.
    pub const fn new(name: &'static str, class: &'static str, operator: &'static str) -> Self {
        Self {
            name,
            class,
            operator,
        }
    }

    /// The SQL operator.
    pub const fn operator(&self) -> &'static str {
        self.operator
    }
}

impl LookupClass for Comparison {
    fn lookup_name(&self) -> &str {
        self.name
    }

    fn class_name(&self) -> &str {
        self.class
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        require_scalar(self.name, rhs)
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        lookup.as_binary(self.operator, compiler)
    }
}

// ── contains / startswith / endswith ────────────────────────────────────

/// Where a `LIKE` pattern anchors its search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `%text%`
    Contains,
    /// `text%`
    StartsWith,
    /// `%text`
    EndsWith,
}

impl PatternKind {
    /// Wraps already-escaped search text in wildcards.
    pub fn wrap(self, text: &str) -> String {
        match self {
            Self::Contains => format!("%{text}%"),
            Self::StartsWith => format!("{text}%"),
            Self::EndsWith => format!("%{text}"),
        }
    }

    /// Wraps a compiled SQL operand in wildcards using `||` concatenation.
    fn concat(self, sql: &str) -> String {
        match self {
            Self::Contains => format!("'%%' || {sql} || '%%'"),
            Self::StartsWith => format!("{sql} || '%%'"),
            Self::EndsWith => format!("'%%' || {sql}"),
        }
    }

    /// Wraps a compiled SQL operand in wildcards using `CONCAT()`.
    fn concat_function(self, sql: &str) -> String {
        match self {
            Self::Contains => format!("CONCAT('%%', {sql}, '%%')"),
            Self::StartsWith => format!("CONCAT({sql}, '%%')"),
            Self::EndsWith => format!("CONCAT('%%', {sql})"),
        }
    }
}

/// Escapes `LIKE` metacharacters with a backslash.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes `LIKE` metacharacters inside a compiled SQL operand at query time.
///
/// MySQL treats a backslash in a string literal as an escape, so its literals
/// double it.
fn escape_like_sql(sql: &str, vendor: &Vendor) -> String {
    let backslash = if *vendor == Vendor::MySQL { "\\\\" } else { "\\" };
    format!(
        "REPLACE(REPLACE(REPLACE({sql}, '{backslash}', '{backslash}{backslash}'), \
         '%%', '{backslash}%%'), '_', '{backslash}_')"
    )
}

/// A `LIKE`-based pattern lookup.
///
/// Literal search text is escaped and wrapped into the parameter itself;
/// expression operands are escaped with `REPLACE` and get their wildcards
/// concatenated in SQL. Every rendering treats `\` as the escape character.
#[derive(Debug, Clone, Copy)]
pub struct PatternLookup {
    name: &'static str,
    class: &'static str,
    kind: PatternKind,
    case_insensitive: bool,
}

impl PatternLookup {
    /// `contains`.
    pub const CONTAINS: Self = Self::new("contains", "Contains", PatternKind::Contains, false);
    /// `icontains`.
    pub const ICONTAINS: Self = Self::new("icontains", "IContains", PatternKind::Contains, true);
    /// `startswith`.
    pub const STARTS_WITH: Self =
        Self::new("startswith", "StartsWith", PatternKind::StartsWith, false);
    /// `istartswith`.
    pub const ISTARTS_WITH: Self =
        Self::new("istartswith", "IStartsWith", PatternKind::StartsWith, true);
    /// `endswith`.
    pub const ENDS_WITH: Self = Self::new("endswith", "EndsWith", PatternKind::EndsWith, false);
    /// `iendswith`.
    pub const IENDS_WITH: Self = Self::new("iendswith", "IEndsWith", PatternKind::EndsWith, true);

    /// Creates a pattern lookup.
    pub const fn new(
        name: &'static str,
        class: &'static str,
        kind: PatternKind,
        case_insensitive: bool,
    ) -> Self {
        Self {
            name,
            class,
            kind,
            case_insensitive,
        }
    }

    fn pattern_rhs(
        &self,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
        concat_function: bool,
    ) -> CompiledSql {
        if let Some(value) = lookup.rhs_value() {
            let text = value.as_str().map_or_else(|| value.to_string(), str::to_string);
            let pattern = self.kind.wrap(&escape_like(&text));
            return ("%s".to_string(), vec![Value::String(pattern)]);
        }
        let (sql, params) = lookup.process_rhs(compiler);
        let sql = escape_like_sql(&sql, compiler.vendor());
        let wrapped = if concat_function {
            self.kind.concat_function(&sql)
        } else {
            self.kind.concat(&sql)
        };
        (wrapped, params)
    }

    fn render(
        &self,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
        concat_function: bool,
        template: impl Fn(&str, &str) -> String,
    ) -> CompiledSql {
        let (lhs_sql, mut params) = lookup.process_lhs(compiler);
        let (rhs_sql, rhs_params) = self.pattern_rhs(lookup, compiler, concat_function);
        params.extend(rhs_params);
        (template(&lhs_sql, &rhs_sql), params)
    }
}

impl LookupClass for PatternLookup {
    fn lookup_name(&self) -> &str {
        self.name
    }

    fn class_name(&self) -> &str {
        self.class
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        require_scalar(self.name, rhs)
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        if self.case_insensitive {
            self.render(lookup, compiler, false, |lhs, rhs| {
                format!("UPPER({lhs}) LIKE UPPER({rhs}) ESCAPE '\\'")
            })
        } else {
            self.render(lookup, compiler, false, |lhs, rhs| {
                format!("{lhs} LIKE {rhs} ESCAPE '\\'")
            })
        }
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        // PostgreSQL and MySQL escape with a backslash by default.
        match vendor {
            Vendor::PostgreSQL => {
                let operator = if self.case_insensitive { "ILIKE" } else { "LIKE" };
                Some(self.render(lookup, compiler, false, |lhs, rhs| {
                    format!("{lhs} {operator} {rhs}")
                }))
            }
            Vendor::SQLite => Some(self.render(lookup, compiler, false, |lhs, rhs| {
                format!("{lhs} LIKE {rhs} ESCAPE '\\'")
            })),
            Vendor::MySQL => {
                let operator = if self.case_insensitive { "LIKE" } else { "LIKE BINARY" };
                Some(self.render(lookup, compiler, true, |lhs, rhs| {
                    format!("{lhs} {operator} {rhs}")
                }))
            }
            _ => None,
        }
    }
}

// ── in / range / isnull ─────────────────────────────────────────────────

/// `in`: membership in a non-empty list or in the result of an expression.
#[derive(Debug, Clone, Copy)]
pub struct In;

impl LookupClass for In {
    fn lookup_name(&self) -> &str {
        "in"
    }

    fn class_name(&self) -> &str {
        "In"
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        match rhs {
            Some(Expression::Value(Value::List(items))) if items.is_empty() => {
                Err(rhs_error("in", "requires at least one value"))
            }
            Some(Expression::Value(Value::List(items)))
                if items.iter().any(|item| matches!(item, Value::List(_))) =>
            {
                Err(rhs_error("in", "does not accept nested lists"))
            }
            Some(Expression::Value(Value::List(_))) | None => Ok(()),
            Some(Expression::Value(other)) => Err(rhs_error(
                "in",
                &format!("expects a list of values, got {}", other.type_name()),
            )),
            Some(_) => Ok(()),
        }
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let (lhs_sql, mut params) = lookup.process_lhs(compiler);
        let (rhs_sql, rhs_params) = lookup.process_rhs(compiler);
        params.extend(rhs_params);
        // List literals compile to their own parenthesized group.
        let rhs_sql = match lookup.rhs_value() {
            Some(Value::List(_)) => rhs_sql,
            _ => format!("({rhs_sql})"),
        };
        (format!("{lhs_sql} IN {rhs_sql}"), params)
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        let items = lookup.rhs_value().and_then(Value::as_list)?;
        if *vendor != Vendor::Oracle || items.len() <= ORACLE_MAX_IN_LIST_SIZE {
            return None;
        }
        let (lhs_sql, lhs_params) = lookup.process_lhs(compiler);
        let mut clauses = Vec::new();
        let mut params = Vec::with_capacity(items.len());
        for chunk in items.chunks(ORACLE_MAX_IN_LIST_SIZE) {
            let placeholders = vec!["%s"; chunk.len()].join(", ");
            clauses.push(format!("{lhs_sql} IN ({placeholders})"));
            params.extend(lhs_params.iter().cloned());
            params.extend(chunk.iter().cloned());
        }
        Some((format!("({})", clauses.join(" OR ")), params))
    }
}

/// `range`: `lhs BETWEEN low AND high`.
#[derive(Debug, Clone, Copy)]
pub struct Range;

impl LookupClass for Range {
    fn lookup_name(&self) -> &str {
        "range"
    }

    fn class_name(&self) -> &str {
        "Range"
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        match rhs {
            Some(Expression::Value(Value::List(items))) if items.len() == 2 => Ok(()),
            Some(Expression::Value(Value::List(items))) => Err(rhs_error(
                "range",
                &format!("expects exactly two values, got {}", items.len()),
            )),
            _ => Err(rhs_error("range", "expects a two-element list")),
        }
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let (lhs_sql, mut params) = lookup.process_lhs(compiler);
        if let Some(bounds) = lookup.rhs_value().and_then(Value::as_list) {
            params.extend(bounds.iter().cloned());
        }
        (format!("{lhs_sql} BETWEEN %s AND %s"), params)
    }
}

/// `isnull`: `IS NULL` for `true`, `IS NOT NULL` for `false`.
#[derive(Debug, Clone, Copy)]
pub struct IsNull;

impl LookupClass for IsNull {
    fn lookup_name(&self) -> &str {
        "isnull"
    }

    fn class_name(&self) -> &str {
        "IsNull"
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        match rhs {
            Some(Expression::Value(Value::Bool(_))) => Ok(()),
            _ => Err(rhs_error("isnull", "only accepts true or false")),
        }
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let (sql, params) = lookup.process_lhs(compiler);
        if lookup.rhs_value().and_then(Value::as_bool) == Some(false) {
            (format!("{sql} IS NOT NULL"), params)
        } else {
            (format!("{sql} IS NULL"), params)
        }
    }
}

// ── regex / iregex ──────────────────────────────────────────────────────

/// Regular expression match.
#[derive(Debug, Clone, Copy)]
pub struct Regex {
    case_insensitive: bool,
}

impl Regex {
    /// `regex`.
    pub const REGEX: Self = Self {
        case_insensitive: false,
    };
    /// `iregex`.
    pub const IREGEX: Self = Self {
        case_insensitive: true,
    };
}

impl LookupClass for Regex {
    fn lookup_name(&self) -> &str {
        if self.case_insensitive {
            "iregex"
        } else {
            "regex"
        }
    }

    fn class_name(&self) -> &str {
        if self.case_insensitive {
            "IRegex"
        } else {
            "Regex"
        }
    }

    fn validate_rhs(&self, rhs: Option<&Expression>) -> QueryResult<()> {
        require_scalar(self.lookup_name(), rhs)
    }

    fn as_sql(&self, lookup: &Lookup, compiler: &SqlCompiler<'_>) -> CompiledSql {
        if self.case_insensitive {
            let (lhs_sql, mut params) = lookup.process_lhs(compiler);
            let (rhs_sql, rhs_params) = lookup.process_rhs(compiler);
            params.extend(rhs_params);
            (format!("{lhs_sql} REGEXP '(?i)' || {rhs_sql}"), params)
        } else {
            lookup.as_binary("REGEXP", compiler)
        }
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        lookup: &Lookup,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        match vendor {
            Vendor::PostgreSQL => {
                let operator = if self.case_insensitive { "~*" } else { "~" };
                Some(lookup.as_binary(operator, compiler))
            }
            Vendor::MySQL => {
                let operator = if self.case_insensitive { "REGEXP" } else { "REGEXP BINARY" };
                Some(lookup.as_binary(operator, compiler))
            }
            Vendor::Oracle => {
                let (lhs_sql, mut params) = lookup.process_lhs(compiler);
                let (rhs_sql, rhs_params) = lookup.process_rhs(compiler);
                params.extend(rhs_params);
                let flag = if self.case_insensitive { 'i' } else { 'c' };
                Some((format!("REGEXP_LIKE({lhs_sql}, {rhs_sql}, '{flag}')"), params))
            }
            _ => None,
        }
    }
}

/// Returns every built-in lookup, in registration order.
pub fn builtin_lookups() -> Vec<Arc<dyn LookupClass>> {
    vec![
        Arc::new(Exact),
        Arc::new(IExact),
        Arc::new(Comparison::GREATER_THAN),
        Arc::new(Comparison::GREATER_THAN_OR_EQUAL),
        Arc::new(Comparison::LESS_THAN),
        Arc::new(Comparison::LESS_THAN_OR_EQUAL),
        Arc::new(PatternLookup::CONTAINS),
        Arc::new(PatternLookup::ICONTAINS),
        Arc::new(PatternLookup::STARTS_WITH),
        Arc::new(PatternLookup::ISTARTS_WITH),
        Arc::new(PatternLookup::ENDS_WITH),
        Arc::new(PatternLookup::IENDS_WITH),
        Arc::new(In),
        Arc::new(Range),
        Arc::new(IsNull),
        Arc::new(Regex::REGEX),
        Arc::new(Regex::IREGEX),
    ]
}
