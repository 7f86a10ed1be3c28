//! Transforms: unary functions applied to a left-hand side.
//!
//! A [`Transform`] node wraps an expression in a SQL function (`ABS(x)`,
//! `LOWER(x)`, `EXTRACT(YEAR FROM x)`) and can be followed by further
//! transforms or a terminal lookup in a name chain. Each node carries the
//! field type it behaves as, so the next segment resolves against the right
//! lookup table.

use std::fmt;
use std::sync::Arc;

use sqlchain_core::{QueryError, QueryResult, Vendor};

use crate::fields::{builtin, FieldTypeId};
use crate::query::compiler::SqlCompiler;
use crate::query::expressions::{CompiledSql, Expression};

/// The behavior of a registered transform.
pub trait TransformClass: fmt::Debug + Send + Sync {
    /// The default name this transform is registered under.
    fn lookup_name(&self) -> &str;

    /// Identity of the implementation. Lookups registered directly on a
    /// transform are keyed by this name.
    fn class_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The SQL function applied by the default rendering.
    fn function(&self) -> &str;

    /// The field type of the result. `None` keeps the left-hand side's type.
    fn output_type(&self) -> Option<FieldTypeId> {
        None
    }

    /// Compiles the transform for any vendor. Defaults to `FUNCTION(lhs)`.
    fn as_sql(&self, transform: &Transform, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let (sql, params) = transform.process_lhs(compiler);
        (format!("{}({sql})", self.function()), params)
    }

    /// Compiles the transform for a specific vendor, if it needs special handling.
    fn as_vendor_sql(
        &self,
        _vendor: &Vendor,
        _transform: &Transform,
        _compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        None
    }
}

/// A transform node.
#[derive(Debug, Clone)]
pub struct Transform {
    lhs: Expression,
    lookup_name: String,
    class: Arc<dyn TransformClass>,
    output_type: FieldTypeId,
}

impl Transform {
    /// Builds a transform node over `lhs`.
    ///
    /// The output type is the class's declared type, or the type of `lhs`
    /// when the class declares none.
    pub fn new(
        lhs: Expression,
        lookup_name: impl Into<String>,
        class: Arc<dyn TransformClass>,
    ) -> QueryResult<Self> {
        let lookup_name = lookup_name.into();
        if lhs.is_lookup() {
            return Err(QueryError::LookupConfigurationError(format!(
                "Transform '{lookup_name}' cannot be applied to the result of lookup '{}'",
                lhs.node_name()
            )));
        }
        let output_type = class
            .output_type()
            .or_else(|| lhs.output_type())
            .ok_or_else(|| {
                QueryError::LookupConfigurationError(format!(
                    "Transform '{lookup_name}' needs a column or transform to operate on, got '{}'",
                    lhs.node_name()
                ))
            })?;
        Ok(Self {
            lhs,
            lookup_name,
            class,
            output_type,
        })
    }

    /// The wrapped expression.
    pub const fn lhs(&self) -> &Expression {
        &self.lhs
    }

    /// The name this transform was resolved from.
    pub fn lookup_name(&self) -> &str {
        &self.lookup_name
    }

    /// The behavior object.
    pub fn class(&self) -> &dyn TransformClass {
        self.class.as_ref()
    }

    /// The field type this node behaves as.
    pub const fn output_type(&self) -> FieldTypeId {
        self.output_type
    }

    /// Compiles the wrapped expression through the compiler.
    pub fn process_lhs(&self, compiler: &SqlCompiler<'_>) -> CompiledSql {
        compiler.compile(&self.lhs)
    }

    /// Renders `template` with the compiled left-hand side substituted for `{}`.
    pub fn wrap(&self, compiler: &SqlCompiler<'_>, template: &str) -> CompiledSql {
        let (sql, params) = self.process_lhs(compiler);
        (template.replacen("{}", &sql, 1), params)
    }
}

/// A transform that is a single SQL function call on every vendor.
#[derive(Debug, Clone, Copy)]
pub struct FuncTransform {
    name: &'static str,
    class: &'static str,
    function: &'static str,
    output: Option<FieldTypeId>,
}

impl FuncTransform {
    /// `lower`.
    pub const LOWER: Self = Self::new("lower", "Lower", "LOWER", None);
    /// `upper`.
    pub const UPPER: Self = Self::new("upper", "Upper", "UPPER", None);
    /// `trim`.
    pub const TRIM: Self = Self::new("trim", "Trim", "TRIM", None);
    /// `abs`.
    pub const ABS: Self = Self::new("abs", "Abs", "ABS", None);

    /// Creates a function transform.
    pub const fn new(
        name: &'static str,
        class: &'static str,
        function: &'static str,
        output: Option<FieldTypeId>,
    ) -> Self {
        Self {
            name,
            class,
            function,
            output,
        }
    }
}

impl TransformClass for FuncTransform {
    fn lookup_name(&self) -> &str {
        self.name
    }

    fn class_name(&self) -> &str {
        self.class
    }

    fn function(&self) -> &str {
        self.function
    }

    fn output_type(&self) -> Option<FieldTypeId> {
        self.output
    }
}

/// `length`: character length of a string.
#[derive(Debug, Clone, Copy)]
pub struct Length;

impl TransformClass for Length {
    fn lookup_name(&self) -> &str {
        "length"
    }

    fn class_name(&self) -> &str {
        "Length"
    }

    fn function(&self) -> &str {
        "LENGTH"
    }

    fn output_type(&self) -> Option<FieldTypeId> {
        Some(builtin::INTEGER_FIELD)
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        transform: &Transform,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        // LENGTH counts bytes on MySQL.
        (*vendor == Vendor::MySQL).then(|| transform.wrap(compiler, "CHAR_LENGTH({})"))
    }
}

/// A component of a date or timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// Calendar year.
    Year,
    /// Month of the year, 1-12.
    Month,
    /// Day of the month.
    Day,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Second of the minute.
    Second,
}

impl DatePart {
    /// The registered transform name.
    pub const fn lookup_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// The `EXTRACT` keyword, which doubles as the MySQL function name.
    pub const fn sql_name(self) -> &'static str {
        match self {
            Self::Year => "YEAR",
            Self::Month => "MONTH",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
        }
    }

    const fn class_name(self) -> &'static str {
        match self {
            Self::Year => "ExtractYear",
            Self::Month => "ExtractMonth",
            Self::Day => "ExtractDay",
            Self::Hour => "ExtractHour",
            Self::Minute => "ExtractMinute",
            Self::Second => "ExtractSecond",
        }
    }

    /// The `STRFTIME` directive, with its percent sign escaped.
    const fn strftime(self) -> &'static str {
        match self {
            Self::Year => "%%Y",
            Self::Month => "%%m",
            Self::Day => "%%d",
            Self::Hour => "%%H",
            Self::Minute => "%%M",
            Self::Second => "%%S",
        }
    }
}

/// Extracts one [`DatePart`] as an integer.
#[derive(Debug, Clone, Copy)]
pub struct Extract {
    part: DatePart,
}

impl Extract {
    /// Creates an extract transform for `part`.
    pub const fn new(part: DatePart) -> Self {
        Self { part }
    }

    /// The extracted component.
    pub const fn part(&self) -> DatePart {
        self.part
    }
}

impl TransformClass for Extract {
    fn lookup_name(&self) -> &str {
        self.part.lookup_name()
    }

    fn class_name(&self) -> &str {
        self.part.class_name()
    }

    fn function(&self) -> &str {
        "EXTRACT"
    }

    fn output_type(&self) -> Option<FieldTypeId> {
        Some(builtin::INTEGER_FIELD)
    }

    fn as_sql(&self, transform: &Transform, compiler: &SqlCompiler<'_>) -> CompiledSql {
        let (sql, params) = transform.process_lhs(compiler);
        (format!("EXTRACT({} FROM {sql})", self.part.sql_name()), params)
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        transform: &Transform,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        match vendor {
            Vendor::SQLite => Some(transform.wrap(
                compiler,
                &format!("CAST(STRFTIME('{}', {{}}) AS INTEGER)", self.part.strftime()),
            )),
            Vendor::MySQL => {
                Some(transform.wrap(compiler, &format!("{}({{}})", self.part.sql_name())))
            }
            _ => None,
        }
    }
}

/// `date`: truncates a timestamp to its date.
#[derive(Debug, Clone, Copy)]
pub struct TruncDate;

impl TransformClass for TruncDate {
    fn lookup_name(&self) -> &str {
        "date"
    }

    fn class_name(&self) -> &str {
        "TruncDate"
    }

    fn function(&self) -> &str {
        "CAST"
    }

    fn output_type(&self) -> Option<FieldTypeId> {
        Some(builtin::DATE_FIELD)
    }

    fn as_sql(&self, transform: &Transform, compiler: &SqlCompiler<'_>) -> CompiledSql {
        transform.wrap(compiler, "CAST({} AS DATE)")
    }

    fn as_vendor_sql(
        &self,
        vendor: &Vendor,
        transform: &Transform,
        compiler: &SqlCompiler<'_>,
    ) -> Option<CompiledSql> {
        match vendor {
            Vendor::PostgreSQL => Some(transform.wrap(compiler, "({})::date")),
            Vendor::SQLite | Vendor::MySQL => Some(transform.wrap(compiler, "DATE({})")),
            Vendor::Oracle => Some(transform.wrap(compiler, "TRUNC({})")),
            Vendor::Other(_) => None,
        }
    }
}

/// Built-in transforms grouped by the field type they are registered on.
pub fn builtin_transforms() -> Vec<(FieldTypeId, Arc<dyn TransformClass>)> {
    let mut transforms: Vec<(FieldTypeId, Arc<dyn TransformClass>)> = vec![
        (builtin::CHAR_FIELD, Arc::new(FuncTransform::LOWER)),
        (builtin::CHAR_FIELD, Arc::new(FuncTransform::UPPER)),
        (builtin::CHAR_FIELD, Arc::new(FuncTransform::TRIM)),
        (builtin::CHAR_FIELD, Arc::new(Length)),
        (builtin::INTEGER_FIELD, Arc::new(FuncTransform::ABS)),
        (builtin::FLOAT_FIELD, Arc::new(FuncTransform::ABS)),
    ];
    for part in [DatePart::Year, DatePart::Month, DatePart::Day] {
        transforms.push((builtin::DATE_FIELD, Arc::new(Extract::new(part))));
    }
    for part in [DatePart::Hour, DatePart::Minute, DatePart::Second] {
        transforms.push((builtin::DATE_TIME_FIELD, Arc::new(Extract::new(part))));
    }
    transforms.push((builtin::DATE_TIME_FIELD, Arc::new(TruncDate)));
    transforms
}
