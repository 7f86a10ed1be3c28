//! Error types for the sqlchain engine.
//!
//! This module provides the [`QueryError`] enum covering every failure the
//! lookup engine can report: bad registrations, unresolvable name paths,
//! misconfigured lookups, ambiguous transform-local tables, and settings
//! problems. Errors are never retried inside the engine; they describe caller
//! mistakes and propagate to the surrounding query builder unmodified.

use thiserror::Error;

/// The primary error type for the sqlchain engine.
///
/// # Examples
///
/// ```
/// use sqlchain_core::error::QueryError;
///
/// let err = QueryError::RegistrationError("Lookup names may not contain '__'".into());
/// assert_eq!(err.kind(), "registration");
/// assert!(err.to_string().starts_with("Registration error"));
/// ```
#[derive(Error, Debug)]
pub enum QueryError {
    // ── Registry ─────────────────────────────────────────────────────

    /// A lookup or transform could not be registered (invalid name, unknown
    /// field type, or the registry no longer accepts writes).
    #[error("Registration error: {0}")]
    RegistrationError(String),

    /// A transform-local table would hold a Lookup and a Transform under the
    /// same name.
    #[error("Ambiguous resolution: {0}")]
    AmbiguousResolutionError(String),

    // ── Resolution ───────────────────────────────────────────────────

    /// A path segment resolved to neither a Transform nor a Lookup, or the
    /// field keyword itself is unknown.
    #[error("Field error: {0}")]
    FieldError(String),

    /// A Lookup is missing a required right-hand side or was given operands
    /// of the wrong shape.
    #[error("Lookup configuration error: {0}")]
    LookupConfigurationError(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A settings value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred while loading configuration.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl QueryError {
    /// Returns a short, stable code for this error, suitable as a structured
    /// log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RegistrationError(_) => "registration",
            Self::AmbiguousResolutionError(_) => "ambiguous_resolution",
            Self::FieldError(_) => "field",
            Self::LookupConfigurationError(_) => "lookup_configuration",
            Self::ConfigurationError(_) => "configuration",
            Self::IoError(_) => "io",
        }
    }

    /// Returns `true` for errors raised while building or resolving
    /// expressions, as opposed to loading configuration.
    pub const fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::FieldError(_)
                | Self::LookupConfigurationError(_)
                | Self::AmbiguousResolutionError(_)
        )
    }
}

/// A convenience type alias for `Result<T, QueryError>`.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(QueryError::RegistrationError("x".into()).kind(), "registration");
        assert_eq!(
            QueryError::AmbiguousResolutionError("x".into()).kind(),
            "ambiguous_resolution"
        );
        assert_eq!(QueryError::FieldError("x".into()).kind(), "field");
        assert_eq!(
            QueryError::LookupConfigurationError("x".into()).kind(),
            "lookup_configuration"
        );
        assert_eq!(QueryError::ConfigurationError("x".into()).kind(), "configuration");
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::FieldError("Unsupported lookup 'foo'".into());
        assert_eq!(err.to_string(), "Field error: Unsupported lookup 'foo'");
    }

    #[test]
    fn test_resolution_errors() {
        assert!(QueryError::FieldError("x".into()).is_resolution_error());
        assert!(QueryError::LookupConfigurationError("x".into()).is_resolution_error());
        assert!(!QueryError::RegistrationError("x".into()).is_resolution_error());
        assert!(!QueryError::ConfigurationError("x".into()).is_resolution_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: QueryError = io_err.into();
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("file missing"));
    }
}
