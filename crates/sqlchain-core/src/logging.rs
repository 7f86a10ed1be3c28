//! Logging integration for the sqlchain engine.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-compilation
//! spans.

use crate::settings::Settings;
use crate::vendor::Vendor;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise structured JSON. Calling this
/// more than once is harmless: later calls leave the first subscriber in
/// place.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one compilation call.
///
/// # Examples
///
/// ```
/// use sqlchain_core::logging::compile_span;
/// use sqlchain_core::Vendor;
///
/// let span = compile_span(&Vendor::PostgreSQL);
/// let _guard = span.enter();
/// tracing::debug!("compiling");
/// ```
pub fn compile_span(vendor: &Vendor) -> tracing::Span {
    tracing::debug_span!("compile", vendor = %vendor)
}
