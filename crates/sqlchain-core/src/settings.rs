//! Settings for the sqlchain engine.
//!
//! This module provides the [`Settings`] struct, which holds engine
//! configuration, and [`LazySettings`], a globally-accessible, lazily
//! initialized settings instance configured once at startup.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

/// The complete set of engine settings.
///
/// # Examples
///
/// ```
/// use sqlchain_core::{Settings, Vendor};
///
/// let settings = Settings::default();
/// assert_eq!(settings.vendor, Vendor::SQLite);
/// assert!(!settings.allow_late_registration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // ── Connection ───────────────────────────────────────────────────

    /// The connection alias reported in logs (e.g. "default").
    pub connection_alias: String,
    /// The SQL dialect queries are compiled for.
    pub vendor: Vendor,
    /// The character used to quote table and column names.
    pub quote_char: char,

    // ── Registry ─────────────────────────────────────────────────────

    /// Whether the global lookup registry still accepts registrations after
    /// it has been frozen. Late writes are serialized through its lock.
    pub allow_late_registration: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty log output instead of JSON).
    pub debug: bool,
    /// The log filter (e.g. "info", "sqlchain_db=trace").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection_alias: "default".to_string(),
            vendor: Vendor::default(),
            quote_char: '"',
            allow_late_registration: false,
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup, then use
/// [`get`](LazySettings::get) to access the settings.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns the configured settings, or the defaults if `configure` was
    /// never called.
    pub fn get(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
