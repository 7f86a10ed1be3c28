//! # sqlchain-core
//!
//! Core types shared by every sqlchain crate. This crate knows nothing about
//! expressions or registries; it provides the foundation the expression
//! engine builds on.
//!
//! ## Modules
//!
//! - [`error`] - The [`QueryError`] taxonomy and the [`QueryResult`] alias
//! - [`vendor`] - The [`Vendor`] identifier supplied by a database connection
//! - [`settings`] - Engine settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod vendor;

// Re-export the most commonly used types at the crate root.
pub use error::{QueryError, QueryResult};
pub use settings::{Settings, SETTINGS};
pub use vendor::Vendor;
