//! # sqlchain-db
//!
//! The lookup engine. Resolves name paths such as `change__abs__lt` against a
//! registry of lookups and transforms, builds an expression tree, and
//! compiles it to a parameterized SQL fragment for the connection's vendor.
//!
//! ## Architecture
//!
//! Resolution and compilation are separate phases. A
//! [`NameChainResolver`](query::NameChainResolver) reads the
//! [`LookupRegistry`](query::LookupRegistry) to peel each path segment off as
//! a transform or the terminal lookup, producing an immutable
//! [`Expression`](query::Expression) tree. The
//! [`SqlCompiler`](query::SqlCompiler) then walks the tree, asking each node
//! for its vendor-specific rendering before falling back to the generic one.
//! SQL is never executed here.
//!
//! ## Module Overview
//!
//! - [`fields`] - Field type handles, fields and tables
//! - [`value`] - The backend-agnostic [`Value`](value::Value) enum
//! - [`connection`] - What the compiler needs from a database connection
//! - [`query`] - Registry, resolver, expression nodes, and compilation

// These clippy lints are intentionally allowed for the lookup engine crate:
// - result_large_err: QueryError is the engine error type and is used consistently
// - format_push_string: format! with push_str is clearer than write! for SQL generation
// - doc_markdown: backtick requirements for documentation items are too strict
// - needless_pass_by_value: resolver entry points take ownership of operands
// - missing_const_for_fn: accessors may grow non-const bodies
#![allow(clippy::result_large_err)]
#![allow(clippy::format_push_string)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::match_same_arms)]
// literal_string_with_formatting_args: SQL templates use `{}` for the wrapped operand
#![allow(clippy::literal_string_with_formatting_args)]
// significant_drop_tightening: registry read guards are held for a whole resolution
#![allow(clippy::significant_drop_tightening)]

pub mod connection;
pub mod fields;
pub mod query;
pub mod value;

pub use connection::{Connection, ConnectionInfo};
pub use fields::{Field, FieldTypeId, Table};
pub use query::{compile, resolve_path, Expression, Lookup, LookupRegistry, SqlCompiler, LOOKUPS};
pub use value::Value;
