//! Lookup resolution and compilation.
//!
//! This module contains the complete lookup pipeline:
//!
//! - [`registry`] - Field type hierarchy and lookup/transform tables
//! - [`resolver`] - Turns `field__transform__lookup` paths into expression trees
//! - [`expressions`] - Expression nodes: columns, values, lookups, transforms
//! - [`lookups`] - The [`LookupClass`] trait and built-in lookups
//! - [`transforms`] - The [`TransformClass`] trait and built-in transforms
//! - [`compiler`] - Vendor-dispatching SQL compilation

pub mod compiler;
pub mod expressions;
pub mod lookups;
pub mod registry;
pub mod resolver;
pub mod transforms;

pub use compiler::{compile, count_placeholders, render_placeholders, SqlCompiler, PLACEHOLDER};
pub use expressions::{Col, CompiledSql, Expression};
pub use lookups::{Lookup, LookupClass};
pub use registry::{
    GlobalRegistry, LookupHost, LookupRegistry, RegisteredLookup, LOOKUPS, LOOKUP_SEP,
};
pub use resolver::{resolve_path, NameChainResolver, DEFAULT_LOOKUP};
pub use transforms::{Transform, TransformClass};
