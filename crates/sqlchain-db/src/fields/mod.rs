//! Field declarations consumed from the schema layer.
//!
//! This module provides [`FieldTypeId`], the handle of a node in the field
//! type hierarchy owned by a [`LookupRegistry`](crate::query::LookupRegistry),
//! together with [`Field`] and [`Table`], the minimal view of a model the
//! name-chain resolver needs.

pub mod types;

pub use types::{builtin, Field, FieldTypeId, Table};
