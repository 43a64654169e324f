//! Coercion rules for the custom scalars exposed by the gateway.
//!
//! Each scalar implements three hooks: result coercion (`serialize`), variable
//! coercion (`parse_value`) and inline literal coercion (`parse_literal`).
//! `Map`, `JSON`, `Object` and `Long` only accept values through variables,
//! their literal hook always fails.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod checks;
mod error;
mod kind;
mod registry;
pub mod scalars;

pub use async_graphql_value::{ConstValue, Value};
pub use error::{CoercionError, CoercionResult};
pub use kind::ValueKind;
pub use registry::ScalarRegistry;
pub use scalars::CustomScalar;
