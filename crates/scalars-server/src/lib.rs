//! HTTP gateway serving the custom scalar demo schema.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod config;
mod error;
pub mod schema;
mod server;

pub use config::*;
pub use error::{Error, Result};
pub use server::{router, serve, ServerConfig};
