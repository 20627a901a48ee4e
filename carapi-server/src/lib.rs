//! carapi-server: HTTP CRUD service for the `car` table
//!
//! Exposes list/create/update/delete over a pooled MySQL connection.
//! Each request leases one connection for its whole lifetime via the
//! session middleware in [`http::middleware`].

pub mod config;
pub mod db;
pub mod http;

pub use config::{DbConfig, ServerConfig};
pub use db::create_pool;
pub use http::{run_server, ServerError};
