//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS (any origin)
//! - Request tracing
//! - Graceful shutdown
//! - Uniform `{success, message, data}` response envelope

pub mod envelope;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use envelope::Envelope;
pub use error::QueryError;
pub use server::{run_server, ServerError};
