//! Database layer - connection pool and per-request session handling
//!
//! # Design Principles
//!
//! - Bounded connection pool - one lease per in-flight request
//! - Session settings applied on acquire, not baked into the pool
//! - Release by drop - no manual release calls on any path

pub mod pool;
pub mod session;

pub use pool::create_pool;
pub use session::{configure_session, DbConn};
