//! Per-request session configuration and connection handle
//!
//! Every request leases exactly one pooled connection. The lease lives in
//! request extensions as a [`DbConn`], and the underlying connection goes
//! back to the pool when the last clone drops at the end of the request.

use std::sync::Arc;

use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlConnection};
use tokio::sync::{Mutex, MutexGuard};

/// Apply the session-level settings every leased connection must carry:
/// strict SQL validation and a fixed UTC-8 timezone.
///
/// Parameter binding needs no session flag here; all statements go through
/// prepared-statement binds.
pub async fn configure_session(conn: &mut MySqlConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SET SESSION sql_mode = 'TRADITIONAL'")
        .execute(&mut *conn)
        .await?;
    sqlx::query("SET time_zone = '-8:00'")
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Request-scoped handle to the leased connection.
///
/// Cloneable so it can live in request extensions; the pooled connection is
/// released by drop once the request/response cycle completes, on every exit
/// path.
#[derive(Clone)]
pub struct DbConn {
    inner: Arc<Mutex<PoolConnection<MySql>>>,
}

impl DbConn {
    pub fn new(conn: PoolConnection<MySql>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(conn)),
        }
    }

    /// Lock the connection for a statement. Handlers run one statement at a
    /// time, so contention only exists if a handler clones the extension.
    pub async fn lock(&self) -> MutexGuard<'_, PoolConnection<MySql>> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn session_settings_apply() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let mut conn = pool.acquire().await.expect("acquire failed");
        configure_session(&mut conn).await.expect("configure failed");

        let (mode, tz): (String, String) =
            sqlx::query_as("SELECT @@SESSION.sql_mode, @@SESSION.time_zone")
                .fetch_one(&mut *conn)
                .await
                .expect("query failed");

        // TRADITIONAL expands to its component flags server-side
        assert!(mode.contains("STRICT_TRANS_TABLES"), "sql_mode was {mode}");
        assert_eq!(tz, "-08:00");
    }
}
