//! Request middleware
//!
//! `db_session` wraps every route in a scoped connection lease; `log_mutation`
//! is the diagnostic layer on the mutating routes only.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::db::{configure_session, DbConn};
use crate::http::envelope::Envelope;
use crate::http::server::AppState;

/// Lease one pooled connection for the lifetime of the request.
///
/// Acquires, applies the session settings, parks the handle in request
/// extensions, and forwards. The connection returns to the pool by drop when
/// the request/response cycle ends, on success, handler error, or panic
/// alike. Acquisition or configuration failure short-circuits with a 503
/// envelope; no handler runs without a configured connection.
pub async fn db_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut conn = match state.pool.acquire().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!("connection acquisition failed: {err}");
            return unavailable();
        }
    };

    if let Err(err) = configure_session(&mut conn).await {
        tracing::error!("session configuration failed: {err}");
        // conn drops here and goes back to the pool
        return unavailable();
    }

    req.extensions_mut().insert(DbConn::new(conn));
    next.run(req).await
}

fn unavailable() -> Response {
    let body: Envelope<()> =
        Envelope::failure("service unavailable: could not acquire a database connection");
    (StatusCode::SERVICE_UNAVAILABLE, axum::Json(body)).into_response()
}

/// Fixed diagnostic on the mutating routes (everything registered after
/// List). Forwards the chain untouched; errors propagate normally.
pub async fn log_mutation(req: Request<Body>, next: Next) -> Response {
    tracing::debug!(method = %req.method(), path = %req.uri().path(), "mutation route hit");
    next.run(req).await
}
