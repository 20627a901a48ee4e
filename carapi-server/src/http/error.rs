//! Query error classification
//!
//! Handlers log the full driver error server-side and hand clients a short
//! sanitized kind instead of the raw message.

use thiserror::Error;

/// Client-safe classification of a failed statement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("constraint violation")]
    Constraint,

    #[error("invalid or out-of-range data")]
    Data,

    #[error("database connection lost")]
    Connection,

    #[error("database error")]
    Other,
}

impl From<&sqlx::Error> for QueryError {
    fn from(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => {
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation()
                {
                    Self::Constraint
                } else if db.code().is_some_and(|c| c.starts_with("22")) {
                    // SQLSTATE class 22: data exception (strict-mode rejections)
                    Self::Data
                } else {
                    Self::Other
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolClosed
            | sqlx::Error::PoolTimedOut => Self::Connection,
            _ => Self::Other,
        }
    }
}

/// Log a failed statement and produce the sanitized client message.
pub fn sanitize(context: &str, err: &sqlx::Error) -> String {
    tracing::error!("{context} failed: {err}");
    QueryError::from(err).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_classify_as_connection() {
        let err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert_eq!(QueryError::from(&err), QueryError::Connection);
    }

    #[test]
    fn unknown_errors_classify_as_other() {
        let err = sqlx::Error::RowNotFound;
        assert_eq!(QueryError::from(&err), QueryError::Other);
    }

    #[test]
    fn sanitized_message_is_non_empty() {
        let err = sqlx::Error::RowNotFound;
        assert!(!sanitize("test statement", &err).is_empty());
    }
}
