//! Uniform response envelope
//!
//! Every car route answers `{success, message, data}` with HTTP 200;
//! callers inspect the `success` boolean, not the status code. `message`
//! is omitted when unset, `data` always serializes (as `null` when absent).

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The `{success, message, data}` body shared by all car routes.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success with a payload and no message (the List shape).
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success with a message and null data (Create/Update/Delete shape).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure with a message and null data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        // Always 200; the body carries the outcome
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn data_envelope_omits_message() {
        let env = Envelope::data(vec![1, 2, 3]);
        assert_eq!(
            to_value(&env).unwrap(),
            json!({"success": true, "data": [1, 2, 3]})
        );
    }

    #[test]
    fn message_envelope_has_null_data() {
        let env: Envelope<()> = Envelope::message("Car successfully created");
        assert_eq!(
            to_value(&env).unwrap(),
            json!({"success": true, "message": "Car successfully created", "data": null})
        );
    }

    #[test]
    fn failure_envelope_has_null_data() {
        let env: Envelope<()> = Envelope::failure("database error");
        assert_eq!(
            to_value(&env).unwrap(),
            json!({"success": false, "message": "database error", "data": null})
        );
    }

    #[tokio::test]
    async fn envelope_responds_200_even_on_failure() {
        let env: Envelope<()> = Envelope::failure("database error");
        let response = env.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
