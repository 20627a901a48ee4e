//! Car endpoints
//!
//! Each handler runs exactly one parameterized statement on the request's
//! leased connection and answers the uniform envelope with HTTP 200. A
//! database error never escapes a handler: it is logged in full and
//! translated to `{success:false, message, data:null}`.

use axum::extract::Path;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbConn;
use crate::http::envelope::Envelope;
use crate::http::error::sanitize;
use crate::http::middleware::log_mutation;
use crate::http::server::AppState;

/// A row of the `car` table.
///
/// Columns other than `id` are nullable from the service's perspective;
/// strict mode at the session level is the only write-side gate.
#[derive(Debug, Serialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

/// Create/Update request body. Absent fields bind as SQL NULL; presence and
/// type enforcement is left to the database.
#[derive(Debug, Deserialize)]
pub struct CarPayload {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
}

/// GET /car - list every row
async fn list_cars(Extension(db): Extension<DbConn>) -> Envelope<Vec<Car>> {
    let mut conn = db.lock().await;
    match sqlx::query_as::<_, Car>("SELECT * FROM car")
        .fetch_all(&mut **conn)
        .await
    {
        Ok(cars) => Envelope::data(cars),
        Err(err) => Envelope::failure(sanitize("SELECT car", &err)),
    }
}

/// POST /car - insert one row; the assigned id is not echoed back
async fn create_car(
    Extension(db): Extension<DbConn>,
    Json(payload): Json<CarPayload>,
) -> Envelope<()> {
    let mut conn = db.lock().await;
    let result = sqlx::query("INSERT INTO car (make, model, year) VALUES (?, ?, ?)")
        .bind(&payload.make)
        .bind(&payload.model)
        .bind(payload.year)
        .execute(&mut **conn)
        .await;

    match result {
        Ok(_) => Envelope::message("Car successfully created"),
        Err(err) => Envelope::failure(sanitize("INSERT car", &err)),
    }
}

/// PUT /car/{id} - update in place
///
/// The id is bound as-is from the path, and success is reported whether or
/// not any row matched.
async fn update_car(
    Extension(db): Extension<DbConn>,
    Path(id): Path<String>,
    Json(payload): Json<CarPayload>,
) -> Envelope<()> {
    let mut conn = db.lock().await;
    let result = sqlx::query("UPDATE car SET make = ?, model = ?, year = ? WHERE id = ?")
        .bind(&payload.make)
        .bind(&payload.model)
        .bind(payload.year)
        .bind(&id)
        .execute(&mut **conn)
        .await;

    match result {
        Ok(_) => Envelope::message(format!("Car with ID {id} updated")),
        Err(err) => Envelope::failure(sanitize("UPDATE car", &err)),
    }
}

/// DELETE /car/{id} - remove the row if it exists
///
/// Same contract as update: untyped id, unconditional success message.
async fn delete_car(Extension(db): Extension<DbConn>, Path(id): Path<String>) -> Envelope<()> {
    let mut conn = db.lock().await;
    let result = sqlx::query("DELETE FROM car WHERE id = ?")
        .bind(&id)
        .execute(&mut **conn)
        .await;

    match result {
        Ok(_) => Envelope::message(format!("Car with ID {id} deleted")),
        Err(err) => Envelope::failure(sanitize("DELETE car", &err)),
    }
}

/// Car routes. List stays outside the mutation-log layer; create, update
/// and delete pass through it. Method-router layering keeps the scope exact:
/// `layer` wraps only the methods added before it.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/car",
            post(create_car)
                .layer(axum::middleware::from_fn(log_mutation))
                .get(list_cars),
        )
        .route(
            "/car/{id}",
            put(update_car)
                .delete(delete_car)
                .layer(axum::middleware::from_fn(log_mutation)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields_are_optional() {
        let payload: CarPayload = serde_json::from_str("{}").expect("empty object deserializes");
        assert!(payload.make.is_none());
        assert!(payload.model.is_none());
        assert!(payload.year.is_none());
    }

    #[test]
    fn payload_accepts_full_body() {
        let payload: CarPayload =
            serde_json::from_str(r#"{"make":"Toyota","model":"Corolla","year":2020}"#)
                .expect("full body deserializes");
        assert_eq!(payload.make.as_deref(), Some("Toyota"));
        assert_eq!(payload.model.as_deref(), Some("Corolla"));
        assert_eq!(payload.year, Some(2020));
    }

    #[test]
    fn car_row_serializes_all_fields() {
        let car = Car {
            id: 1,
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2020),
        };
        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "make": "Toyota", "model": "Corolla", "year": 2020})
        );
    }
}
