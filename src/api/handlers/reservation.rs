//! Reservation handlers: list, create, stats, attendees, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::api::dto::{CreateReservationRequest, DeleteReservationResponse};
use crate::app_state::AppState;
use crate::domain::{AttendanceStats, Reservation};
use crate::error::{ErrorResponse, RsvpError};

/// `GET /api/reservations` — Full reservation list.
///
/// # Errors
///
/// Returns [`RsvpError::StoreRead`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Reservations",
    summary = "List all reservations",
    description = "Returns every stored reservation in insertion order.",
    responses(
        (status = 200, description = "Reservation list", body = Vec<Reservation>),
        (status = 500, description = "Store read failure", body = ErrorResponse),
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RsvpError> {
    let reservations = state.reservation_service.list_reservations().await?;
    Ok(Json(reservations))
}

/// `POST /api/reservations` — Submit a new RSVP.
///
/// # Errors
///
/// Returns [`RsvpError::Validation`] when `name` or `attendance` is
/// missing and [`RsvpError::StoreWrite`] when persistence fails.
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "Reservations",
    summary = "Submit a reservation",
    description = "Persists a new RSVP with a server-side timestamp and echoes the created record.",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing name or attendance", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, RsvpError> {
    let created = state
        .reservation_service
        .create_reservation(req.name, req.message, req.attendance)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/reservations/stats` — Aggregate attendance counts.
///
/// # Errors
///
/// Returns [`RsvpError::StoreRead`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/reservations/stats",
    tag = "Reservations",
    summary = "Attendance statistics",
    description = "Counts stored records per recognized attendance value. Unrecognized values count toward the total only.",
    responses(
        (status = 200, description = "Attendance statistics", body = AttendanceStats),
        (status = 500, description = "Store read failure", body = ErrorResponse),
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, RsvpError> {
    let stats = state.reservation_service.stats().await?;
    Ok(Json(stats))
}

/// `GET /api/reservations/attendees` — Attending guests only.
///
/// # Errors
///
/// Returns [`RsvpError::StoreRead`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/reservations/attendees",
    tag = "Reservations",
    summary = "List attendees",
    description = "Returns the reservations whose attendance is \"hadir\", in insertion order.",
    responses(
        (status = 200, description = "Attendee list", body = Vec<Reservation>),
        (status = 500, description = "Store read failure", body = ErrorResponse),
    )
)]
pub async fn get_attendees(State(state): State<AppState>) -> Result<impl IntoResponse, RsvpError> {
    let attendees = state.reservation_service.attendees().await?;
    Ok(Json(attendees))
}

/// `DELETE /api/reservations/{timestamp}` — Remove a reservation.
///
/// Succeeds whether or not any record matched, so repeated deletes are
/// idempotent from the caller's view.
///
/// # Errors
///
/// Returns [`RsvpError::StoreWrite`] if the store cannot be rewritten.
#[utoipa::path(
    delete,
    path = "/api/reservations/{timestamp}",
    tag = "Reservations",
    summary = "Delete a reservation",
    description = "Removes every record carrying the given creation timestamp.",
    params(
        ("timestamp" = String, Path, description = "Creation timestamp identifying the record"),
    ),
    responses(
        (status = 200, description = "Delete processed", body = DeleteReservationResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(timestamp): Path<String>,
) -> Result<impl IntoResponse, RsvpError> {
    state.reservation_service.delete_reservation(&timestamp).await?;
    Ok(Json(DeleteReservationResponse {
        message: "Reservation deleted successfully".to_string(),
    }))
}

/// Reservation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(list_reservations).post(create_reservation),
        )
        .route("/reservations/stats", get(get_stats))
        .route("/reservations/attendees", get(get_attendees))
        .route("/reservations/{timestamp}", delete(delete_reservation))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::ReservationStore;
    use crate::service::ReservationService;

    async fn test_app() -> (Router, PathBuf) {
        let path = std::env::temp_dir()
            .join(format!("rsvp_api_{}", uuid::Uuid::new_v4()))
            .join("reservations.json");
        let store = Arc::new(ReservationStore::new(&path));
        let Ok(()) = store.ensure_initialized().await else {
            panic!("initialization failed");
        };
        let state = AppState {
            reservation_service: Arc::new(ReservationService::new(store)),
        };
        (crate::api::build_router().with_state(state), path)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to collect body");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("body was not valid JSON");
        };
        json
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        let Ok(request) = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("failed to build request");
        };
        request
    }

    fn get_req(uri: &str) -> Request<Body> {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("failed to build request");
        };
        request
    }

    #[tokio::test]
    async fn post_creates_and_get_lists_the_record() {
        let (app, path) = test_app().await;

        let Ok(response) = app
            .clone()
            .oneshot(post_json(
                "/api/reservations",
                serde_json::json!({"name": "Budi", "attendance": "hadir"}),
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["name"], "Budi");
        assert_eq!(created["message"], "");
        assert_eq!(created["attendance"], "hadir");

        let Ok(response) = app.oneshot(get_req("/api/reservations")).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed, serde_json::json!([created]));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn post_without_required_fields_returns_400() {
        let (app, path) = test_app().await;

        for body in [
            serde_json::json!({"message": "hi", "attendance": "hadir"}),
            serde_json::json!({"name": "Alice", "message": "hi"}),
            serde_json::json!({"name": "", "attendance": ""}),
        ] {
            let Ok(response) = app.clone().oneshot(post_json("/api/reservations", body)).await
            else {
                panic!("request failed");
            };
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error = body_json(response).await;
            assert_eq!(
                error,
                serde_json::json!({"error": "Name and attendance are required"})
            );
        }

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn stats_endpoint_uses_camel_case_bucket_names() {
        let (app, path) = test_app().await;

        for body in [
            serde_json::json!({"name": "a", "attendance": "hadir"}),
            serde_json::json!({"name": "b", "attendance": "tidak hadir"}),
            serde_json::json!({"name": "c", "attendance": "ragu"}),
            serde_json::json!({"name": "d", "attendance": "???"}),
        ] {
            let Ok(_) = app.clone().oneshot(post_json("/api/reservations", body)).await else {
                panic!("request failed");
            };
        }

        let Ok(response) = app.oneshot(get_req("/api/reservations/stats")).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(
            stats,
            serde_json::json!({"total": 4, "hadir": 1, "tidakHadir": 1, "ragu": 1})
        );

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn attendees_endpoint_filters_to_hadir() {
        let (app, path) = test_app().await;

        for body in [
            serde_json::json!({"name": "a", "attendance": "hadir"}),
            serde_json::json!({"name": "b", "attendance": "ragu"}),
        ] {
            let Ok(_) = app.clone().oneshot(post_json("/api/reservations", body)).await else {
                panic!("request failed");
            };
        }

        let Ok(response) = app.oneshot(get_req("/api/reservations/attendees")).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let attendees = body_json(response).await;
        let Some(records) = attendees.as_array() else {
            panic!("expected an array");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|r| &r["name"]), Some(&serde_json::json!("a")));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn delete_succeeds_even_without_a_match() {
        let (app, path) = test_app().await;

        let Ok(request) = Request::builder()
            .method("DELETE")
            .uri("/api/reservations/2026-01-01T00:00:00.000Z")
            .body(Body::empty())
        else {
            panic!("failed to build request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"message": "Reservation deleted successfully"})
        );

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn delete_removes_the_created_record() {
        let (app, path) = test_app().await;

        let Ok(response) = app
            .clone()
            .oneshot(post_json(
                "/api/reservations",
                serde_json::json!({"name": "Budi", "attendance": "hadir"}),
            ))
            .await
        else {
            panic!("request failed");
        };
        let created = body_json(response).await;
        let Some(ts) = created["timestamp"].as_str() else {
            panic!("missing timestamp");
        };

        let Ok(request) = Request::builder()
            .method("DELETE")
            .uri(format!("/api/reservations/{ts}"))
            .body(Body::empty())
        else {
            panic!("failed to build request");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(response) = app.oneshot(get_req("/api/reservations")).await else {
            panic!("request failed");
        };
        let listed = body_json(response).await;
        assert_eq!(listed, serde_json::json!([]));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
