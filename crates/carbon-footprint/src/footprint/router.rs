use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::form::FormSubmission;
use super::service::{FootprintService, FootprintServiceError};
use super::storage::ResultStore;

/// Router builder exposing the form submission and dashboard endpoints.
pub fn footprint_router<S>(service: Arc<FootprintService<S>>) -> Router
where
    S: ResultStore + 'static,
{
    Router::new()
        .route("/api/v1/footprint", post(submit_handler::<S>))
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<FootprintService<S>>>,
    axum::Json(submission): axum::Json<FormSubmission>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.submit(&submission) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(FootprintServiceError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<FootprintService<S>>>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.dashboard() {
        Ok(dashboard) => (StatusCode::OK, axum::Json(dashboard.to_payload())).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
