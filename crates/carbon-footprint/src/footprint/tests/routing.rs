use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::footprint::router::{dashboard_handler, submit_handler};
use crate::footprint::service::FootprintService;
use crate::footprint::storage::{InMemoryResultStore, ResultStore};

#[tokio::test]
async fn submit_handler_returns_created_record() {
    let (service, _) = build_service();

    let response =
        submit_handler::<InMemoryResultStore>(State(Arc::new(service)), axum::Json(submission()))
            .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["key"], "carbonResults");
    assert_eq!(payload["record"]["food"], "2.50");
    assert_eq!(payload["record"]["home"], "0.80");
    assert!(payload.get("computed_at").is_some());
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_bad_bracket() {
    let (service, _) = build_service();

    let response = submit_handler::<InMemoryResultStore>(
        State(Arc::new(service)),
        axum::Json(out_of_range_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("outside"));
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_overflowing_distance() {
    let (service, store) = build_service();

    let response = submit_handler::<InMemoryResultStore>(
        State(Arc::new(service)),
        axum::Json(oversized_distance_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.load().expect("loads").is_none());
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(FootprintService::new(Arc::new(UnavailableStore)));

    let response = submit_handler::<UnavailableStore>(State(service), axum::Json(submission())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn dashboard_handler_reports_missing_data() {
    let (service, _) = build_service();

    let response = dashboard_handler::<InMemoryResultStore>(State(Arc::new(service))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "status": "not_available", "total": "N/A" }));
}

#[tokio::test]
async fn routes_round_trip_through_the_store() {
    let (service, _) = build_service();
    let router = footprint_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/footprint")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({
                        "meat-consumption": "3",
                        "km-car": "10",
                        "km-moto": "abc",
                        "led-usage": "0",
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/dashboard")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "available");
    // 3.30 food + 88.40 transport + 1.20 home
    assert_eq!(payload["total"], "92.90");
    assert_eq!(payload["comparison"][1]["value"], json!(3.7));
    let ids: Vec<_> = payload["recommendations"]
        .as_array()
        .expect("recommendations array")
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["reduce-red-meat", "use-public-transport", "switch-to-led"]
    );
}
