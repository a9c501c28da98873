use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::footprint::form::FormSubmission;
use crate::footprint::router::footprint_router;
use crate::footprint::service::FootprintService;
use crate::footprint::storage::{InMemoryResultStore, ResultStore, StorageError, StoredRecord};

pub(super) fn submission() -> FormSubmission {
    FormSubmission {
        meat_consumption: "2".to_string(),
        km_car: "50".to_string(),
        km_moto: "".to_string(),
        km_public: "20".to_string(),
        led_usage: "1".to_string(),
    }
}

pub(super) fn low_impact_submission() -> FormSubmission {
    FormSubmission {
        meat_consumption: "0".to_string(),
        km_car: "0".to_string(),
        km_moto: "0".to_string(),
        km_public: "0".to_string(),
        led_usage: "1".to_string(),
    }
}

pub(super) fn out_of_range_submission() -> FormSubmission {
    FormSubmission {
        meat_consumption: "9".to_string(),
        ..submission()
    }
}

pub(super) fn oversized_distance_submission() -> FormSubmission {
    FormSubmission {
        km_car: "1e308".to_string(),
        ..submission()
    }
}

pub(super) fn build_service() -> (
    FootprintService<InMemoryResultStore>,
    Arc<InMemoryResultStore>,
) {
    let store = Arc::new(InMemoryResultStore::default());
    let service = FootprintService::new(store.clone());
    (service, store)
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn save(&self, _record: StoredRecord) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }

    fn load(&self) -> Result<Option<StoredRecord>, StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn footprint_router_with_service(
    service: FootprintService<InMemoryResultStore>,
) -> axum::Router {
    footprint_router(Arc::new(service))
}
