use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_footprint_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use carbon_footprint::config::{AppConfig, StoreBackend};
use carbon_footprint::error::AppError;
use carbon_footprint::footprint::{
    FootprintService, InMemoryResultStore, JsonFileResultStore, ResultStore,
};
use carbon_footprint::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    match config.storage.backend {
        StoreBackend::Memory => {
            info!("storing footprint results in memory");
            serve(config, Arc::new(InMemoryResultStore::default())).await
        }
        StoreBackend::File => {
            info!(path = %config.storage.path.display(), "storing footprint results on disk");
            let store = JsonFileResultStore::new(config.storage.path.clone());
            serve(config, Arc::new(store)).await
        }
    }
}

async fn serve<S>(config: AppConfig, store: Arc<S>) -> Result<(), AppError>
where
    S: ResultStore + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(FootprintService::new(store));

    let app = with_footprint_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "carbon footprint service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
