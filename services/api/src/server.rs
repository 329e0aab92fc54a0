use crate::cli::ServeArgs;
use crate::infra::{load_config, load_service, AppState};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use design_catalog::error::AppError;
use design_catalog::telemetry;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let mut config = load_config(data_dir)?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(load_service(&config)?);

    let app = with_catalog_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "design catalog ready");

    axum::serve(listener, app).await?;
    Ok(())
}
