use design_catalog::catalog::{Catalog, CatalogService, DirectoryComponentSource};
use design_catalog::config::AppConfig;
use design_catalog::error::AppError;
use design_catalog::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type DirectoryCatalogService = CatalogService<DirectoryComponentSource>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration, applying a `--data-dir` override when one was given.
pub(crate) fn load_config(data_dir: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = data_dir {
        config.catalog.data_dir = dir;
    }
    Ok(config)
}

/// Reads `systems.json` once and wires component audits to `components/`.
///
/// A dataset that fails to load is fatal; missing audits are not.
pub(crate) fn load_service(config: &AppConfig) -> Result<DirectoryCatalogService, AppError> {
    let catalog = Catalog::from_path(config.catalog.systems_path())?;
    info!(
        systems = catalog.len(),
        data_dir = %config.catalog.data_dir.display(),
        "catalog loaded"
    );

    let components = DirectoryComponentSource::new(config.catalog.components_dir());
    Ok(CatalogService::new(Arc::new(catalog), Arc::new(components)))
}

/// Config, tracing and dataset for the one-shot CLI commands. Logs go to stderr.
pub(crate) fn bootstrap(data_dir: Option<PathBuf>) -> Result<DirectoryCatalogService, AppError> {
    let config = load_config(data_dir)?;
    telemetry::init(&config.telemetry)?;
    load_service(&config)
}
