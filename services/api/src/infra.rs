use estate_hub::config::AppConfig;
use estate_hub::error::AppError;
use estate_hub::store::MarketplaceStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Configuration plus the catalogs it points at, for one-shot CLI queries.
pub(crate) fn load_store() -> Result<MarketplaceStore, AppError> {
    let config = AppConfig::load()?;
    Ok(MarketplaceStore::load(&config.catalog)?)
}
