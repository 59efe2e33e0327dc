use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use youth_policy::config::CatalogConfig;
use youth_policy::error::AppError;
use youth_policy::recommender::{PolicyRecommender, UserProfile};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog from `rules` when given, otherwise from the configured search path.
pub(crate) fn load_recommender(
    rules: Option<PathBuf>,
    catalog: &CatalogConfig,
) -> Result<PolicyRecommender, AppError> {
    let path = match rules {
        Some(path) => path,
        None => catalog.resolve()?,
    };
    Ok(PolicyRecommender::from_path(path)?)
}

pub(crate) fn read_profile(path: &Path) -> Result<UserProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
