use crate::cli::ServeArgs;
use crate::infra::{load_recommender, AppState};
use crate::routes::{recommendation_router, with_boundary_layers};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use youth_policy::config::AppConfig;
use youth_policy::error::AppError;
use youth_policy::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let recommender = Arc::new(load_recommender(args.rules.take(), &config.catalog)?);
    let policies = recommender.catalog().len();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_boundary_layers(
        recommendation_router(recommender)
            .layer(Extension(app_state))
            .layer(prometheus_layer),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, policies, "youth policy recommender ready");

    axum::serve(listener, app).await?;
    Ok(())
}
