use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tracing::{error, info};
use youth_policy::recommender::{AggregateResult, PolicyRecommender, UserProfile};

pub(crate) const SERVICE_NAME: &str = "Seoul Youth Policy Recommender API";
pub(crate) const NO_MATCH_MESSAGE: &str =
    "조건에 맞는 정책이 아직 없어요. 다음 기회에 더 많은 정책이 생길 거예요 :)";
pub(crate) const FAILURE_MESSAGE: &str = "추천 중 오류가 발생했습니다.";

/// Aggregate result, with a friendly message attached when nothing matched.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendResponse {
    #[serde(flatten)]
    pub(crate) result: AggregateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<&'static str>,
}

impl From<AggregateResult> for RecommendResponse {
    fn from(result: AggregateResult) -> Self {
        let message = result.is_empty().then_some(NO_MATCH_MESSAGE);
        Self { result, message }
    }
}

pub(crate) fn recommendation_router(recommender: Arc<PolicyRecommender>) -> Router {
    Router::new()
        .route("/", get(service_identity))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/recommend", post(recommend_endpoint))
        .with_state(recommender)
}

/// Permissive CORS for the survey front end and a panic guard that never leaks detail.
pub(crate) fn with_boundary_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(internal_failure))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
}

fn internal_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|detail| detail.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(%detail, "request handler panicked");

    let payload = json!({
        "error": "internal error",
        "message": FAILURE_MESSAGE,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn service_identity() -> Json<serde_json::Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommend_endpoint(
    State(recommender): State<Arc<PolicyRecommender>>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Response {
    let profile = match payload {
        Ok(Json(profile)) => profile,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    let result = recommender.recommend(&profile);
    info!(
        age = profile.age,
        eligible = result.eligible_count,
        "recommendation served"
    );

    (StatusCode::OK, Json(RecommendResponse::from(result))).into_response()
}
