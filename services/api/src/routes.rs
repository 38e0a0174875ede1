use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use insurance_market::workflows::address::{
    address_router, AddressValidationGateway, AddressVerifier,
};
use insurance_market::workflows::eligibility::eligibility_router;
use insurance_market::workflows::zip::{zip_router, ZipDirectory, ZipLookupGateway};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_intake_routes<V, D>(
    address: Arc<AddressValidationGateway<V>>,
    zip: Arc<ZipLookupGateway<D>>,
) -> axum::Router
where
    V: AddressVerifier + 'static,
    D: ZipDirectory + 'static,
{
    address_router(address)
        .merge(zip_router(zip))
        .merge(eligibility_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
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
