use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::directory::ZipDirectory;
use super::domain::{ZIP_NOT_FOUND_MESSAGE, ZIP_SERVICE_UNAVAILABLE_MESSAGE};
use super::service::ZipLookupGateway;
use crate::workflows::outcome::GatewayOutcome;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ZipQuery {
    #[serde(default)]
    pub(crate) zip: String,
}

/// Router builder exposing ZIP code lookups.
pub fn zip_router<D>(gateway: Arc<ZipLookupGateway<D>>) -> Router
where
    D: ZipDirectory + 'static,
{
    Router::new()
        .route("/api/v1/zip-codes", get(lookup_handler::<D>))
        .with_state(gateway)
}

pub(crate) async fn lookup_handler<D>(
    State(gateway): State<Arc<ZipLookupGateway<D>>>,
    Query(query): Query<ZipQuery>,
) -> Response
where
    D: ZipDirectory + 'static,
{
    match gateway.get_zip_code_info(&query.zip).await {
        Ok(GatewayOutcome::Found(info)) => (StatusCode::OK, axum::Json(info)).into_response(),
        Ok(GatewayOutcome::NotFound) => {
            let payload = json!({ "error": ZIP_NOT_FOUND_MESSAGE });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Ok(GatewayOutcome::UpstreamFailure(diagnostic)) => {
            error!(%diagnostic, zip = %query.zip, "zip lookup unavailable");
            let payload = json!({ "error": ZIP_SERVICE_UNAVAILABLE_MESSAGE });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
