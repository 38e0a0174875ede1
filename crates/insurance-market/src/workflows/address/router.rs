use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{Address, AddressInputError, AddressValidationResult};
use super::service::AddressValidationGateway;
use super::verifier::AddressVerifier;
use crate::workflows::outcome::GatewayOutcome;

/// Router builder exposing address validation.
pub fn address_router<V>(gateway: Arc<AddressValidationGateway<V>>) -> Router
where
    V: AddressVerifier + 'static,
{
    Router::new()
        .route("/api/v1/address/validate", post(validate_handler::<V>))
        .with_state(gateway)
}

pub(crate) async fn validate_handler<V>(
    State(gateway): State<Arc<AddressValidationGateway<V>>>,
    axum::Json(address): axum::Json<Address>,
) -> Response
where
    V: AddressVerifier + 'static,
{
    match gateway.validate_address(&address).await {
        Ok(GatewayOutcome::Found(result)) => (StatusCode::OK, axum::Json(result)).into_response(),
        Ok(GatewayOutcome::NotFound) => {
            let result = AddressValidationResult::invalid(Vec::new());
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Ok(GatewayOutcome::UpstreamFailure(diagnostic)) => {
            error!(%diagnostic, "address validation unavailable");
            let result = AddressValidationResult::service_unavailable();
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(result)).into_response()
        }
        Err(error) => {
            let AddressInputError::MissingFields(fields) = &error;
            let payload = json!({
                "error": error.to_string(),
                "missingFields": fields,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
