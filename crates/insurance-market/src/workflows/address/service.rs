use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Address, AddressInputError, AddressValidationResult, VerificationVerdict};
use super::verifier::AddressVerifier;
use crate::workflows::outcome::{GatewayOutcome, UpstreamDiagnostic};

const SERVICE_NAME: &str = "address verification";

/// Validates applicant addresses against the configured verification provider.
pub struct AddressValidationGateway<V> {
    verifier: Arc<V>,
}

impl<V> AddressValidationGateway<V>
where
    V: AddressVerifier + 'static,
{
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    /// Check required fields, then ask the provider exactly once.
    ///
    /// Upstream failures come back as [`GatewayOutcome::UpstreamFailure`]; this
    /// gateway never yields [`GatewayOutcome::NotFound`].
    pub async fn validate_address(
        &self,
        address: &Address,
    ) -> Result<GatewayOutcome<AddressValidationResult>, AddressInputError> {
        let missing = address.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "address rejected before verification");
            return Err(AddressInputError::MissingFields(missing));
        }

        let normalized = address.normalized();
        match self.verifier.verify(&normalized).await {
            Ok(verdict) => Ok(GatewayOutcome::Found(result_from_verdict(verdict))),
            Err(error) => Ok(GatewayOutcome::UpstreamFailure(UpstreamDiagnostic::new(
                SERVICE_NAME,
                error,
            ))),
        }
    }
}

fn result_from_verdict(verdict: VerificationVerdict) -> AddressValidationResult {
    let VerificationVerdict {
        deliverable,
        defects,
        address,
    } = verdict;

    let defects: Vec<String> = defects
        .into_iter()
        .map(|defect| defect.trim().to_string())
        .filter(|defect| !defect.is_empty())
        .collect();

    if deliverable {
        if !defects.is_empty() {
            warn!(
                ?defects,
                "verification provider marked address deliverable but listed defects"
            );
        }
        AddressValidationResult::valid(address)
    } else {
        AddressValidationResult::invalid(defects)
    }
}
