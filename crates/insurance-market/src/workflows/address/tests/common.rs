use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::address::domain::{Address, VerificationVerdict};
use crate::workflows::address::verifier::AddressVerifier;
use crate::workflows::address::{address_router, AddressValidationGateway};
use crate::workflows::upstream::UpstreamError;

pub(super) fn austin_address() -> Address {
    Address {
        line1: "123 Main St".to_string(),
        line2: None,
        city: "Austin".to_string(),
        state: "TX".to_string(),
        zip: "78701".to_string(),
    }
}

pub(super) fn deliverable() -> Result<VerificationVerdict, UpstreamError> {
    Ok(VerificationVerdict {
        deliverable: true,
        defects: Vec::new(),
        address: None,
    })
}

pub(super) fn undeliverable(defects: &[&str]) -> Result<VerificationVerdict, UpstreamError> {
    Ok(VerificationVerdict {
        deliverable: false,
        defects: defects.iter().map(|defect| defect.to_string()).collect(),
        address: None,
    })
}

/// Verifier double that replays one canned answer and counts calls.
pub(super) struct ScriptedVerifier {
    reply: Result<VerificationVerdict, UpstreamError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<Address>>,
}

impl ScriptedVerifier {
    pub(super) fn new(reply: Result<VerificationVerdict, UpstreamError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn seen(&self) -> Vec<Address> {
        self.seen.lock().expect("verifier mutex poisoned").clone()
    }
}

#[async_trait]
impl AddressVerifier for ScriptedVerifier {
    async fn verify(&self, address: &Address) -> Result<VerificationVerdict, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .expect("verifier mutex poisoned")
            .push(address.clone());
        self.reply.clone()
    }
}

pub(super) fn build_gateway(
    reply: Result<VerificationVerdict, UpstreamError>,
) -> (Arc<AddressValidationGateway<ScriptedVerifier>>, Arc<ScriptedVerifier>) {
    let verifier = Arc::new(ScriptedVerifier::new(reply));
    let gateway = Arc::new(AddressValidationGateway::new(verifier.clone()));
    (gateway, verifier)
}

pub(super) fn router_with(
    gateway: Arc<AddressValidationGateway<ScriptedVerifier>>,
) -> axum::Router {
    address_router(gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
