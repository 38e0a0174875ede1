use insurance_market::config::UpstreamConfig;
use insurance_market::error::AppError;
use insurance_market::workflows::address::{AddressValidationGateway, HttpAddressVerifier};
use insurance_market::workflows::zip::{HttpZipDirectory, ZipLookupGateway};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type AddressGateway = AddressValidationGateway<HttpAddressVerifier>;
pub(crate) type ZipGateway = ZipLookupGateway<HttpZipDirectory>;

/// Gateways wired to the configured providers.
pub(crate) struct Gateways {
    pub(crate) address: Arc<AddressGateway>,
    pub(crate) zip: Arc<ZipGateway>,
}

impl Gateways {
    pub(crate) fn from_config(config: &UpstreamConfig) -> Result<Self, AppError> {
        let verifier = HttpAddressVerifier::from_config(config)?;
        let directory = HttpZipDirectory::from_config(config)?;

        Ok(Self {
            address: Arc::new(AddressValidationGateway::new(Arc::new(verifier))),
            zip: Arc::new(ZipLookupGateway::new(Arc::new(directory))),
        })
    }
}
