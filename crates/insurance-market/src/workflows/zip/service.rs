use std::sync::Arc;

use tracing::debug;

use super::directory::ZipDirectory;
use super::domain::{ZipCode, ZipCodeInfo, ZipInputError};
use crate::workflows::outcome::{GatewayOutcome, UpstreamDiagnostic};

const SERVICE_NAME: &str = "zip reference";

/// Resolves ZIP codes to city, state, and county.
pub struct ZipLookupGateway<D> {
    directory: Arc<D>,
}

impl<D> ZipLookupGateway<D>
where
    D: ZipDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn get_zip_code_info(
        &self,
        raw: &str,
    ) -> Result<GatewayOutcome<ZipCodeInfo>, ZipInputError> {
        let zip = match ZipCode::parse(raw) {
            Ok(zip) => zip,
            Err(error) => {
                debug!(zip = raw, "rejected malformed ZIP code");
                return Err(error);
            }
        };

        let outcome = match self.directory.lookup(&zip).await {
            Ok(Some(info)) => GatewayOutcome::Found(info),
            Ok(None) => GatewayOutcome::NotFound,
            Err(error) => {
                GatewayOutcome::UpstreamFailure(UpstreamDiagnostic::new(SERVICE_NAME, error))
            }
        };
        Ok(outcome)
    }
}
