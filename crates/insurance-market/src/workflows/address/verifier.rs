use async_trait::async_trait;

use super::domain::{Address, VerificationVerdict};
use crate::config::UpstreamConfig;
use crate::workflows::upstream::{http_client, UpstreamError};

/// Outbound hook to an address verification provider.
#[async_trait]
pub trait AddressVerifier: Send + Sync {
    async fn verify(&self, address: &Address) -> Result<VerificationVerdict, UpstreamError>;
}

/// JSON-over-HTTP verification client.
///
/// `POST {base_url}/verify` with the normalized address; the provider answers
/// with a [`VerificationVerdict`].
#[derive(Debug, Clone)]
pub struct HttpAddressVerifier {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAddressVerifier {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = http_client(config.timeout)?;
        Ok(Self::new(
            client,
            config.address_service_url.clone(),
            config.address_service_api_key.clone(),
        ))
    }
}

#[async_trait]
impl AddressVerifier for HttpAddressVerifier {
    async fn verify(&self, address: &Address) -> Result<VerificationVerdict, UpstreamError> {
        let url = format!("{}/verify", self.base_url);
        let mut request = self.client.post(&url).json(address);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(UpstreamError::from_send)?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<VerificationVerdict>()
            .await
            .map_err(UpstreamError::from_body)
    }
}
