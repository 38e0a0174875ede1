use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::domain::{ZipCode, ZipCodeInfo};
use crate::config::UpstreamConfig;
use crate::workflows::upstream::{http_client, UpstreamError};

/// Geographic reference service keyed by ZIP code.
///
/// `Ok(None)` means the service answered and has no record for the ZIP.
#[async_trait]
pub trait ZipDirectory: Send + Sync {
    async fn lookup(&self, zip: &ZipCode) -> Result<Option<ZipCodeInfo>, UpstreamError>;
}

/// Reference service client: `GET {base_url}/zip-codes/{zip}`, 404 for unknown ZIPs.
#[derive(Debug, Clone)]
pub struct HttpZipDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpZipDirectory {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = http_client(config.timeout)?;
        Ok(Self::new(client, config.zip_service_url.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct ZipRecord {
    #[serde(default)]
    zip: Option<String>,
    city: String,
    state: String,
    #[serde(default)]
    county: String,
}

#[async_trait]
impl ZipDirectory for HttpZipDirectory {
    async fn lookup(&self, zip: &ZipCode) -> Result<Option<ZipCodeInfo>, UpstreamError> {
        let url = format!("{}/zip-codes/{}", self.base_url, zip);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::from_send)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => {
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        let record = response
            .json::<ZipRecord>()
            .await
            .map_err(UpstreamError::from_body)?;

        Ok(Some(ZipCodeInfo {
            zip: record
                .zip
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| zip.to_string()),
            city: record.city,
            state: record.state,
            county: record.county,
        }))
    }
}
