use std::time::Duration;

/// Failure talking to a third-party service, as reported by the HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("undecodable response body: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }

    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Decode(err.to_string())
        }
    }
}

/// Shared client for upstream calls; every request inherits `timeout`.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("insurance-market/", env!("CARGO_PKG_VERSION")))
        .build()
}
