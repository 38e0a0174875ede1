use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_ADDRESS_SERVICE_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_ZIP_SERVICE_URL: &str = "http://127.0.0.1:8082";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let upstream = UpstreamConfig::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            upstream,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter and output formatting.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Locations and limits for the third-party services the gateways call.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub address_service_url: String,
    pub address_service_api_key: Option<String>,
    pub zip_service_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let address_service_url =
            base_url_from_env("ADDRESS_SERVICE_URL", DEFAULT_ADDRESS_SERVICE_URL)?;
        let zip_service_url = base_url_from_env("ZIP_SERVICE_URL", DEFAULT_ZIP_SERVICE_URL)?;

        let address_service_api_key = env::var("ADDRESS_SERVICE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let timeout_ms = match env::var("UPSTREAM_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?,
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_MS,
        };

        Ok(Self {
            address_service_url,
            address_service_api_key,
            zip_service_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn base_url_from_env(key: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    let trimmed = raw.trim().trim_end_matches('/');

    reqwest::Url::parse(trimmed).map_err(|err| ConfigError::InvalidUpstreamUrl {
        key,
        reason: err.to_string(),
    })?;

    Ok(trimmed.to_string())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidUpstreamUrl { key: &'static str, reason: String },
    InvalidTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidUpstreamUrl { key, reason } => {
                write!(f, "{key} must be an absolute URL ({reason})")
            }
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "UPSTREAM_TIMEOUT_MS must be a positive number of milliseconds, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidUpstreamUrl { .. }
            | ConfigError::InvalidTimeout { .. } => None,
        }
    }
}
