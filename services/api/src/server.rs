use crate::cli::ServeArgs;
use crate::infra::{AppState, Gateways};
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use insurance_market::config::AppConfig;
use insurance_market::error::AppError;
use insurance_market::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateways = Gateways::from_config(&config.upstream)?;

    let app = with_intake_routes(gateways.address, gateways.zip)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        address_service = %config.upstream.address_service_url,
        zip_service = %config.upstream.zip_service_url,
        timeout_ms = config.upstream.timeout.as_millis() as u64,
        "insurance marketplace intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
