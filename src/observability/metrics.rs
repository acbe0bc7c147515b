//! Metrics collection and exposition.
//!
//! # Metrics
//! - `spa_navigations_total` (counter): app-shell requests by route, status
//! - `spa_request_duration_seconds` (histogram): time to answer them
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Unmatched paths are labelled `route="none"`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one app-shell navigation.
pub fn record_navigation(route: Option<&str>, status: u16, start: Instant) {
    let route = route.unwrap_or("none").to_string();
    ::metrics::counter!(
        "spa_navigations_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("spa_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
