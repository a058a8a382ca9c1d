//! Request metrics for the catalog endpoints.
//!
//! Recording is always safe; values only leave the process when a Prometheus
//! exporter was installed through [`init_metrics`].

use std::net::SocketAddr;
use std::time::Instant;
use tracing::{info, warn};

pub const LISTING_REQUESTS: &str = "catalog_listing_requests_total";
pub const LISTING_MATCHES: &str = "catalog_listing_matches";
pub const LISTING_DURATION: &str = "catalog_listing_duration_seconds";
pub const DETAIL_REQUESTS: &str = "catalog_detail_requests_total";

/// Installs the Prometheus exporter when `METRICS_ADDR` is set.
pub fn init_metrics() {
    let Ok(addr_str) = std::env::var("METRICS_ADDR") else {
        return;
    };
    let addr: SocketAddr = match addr_str.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid METRICS_ADDR '{}': {}", addr_str, e);
            return;
        }
    };
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => info!("Prometheus exporter listening on http://{}/metrics", addr),
        Err(e) => warn!("Prometheus exporter install failed (possibly already installed): {}", e),
    }
}

pub fn record_listing(outcome: &'static str, matches: usize, started: Instant) {
    ::metrics::counter!(LISTING_REQUESTS, "outcome" => outcome).increment(1);
    ::metrics::histogram!(LISTING_MATCHES).record(matches as f64);
    ::metrics::histogram!(LISTING_DURATION).record(started.elapsed().as_secs_f64());
}

pub fn record_detail(outcome: &'static str) {
    ::metrics::counter!(DETAIL_REQUESTS, "outcome" => outcome).increment(1);
}
