use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::{PrometheusMetricLayer, PrometheusMetricLayerBuilder};

/// Per-route request counters and latency histograms, rendered by the
/// public `/metrics` route. Metric names carry the service prefix so the
/// scraper can tell clubvest apart from its neighbours.
pub fn setup_metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    PrometheusMetricLayerBuilder::new()
        .with_prefix("clubvest")
        .with_default_metrics()
        .build_pair()
}
