//! Telemetry metric name constants.
//!
//! Centralised metric names for colormix operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `colormix_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `upstream`: which external service: "catalog" or "recipe"
//! - `status`: outcome: "ok" or "error"
//! - `cache`: which cache: currently only "catalog"

/// Total calls made to an upstream service.
///
/// Labels: `upstream`, `status` ("ok" | "error").
pub const UPSTREAM_REQUESTS_TOTAL: &str = "colormix_upstream_requests_total";

/// Upstream call duration in seconds.
///
/// Labels: `upstream`.
pub const UPSTREAM_DURATION_SECONDS: &str = "colormix_upstream_duration_seconds";

/// Total cache hits.
///
/// Labels: `cache`.
pub const CACHE_HITS_TOTAL: &str = "colormix_cache_hits_total";

/// Total cache misses.
///
/// Labels: `cache`.
pub const CACHE_MISSES_TOTAL: &str = "colormix_cache_misses_total";

/// Record the outcome and duration of one upstream call.
pub(crate) fn record_upstream<T, E>(
    upstream: &'static str,
    started: std::time::Instant,
    result: &std::result::Result<T, E>,
) {
    let status = if result.is_ok() { "ok" } else { "error" };
    metrics::counter!(UPSTREAM_REQUESTS_TOTAL, "upstream" => upstream, "status" => status)
        .increment(1);
    metrics::histogram!(UPSTREAM_DURATION_SECONDS, "upstream" => upstream)
        .record(started.elapsed().as_secs_f64());
}
