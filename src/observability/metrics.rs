//! Metrics collection.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by route, outcome
//! - `router_redirects_total` (counter): redirects followed by source route
//! - `view_loads_total` (counter): lazy view loads by view, result
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs a recorder
//! - Labels are route names (or patterns for unnamed routes), never raw paths

/// Record one resolution. `outcome` is `matched` or `fallback`.
pub fn record_resolution(route: &str, outcome: &'static str) {
    ::metrics::counter!(
        "router_resolutions_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a redirect followed from `route`.
pub fn record_redirect(route: &str) {
    ::metrics::counter!("router_redirects_total", "route" => route.to_string()).increment(1);
}

/// Record a lazy view load. `result` is `loaded`, `cached` or `error`.
pub fn record_view_load(view: &str, result: &'static str) {
    ::metrics::counter!(
        "view_loads_total",
        "view" => view.to_string(),
        "result" => result
    )
    .increment(1);
}
