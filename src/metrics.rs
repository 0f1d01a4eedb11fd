//! Login metrics
//!
//! Thin wrappers around the `metrics` facade so call sites stay one-liners.
//! A recorder (Prometheus exporter or similar) is installed by the
//! application, not by this crate.

/// Metric label values
pub mod labels {
    /// Failure recorded after a transport-level error.
    pub const REASON_TRANSPORT: &str = "transport";

    /// Failure recorded after the service declined the credentials.
    pub const REASON_REJECTED: &str = "rejected";

    /// Failure recorded after an undecodable response body.
    pub const REASON_MALFORMED: &str = "malformed";

    /// Failure recorded after an unexpected HTTP status.
    pub const REASON_HTTP: &str = "http_error";
}

/// Counters
pub mod counters {
    use metrics::counter;

    /// A negotiation attempt started.
    pub fn login_attempted(scheme: &'static str) {
        counter!("snowtide_logins_attempted_total", "scheme" => scheme).increment(1);
    }

    /// A negotiation committed a session.
    pub fn login_successful(scheme: &'static str) {
        counter!("snowtide_logins_successful_total", "scheme" => scheme).increment(1);
    }

    /// A negotiation ended without a session.
    pub fn login_failed(scheme: &'static str, reason: &'static str) {
        counter!(
            "snowtide_logins_failed_total",
            "scheme" => scheme,
            "reason" => reason
        )
        .increment(1);
    }
}

/// Histograms
pub mod histograms {
    use metrics::histogram;

    /// Wall-clock duration of one negotiation, milliseconds.
    pub fn login_duration(scheme: &'static str, millis: u64) {
        histogram!("snowtide_login_duration_ms", "scheme" => scheme).record(millis as f64);
    }
}
