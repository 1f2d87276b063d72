//! Metrics collection.
//!
//! # Responsibilities
//! - Define client metrics (request counts, latency)
//! - Record through the `metrics` facade; the embedding application decides
//!   whether and where to export them
//!
//! # Metrics
//! - `banking_requests_total` (counter): requests by endpoint, outcome
//! - `banking_request_duration_seconds` (histogram): latency by endpoint
//! - `banking_sessions_active` (gauge): sessions held by the session manager

use std::time::Instant;

/// Outcome label for a finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Status,
    Decode,
    Transport,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Status => "status",
            Outcome::Decode => "decode",
            Outcome::Transport => "transport",
        }
    }
}

/// Record a completed outbound request.
pub fn record_request(endpoint: &'static str, outcome: Outcome, start: Instant) {
    metrics::counter!(
        "banking_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("banking_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record the current number of live sessions.
pub fn record_active_sessions(count: usize) {
    metrics::gauge!("banking_sessions_active").set(count as f64);
}
