//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! BankingClient / SessionManager produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//! ```
//!
//! # Design Decisions
//! - TAN values never reach a log line
//! - Metrics go through the `metrics` facade; no exporter is installed here

pub mod logging;
pub mod metrics;
