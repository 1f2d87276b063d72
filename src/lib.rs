//! Online banking front-end client for the ASPSP mock server.
//!
//! # Architecture Overview
//!
//! ```text
//!     front-end                 ┌──────────────────────────────────────────┐
//!     ─────────────────────────▶│ session: SessionManager → BankingSession │
//!       save / load record      └────────────────────┬─────────────────────┘
//!                                                    │ record snapshot
//!                                                    ▼
//!                               ┌──────────────────────────────────────────┐
//!                               │ client: BankingClient                    │
//!                               │   POST {confirmation}/            (TAN)  │──▶ ASPSP mock
//!                               │   POST {confirmation}/consent  (consent) │    server
//!                               │   GET  /payments/{paymentId}   (payment) │
//!                               └──────────────────────────────────────────┘
//!
//!     cross-cutting: config (TOML + validation), observability (tracing, metrics)
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod session;

pub use client::{BankingClient, ConfirmationBody, ConfirmationResponse, ConsentDecision, SinglePayments};
pub use config::BankingConfig;
pub use error::{BankingError, BankingResult};
pub use session::{BankingSession, SessionId, SessionManager, SessionRecord};
