//! Banking backend client subsystem.
//!
//! # Data Flow
//! ```text
//! SessionRecord (explicit, or held by a BankingSession)
//!     → types.rs (typed request bodies)
//!     → endpoints.rs (URL for the operation)
//!     → banking.rs (send, status check, decode)
//!     → ConfirmationResponse / SinglePayments
//! ```

pub mod banking;
pub mod decision;
pub mod endpoints;
pub mod types;

pub use banking::BankingClient;
pub use decision::ConsentDecision;
pub use endpoints::Endpoints;
pub use types::{
    AccountReference, Amount, ConfirmationBody, ConfirmationResponse, SinglePayments, Timestamp,
};
