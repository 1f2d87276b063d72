//! Session state.
//!
//! # Data Flow
//! ```text
//! front-end saves a SessionRecord
//!     → SessionManager (bounded, keyed by SessionId)
//!     → BankingSession (atomic record swap)
//!     → BankingClient call with a snapshot of the record
//! ```

pub mod manager;
pub mod record;
pub mod state;

pub use manager::{SessionError, SessionId, SessionManager};
pub use record::SessionRecord;
pub use state::BankingSession;
