//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, deserialize, env and CLI overrides)
//!     → validation.rs (semantic checks)
//!     → BankingConfig (validated, immutable)
//!     → handed to BankingClient / SessionManager / logging
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, resolve_config, ConfigError};
pub use schema::BankingConfig;
pub use schema::{BackendConfig, ConfirmationPath, ObservabilityConfig, SessionConfig, TimeoutConfig};
