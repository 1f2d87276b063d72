//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the banking client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BankingConfig {
    /// Banking backend location.
    pub backend: BackendConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Session manager limits.
    pub sessions: SessionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Banking backend (ASPSP mock server) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every request path is appended to (e.g., "http://localhost:28080").
    pub base_url: String,

    /// Which confirmation endpoint family the backend exposes.
    pub confirmation_path: ConfirmationPath,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:28080".to_string(),
            confirmation_path: ConfirmationPath::default(),
        }
    }
}

/// Path prefix of the TAN and consent confirmation endpoints.
///
/// Deployments of the mock server disagree on whether these live under the
/// view controller or the plain payment controller, so it is left to the
/// integration to pick one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationPath {
    /// `/payment/confirmation`
    #[default]
    Payment,
    /// `/view/payment/confirmation`
    View,
}

impl ConfirmationPath {
    pub const PAYMENT: &'static str = "/payment/confirmation";
    pub const VIEW: &'static str = "/view/payment/confirmation";

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationPath::Payment => Self::PAYMENT,
            ConfirmationPath::View => Self::VIEW,
        }
    }
}

/// Timeout configuration for outbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Session manager configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of live sessions held at once.
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_sessions: 1000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
