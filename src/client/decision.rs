//! Consent decision values accepted by the confirmation endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BankingError;

/// The PSU's answer to a pending consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentDecision {
    Accepted,
    Rejected,
}

impl ConsentDecision {
    /// Value sent in the `decision` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "ACCEPTED",
            ConsentDecision::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ConsentDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentDecision {
    type Err = BankingError;

    /// Case-insensitive; anything but `accepted` / `rejected` is refused.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACCEPTED" => Ok(ConsentDecision::Accepted),
            "REJECTED" => Ok(ConsentDecision::Rejected),
            _ => Err(BankingError::InvalidArgument(format!(
                "consent decision must be ACCEPTED or REJECTED, got '{}'",
                s
            ))),
        }
    }
}
