//! The per-user session record.

use serde::{Deserialize, Serialize};

/// Values carried between page views and sent with every backend call.
///
/// A plain value holder: nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    /// Transaction authentication number, unset until the PSU types it.
    pub tan: Option<String>,
    pub iban: String,
    pub consent_id: String,
    pub payment_id: String,
}

impl SessionRecord {
    pub fn new(
        iban: impl Into<String>,
        consent_id: impl Into<String>,
        payment_id: impl Into<String>,
    ) -> Self {
        Self {
            tan: None,
            iban: iban.into(),
            consent_id: consent_id.into(),
            payment_id: payment_id.into(),
        }
    }

    pub fn with_tan(mut self, tan: impl Into<String>) -> Self {
        self.tan = Some(tan.into());
        self
    }
}
