//! Wire types exchanged with the banking backend.

use serde::{Deserialize, Serialize};

use crate::session::SessionRecord;

/// Body of the TAN confirmation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TanConfirmationBody<'a> {
    /// Omitted from the JSON entirely while the session has no TAN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tan_number: Option<&'a str>,
    pub iban: &'a str,
    pub consent_id: &'a str,
    pub payment_id: &'a str,
}

impl<'a> From<&'a SessionRecord> for TanConfirmationBody<'a> {
    fn from(record: &'a SessionRecord) -> Self {
        Self {
            tan_number: record.tan.as_deref(),
            iban: &record.iban,
            consent_id: &record.consent_id,
            payment_id: &record.payment_id,
        }
    }
}

/// Body of the consent decision request. Never carries the TAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentBody<'a> {
    pub iban: &'a str,
    pub consent_id: &'a str,
    pub payment_id: &'a str,
}

impl<'a> From<&'a SessionRecord> for ConsentBody<'a> {
    fn from(record: &'a SessionRecord) -> Self {
        Self {
            iban: &record.iban,
            consent_id: &record.consent_id,
            payment_id: &record.payment_id,
        }
    }
}

/// A single payment as stored by the ASPSP mock server.
///
/// The server serializes unset fields as `null`, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SinglePayments {
    pub end_to_end_identification: Option<String>,
    pub debtor_account: Option<AccountReference>,
    pub ultimate_debtor: Option<String>,
    pub instructed_amount: Option<Amount>,
    pub creditor_account: Option<AccountReference>,
    pub creditor_agent: Option<String>,
    pub creditor_name: Option<String>,
    pub creditor_address: Option<Address>,
    pub ultimate_creditor: Option<String>,
    pub purpose_code: Option<String>,
    pub remittance_information_unstructured: Option<String>,
    pub remittance_information_structured: Option<Remittance>,
    pub requested_execution_date: Option<Timestamp>,
    pub requested_execution_time: Option<Timestamp>,
}

/// Reference to an account by one of its identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountReference {
    #[serde(alias = "id")]
    pub account_id: Option<String>,
    pub iban: Option<String>,
    pub bban: Option<String>,
    pub pan: Option<String>,
    pub masked_pan: Option<String>,
    pub msisdn: Option<String>,
    /// ISO 4217 code, e.g. "EUR".
    pub currency: Option<String>,
}

/// Monetary amount; `content` is the decimal string the server sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub building_number: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Remittance {
    pub reference: Option<String>,
    pub reference_type: Option<String>,
    pub reference_issuer: Option<String>,
}

/// Date or time as the server emits it: epoch milliseconds or an ISO string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

/// Outcome of a confirmation POST.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationResponse {
    pub status: u16,
    pub body: ConfirmationBody,
}

/// Confirmation endpoints answer JSON or a rendered page, depending on deployment.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationBody {
    Json(serde_json::Value),
    Text(String),
    Empty,
}
