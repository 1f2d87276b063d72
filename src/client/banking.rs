//! HTTP client for the banking backend.
//!
//! # Responsibilities
//! - Build requests for TAN confirmation, consent decision and payment lookup
//! - Decode responses into typed values at the boundary
//! - Surface transport, status and decode failures unchanged (no retries)

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::client::decision::ConsentDecision;
use crate::client::endpoints::Endpoints;
use crate::client::types::{
    ConfirmationBody, ConfirmationResponse, ConsentBody, SinglePayments, TanConfirmationBody,
};
use crate::config::{BankingConfig, ConfirmationPath};
use crate::error::{BankingError, BankingResult};
use crate::observability::metrics::{self, Outcome};
use crate::session::SessionRecord;

const TAN_CONFIRMATION: &str = "tan_confirmation";
const CONSENT: &str = "consent";
const SINGLE_PAYMENTS: &str = "single_payments";

/// Stateless client: every call takes the session record it should send.
#[derive(Debug, Clone)]
pub struct BankingClient {
    http: Client,
    endpoints: Endpoints,
}

impl BankingClient {
    /// Client with default transport settings against `base_url`.
    pub fn new(base_url: &str) -> BankingResult<Self> {
        let endpoints = Endpoints::new(base_url, ConfirmationPath::default())?;
        Ok(Self::with_http_client(Client::new(), endpoints))
    }

    /// Client built from configuration, timeouts applied to the transport.
    pub fn from_config(config: &BankingConfig) -> BankingResult<Self> {
        let endpoints = Endpoints::new(&config.backend.base_url, config.backend.confirmation_path)?;
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .build()?;

        tracing::info!(
            base_url = %endpoints.base(),
            confirmation_path = endpoints.confirmation_path().as_str(),
            "Banking client initialized"
        );
        Ok(Self::with_http_client(http, endpoints))
    }

    pub fn with_http_client(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Submit the record's TAN for the pending payment.
    pub async fn post_tan(&self, record: &SessionRecord) -> BankingResult<ConfirmationResponse> {
        let url = self.endpoints.tan_confirmation();
        let body = TanConfirmationBody::from(record);
        self.observe(TAN_CONFIRMATION, self.post_json(TAN_CONFIRMATION, url, &body)).await
    }

    /// Send the PSU's decision on the record's consent.
    pub async fn post_consent(
        &self,
        record: &SessionRecord,
        decision: ConsentDecision,
    ) -> BankingResult<ConfirmationResponse> {
        let url = self.endpoints.consent(decision);
        let body = ConsentBody::from(record);
        self.observe(CONSENT, self.post_json(CONSENT, url, &body)).await
    }

    /// Fetch the payment the record points at.
    ///
    /// `None` when the backend knows no such payment (204 No Content).
    pub async fn get_single_payments(
        &self,
        record: &SessionRecord,
    ) -> BankingResult<Option<SinglePayments>> {
        let url = self.endpoints.single_payment(&record.payment_id);
        self.observe(SINGLE_PAYMENTS, self.get_json(SINGLE_PAYMENTS, url)).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> BankingResult<Option<T>> {
        let response = self.send(self.http.get(url)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| BankingError::Decode { endpoint, source })
    }

    async fn post_json<B: Serialize>(
        &self,
        endpoint: &'static str,
        url: Url,
        body: &B,
    ) -> BankingResult<ConfirmationResponse> {
        let response = self.send(self.http.post(url).json(body)).await?;
        read_confirmation(endpoint, response).await
    }

    async fn send(&self, request: RequestBuilder) -> BankingResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BankingError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn observe<T, F>(&self, endpoint: &'static str, call: F) -> BankingResult<T>
    where
        F: std::future::Future<Output = BankingResult<T>>,
    {
        let start = Instant::now();
        tracing::debug!(endpoint, "Sending request");
        let result = call.await;

        let outcome = outcome_of(&result);
        if let Err(e) = &result {
            tracing::warn!(endpoint, error = %e, "Banking request failed");
        }
        metrics::record_request(endpoint, outcome, start);
        result
    }
}

/// Metrics label for a finished call.
pub(crate) fn outcome_of<T>(result: &BankingResult<T>) -> Outcome {
    match result {
        Ok(_) => Outcome::Success,
        Err(BankingError::Status { .. }) => Outcome::Status,
        Err(BankingError::Decode { .. }) => Outcome::Decode,
        Err(_) => Outcome::Transport,
    }
}

async fn read_confirmation(
    endpoint: &'static str,
    response: Response,
) -> BankingResult<ConfirmationResponse> {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("json"))
        .unwrap_or(false);
    let text = response.text().await?;

    let body = if text.trim().is_empty() {
        ConfirmationBody::Empty
    } else if is_json {
        let value = serde_json::from_str(&text)
            .map_err(|source| BankingError::Decode { endpoint, source })?;
        ConfirmationBody::Json(value)
    } else {
        ConfirmationBody::Text(text)
    };
    Ok(ConfirmationResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        let ok: BankingResult<()> = Ok(());
        let status: BankingResult<()> = Err(BankingError::Status { status: 503, body: String::new() });
        let decode: BankingResult<()> = Err(BankingError::Decode {
            endpoint: SINGLE_PAYMENTS,
            source: serde_json::from_str::<u8>("").unwrap_err(),
        });
        let url: BankingResult<()> = Err(url::Url::parse("::").unwrap_err().into());

        assert_eq!(outcome_of(&ok), Outcome::Success);
        assert_eq!(outcome_of(&status), Outcome::Status);
        assert_eq!(outcome_of(&decode), Outcome::Decode);
        assert_eq!(outcome_of(&url), Outcome::Transport);
    }
}
