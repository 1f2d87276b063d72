//! A banking session: one client plus the record it currently holds.

use std::future::Future;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::client::{BankingClient, ConfirmationResponse, ConsentDecision, SinglePayments};
use crate::error::BankingResult;
use crate::session::record::SessionRecord;

/// Holds one [`SessionRecord`] and issues backend calls with it.
///
/// The record is swapped atomically, so concurrent readers see either the
/// previous record or the new one, never a mix of both.
pub struct BankingSession {
    client: BankingClient,
    record: ArcSwap<SessionRecord>,
}

impl BankingSession {
    /// New session with an empty record.
    pub fn new(client: BankingClient) -> Self {
        Self::with_record(client, SessionRecord::default())
    }

    pub fn with_record(client: BankingClient, record: SessionRecord) -> Self {
        Self {
            client,
            record: ArcSwap::from_pointee(record),
        }
    }

    /// Replace the held record wholesale. Fields of the old record are not kept.
    pub fn save_data(&self, record: SessionRecord) {
        self.record.store(Arc::new(record));
    }

    /// The record currently held.
    pub fn load_data(&self) -> Arc<SessionRecord> {
        self.record.load_full()
    }

    pub fn client(&self) -> &BankingClient {
        &self.client
    }

    /// Confirm the held TAN.
    ///
    /// The record is read when this is called; nothing is sent until the
    /// returned future is awaited.
    pub fn post_tan(&self) -> impl Future<Output = BankingResult<ConfirmationResponse>> + Send + 'static {
        let client = self.client.clone();
        let record = self.load_data();
        async move { client.post_tan(&record).await }
    }

    /// Decide the held consent. Same call-time snapshot as [`Self::post_tan`].
    pub fn post_consent(
        &self,
        decision: ConsentDecision,
    ) -> impl Future<Output = BankingResult<ConfirmationResponse>> + Send + 'static {
        let client = self.client.clone();
        let record = self.load_data();
        async move { client.post_consent(&record, decision).await }
    }

    /// Like [`Self::post_consent`] for a decision given as text.
    ///
    /// Unknown decisions fail with `InvalidArgument` without contacting the backend.
    pub async fn post_consent_str(&self, decision: &str) -> BankingResult<ConfirmationResponse> {
        let decision: ConsentDecision = decision.parse()?;
        self.post_consent(decision).await
    }

    /// Fetch the payment the held record points at; `None` if the backend has none.
    pub fn get_single_payments(
        &self,
    ) -> impl Future<Output = BankingResult<Option<SinglePayments>>> + Send + 'static {
        let client = self.client.clone();
        let record = self.load_data();
        async move { client.get_single_payments(&record).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BankingSession {
        BankingSession::new(BankingClient::new("http://bank.local").unwrap())
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(*session().load_data(), SessionRecord::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let session = session();
        let record = SessionRecord::new("DE89", "c1", "p1").with_tan("123456");
        session.save_data(record.clone());
        assert_eq!(*session.load_data(), record);
    }

    #[test]
    fn test_save_replaces_without_merge() {
        let session = session();
        session.save_data(SessionRecord::new("DE89", "c1", "p1").with_tan("123456"));
        session.save_data(SessionRecord::new("DE44", "c2", "p2"));
        let loaded = session.load_data();
        assert_eq!(loaded.tan, None);
        assert_eq!(loaded.consent_id, "c2");
    }

    #[test]
    fn test_earlier_snapshot_unaffected_by_save() {
        let session = session();
        session.save_data(SessionRecord::new("DE89", "c1", "p1"));
        let before = session.load_data();
        session.save_data(SessionRecord::new("DE44", "c2", "p2"));
        assert_eq!(before.payment_id, "p1");
        assert_eq!(session.load_data().payment_id, "p2");
    }
}
