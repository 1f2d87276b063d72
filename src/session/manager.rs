//! Bounded registry of banking sessions.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::client::BankingClient;
use crate::observability::metrics;
use crate::session::record::SessionRecord;
use crate::session::state::BankingSession;

/// Opaque identifier handed to the front-end for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(SessionId),

    #[error("Session limit of {max} reached")]
    CapacityExceeded { max: usize },
}

/// Owns every live session; all of them share one [`BankingClient`].
pub struct SessionManager {
    client: BankingClient,
    sessions: DashMap<SessionId, Arc<BankingSession>>,
    /// Reserved slots, bumped before insert so the limit holds under contention.
    reserved: AtomicUsize,
    max_sessions: usize,
}

impl SessionManager {
    pub fn new(client: BankingClient, max_sessions: usize) -> Self {
        Self {
            client,
            sessions: DashMap::new(),
            reserved: AtomicUsize::new(0),
            max_sessions,
        }
    }

    /// Open a session with an empty record.
    pub fn create(&self) -> Result<SessionId, SessionError> {
        self.create_with(SessionRecord::default())
    }

    /// Open a session holding `record`.
    pub fn create_with(&self, record: SessionRecord) -> Result<SessionId, SessionError> {
        let max = self.max_sessions;
        self.reserved
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| (n < max).then_some(n + 1))
            .map_err(|_| {
                tracing::warn!(max_sessions = max, "Session limit reached");
                SessionError::CapacityExceeded { max }
            })?;

        let id = SessionId::new();
        let session = BankingSession::with_record(self.client.clone(), record);
        self.sessions.insert(id, Arc::new(session));
        metrics::record_active_sessions(self.sessions.len());
        tracing::debug!(session_id = %id, "Session created");
        Ok(id)
    }

    pub fn get(&self, id: &SessionId) -> Result<Arc<BankingSession>, SessionError> {
        self.sessions
            .get(id)
            .map(|s| s.value().clone())
            .ok_or(SessionError::NotFound(*id))
    }

    /// Replace the record of session `id`.
    pub fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionError> {
        self.get(id)?.save_data(record);
        Ok(())
    }

    pub fn load(&self, id: &SessionId) -> Result<Arc<SessionRecord>, SessionError> {
        Ok(self.get(id)?.load_data())
    }

    /// Close session `id`. Calls already in flight on it still complete.
    pub fn remove(&self, id: &SessionId) -> Option<Arc<BankingSession>> {
        let removed = self.sessions.remove(id).map(|(_, s)| s);
        if removed.is_some() {
            self.reserved.fetch_sub(1, Ordering::SeqCst);
            metrics::record_active_sessions(self.sessions.len());
            tracing::debug!(session_id = %id, "Session removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(max: usize) -> SessionManager {
        SessionManager::new(BankingClient::new("http://bank.local").unwrap(), max)
    }

    #[test]
    fn test_capacity_enforced() {
        let m = manager(2);
        m.create().unwrap();
        m.create().unwrap();
        assert_eq!(m.create(), Err(SessionError::CapacityExceeded { max: 2 }));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_remove_frees_slot() {
        let m = manager(1);
        let id = m.create().unwrap();
        assert!(m.remove(&id).is_some());
        assert!(m.remove(&id).is_none());
        assert!(m.is_empty());
        assert!(m.create().is_ok());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let m = manager(10);
        let a = m.create().unwrap();
        let b = m.create_with(SessionRecord::new("DE44", "c2", "p2")).unwrap();
        m.save(&a, SessionRecord::new("DE89", "c1", "p1")).unwrap();

        assert_eq!(m.load(&a).unwrap().payment_id, "p1");
        assert_eq!(m.load(&b).unwrap().payment_id, "p2");
    }

    #[test]
    fn test_unknown_session() {
        let m = manager(1);
        let id = SessionId::new();
        assert_eq!(m.load(&id).unwrap_err(), SessionError::NotFound(id));
    }

    #[test]
    fn test_session_id_round_trip_text() {
        let id = SessionId::new();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
