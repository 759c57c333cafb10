//! Authoritative request bookkeeping.
//!
//! Maps request identifiers to their [`Request`] records with
//! insert-once-only semantics, and keeps a per-warrantor append-only
//! list of every id the warrantor has ever locked. The history list is
//! for enumeration and audit; no transition logic consults it.

use std::collections::HashMap;

use openwarrant_types::{AccountId, Request, RequestId, RequestStatus, Result, WarrantError};
use rust_decimal::Decimal;

/// The authoritative map from request identifier to record.
///
/// Records are permanent: once inserted they are mutated in place by
/// lifecycle transitions but never removed.
#[derive(Debug, Clone, Default)]
pub struct RequestRegistry {
    /// All requests ever locked, by id.
    requests: HashMap<RequestId, Request>,
    /// Per-warrantor append-only id history.
    history: HashMap<AccountId, Vec<RequestId>>,
}

impl RequestRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: HashMap::new(),
            history: HashMap::new(),
        }
    }

    /// Insert a new record and append the id to its warrantor's history.
    ///
    /// # Errors
    /// Returns `AlreadySubmitted` if any record already exists under this
    /// id, whatever its status. An id is burned forever by its first lock.
    pub fn insert(&mut self, id: RequestId, request: Request) -> Result<()> {
        if self.requests.contains_key(&id) {
            return Err(WarrantError::AlreadySubmitted(id));
        }
        self.history
            .entry(request.warrantor)
            .or_default()
            .push(id);
        self.requests.insert(id, request);
        Ok(())
    }

    /// Look up a request by id.
    #[must_use]
    pub fn get(&self, id: &RequestId) -> Option<&Request> {
        self.requests.get(id)
    }

    /// Mutable lookup, for lifecycle transitions.
    pub fn get_mut(&mut self, id: &RequestId) -> Option<&mut Request> {
        self.requests.get_mut(id)
    }

    /// The status of an id. Absent records read as `Uninitialized`, so
    /// transition guards can be phrased as plain status checks.
    #[must_use]
    pub fn status_of(&self, id: &RequestId) -> RequestStatus {
        self.requests
            .get(id)
            .map_or(RequestStatus::Uninitialized, |req| req.status)
    }

    /// Every id this warrantor has ever locked, in lock order.
    #[must_use]
    pub fn history(&self, warrantor: AccountId) -> &[RequestId] {
        self.history.get(&warrantor).map_or(&[], Vec::as_slice)
    }

    /// Total collateral of an asset still held in custody on warrantors'
    /// behalf (locked, disputed, or rejected-awaiting-expiry).
    #[must_use]
    pub fn held_collateral(&self, asset: &str) -> Decimal {
        self.requests
            .values()
            .filter(|req| req.asset == asset && req.status.holds_collateral())
            .map(|req| req.amount)
            .sum()
    }

    /// Number of records ever inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_id(tag: u8) -> RequestId {
        RequestId::from_bytes([tag; 32])
    }

    #[test]
    fn insert_and_lookup() {
        let mut registry = RequestRegistry::new();
        let warrantor = AccountId::new();
        let id = request_id(1);

        registry
            .insert(id, Request::dummy(warrantor, "USDT", Decimal::ONE))
            .unwrap();

        assert_eq!(registry.status_of(&id), RequestStatus::Locked);
        assert_eq!(registry.get(&id).unwrap().warrantor, warrantor);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn insert_twice_fails() {
        let mut registry = RequestRegistry::new();
        let warrantor = AccountId::new();
        let id = request_id(1);

        registry
            .insert(id, Request::dummy(warrantor, "USDT", Decimal::ONE))
            .unwrap();
        let err = registry
            .insert(id, Request::dummy(warrantor, "USDT", Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, WarrantError::AlreadySubmitted(dup) if dup == id));
    }

    #[test]
    fn id_stays_burned_after_transitions() {
        let mut registry = RequestRegistry::new();
        let warrantor = AccountId::new();
        let id = request_id(1);

        registry
            .insert(id, Request::dummy(warrantor, "USDT", Decimal::ONE))
            .unwrap();
        registry
            .get_mut(&id)
            .unwrap()
            .transition(RequestStatus::Unlocked)
            .unwrap();

        // The id can never be locked a second time.
        let err = registry
            .insert(id, Request::dummy(warrantor, "USDT", Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, WarrantError::AlreadySubmitted(_)));
    }

    #[test]
    fn absent_id_reads_uninitialized() {
        let registry = RequestRegistry::new();
        assert_eq!(
            registry.status_of(&request_id(9)),
            RequestStatus::Uninitialized
        );
        assert!(registry.get(&request_id(9)).is_none());
    }

    #[test]
    fn history_is_append_only_per_warrantor() {
        let mut registry = RequestRegistry::new();
        let alice = AccountId::new();
        let bob = AccountId::new();

        registry
            .insert(request_id(1), Request::dummy(alice, "USDT", Decimal::ONE))
            .unwrap();
        registry
            .insert(request_id(2), Request::dummy(bob, "USDT", Decimal::ONE))
            .unwrap();
        registry
            .insert(request_id(3), Request::dummy(alice, "BTC", Decimal::ONE))
            .unwrap();

        assert_eq!(registry.history(alice), &[request_id(1), request_id(3)]);
        assert_eq!(registry.history(bob), &[request_id(2)]);
        assert!(registry.history(AccountId::new()).is_empty());
    }

    #[test]
    fn held_collateral_tracks_custody_statuses() {
        let mut registry = RequestRegistry::new();
        let warrantor = AccountId::new();

        registry
            .insert(
                request_id(1),
                Request::dummy(warrantor, "USDT", Decimal::new(5, 1)),
            )
            .unwrap();
        registry
            .insert(
                request_id(2),
                Request::dummy(warrantor, "USDT", Decimal::new(3, 1)),
            )
            .unwrap();
        assert_eq!(registry.held_collateral("USDT"), Decimal::new(8, 1));

        // Unlocked collateral no longer counts as held.
        registry
            .get_mut(&request_id(2))
            .unwrap()
            .transition(RequestStatus::Unlocked)
            .unwrap();
        assert_eq!(registry.held_collateral("USDT"), Decimal::new(5, 1));

        // A dispute keeps it held; confirmation removes it.
        let req = registry.get_mut(&request_id(1)).unwrap();
        req.transition(RequestStatus::Disputed).unwrap();
        assert_eq!(registry.held_collateral("USDT"), Decimal::new(5, 1));
        registry
            .get_mut(&request_id(1))
            .unwrap()
            .transition(RequestStatus::DisputeConfirmed)
            .unwrap();
        assert_eq!(registry.held_collateral("USDT"), Decimal::ZERO);
    }
}
