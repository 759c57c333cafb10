//! Expiry-based release of collateral back into the ledger.
//!
//! `unlock` is callable by anyone with no authorization check: it never
//! moves funds anywhere but back to the original warrantor, so
//! third-party relayers and automation can sweep expirations freely.
//!
//! Each id in a batch is judged independently against the *current*
//! stored record, so a release performed earlier in the same batch —
//! including a duplicate id appearing twice — is visible to later
//! entries. Processing the same id twice in one call credits at most
//! once. Ineligible entries are skipped silently; a batch never
//! hard-fails on an individual id.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use openwarrant_types::{RequestId, RequestStatus, WarrantEvent};

use crate::WarrantEngine;

impl WarrantEngine {
    /// Release every eligible id in the batch back to its warrantor.
    ///
    /// Eligible iff the record's status is LOCKED or DISPUTE_REJECTED
    /// and `lock_time + warranty_duration <= now`, with the warranty
    /// window read at this moment, not at lock time. Returns the number
    /// of requests released; ineligible, unknown, and duplicate ids are
    /// soft-skipped.
    pub fn unlock(&mut self, ids: &[RequestId], now: DateTime<Utc>) -> usize {
        let eligible = self.releasable(ids, now);
        self.apply_release(&eligible);
        eligible.len()
    }

    /// The subset of `ids` eligible for release at `now`, deduplicated
    /// in first-occurrence order. A release never makes another request
    /// eligible, so judging against the pre-release records is identical
    /// to processing sequentially with intra-batch visibility.
    pub(crate) fn releasable(&self, ids: &[RequestId], now: DateTime<Utc>) -> Vec<RequestId> {
        let window = self.warranty_duration();
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(**id))
            .filter(|id| {
                self.registry
                    .get(id)
                    .is_some_and(|req| req.is_releasable(window, now))
            })
            .copied()
            .collect()
    }

    /// Commit the release of already-vetted ids: transition to UNLOCKED,
    /// credit the warrantor, emit an `Unlocked` event per id.
    pub(crate) fn apply_release(&mut self, ids: &[RequestId]) {
        for id in ids {
            let Some(req) = self.registry.get_mut(id) else {
                continue;
            };
            if req.transition(RequestStatus::Unlocked).is_err() {
                continue;
            }
            let (warrantor, asset, amount) = (req.warrantor, req.asset.clone(), req.amount);
            let (app_id, user) = (req.app_id.clone(), req.user);

            self.ledger.credit(warrantor, &asset, amount);
            self.events.record(WarrantEvent::Unlocked {
                warrantor,
                asset,
                amount,
                app_id,
                user,
                request_id: *id,
            });
            tracing::info!(request = %id, warrantor = %warrantor, %amount, "collateral released");
        }
    }
}
