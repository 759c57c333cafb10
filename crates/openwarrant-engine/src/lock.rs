//! Locking new collateral behind a request, with rolling collateral.
//!
//! `lock` first releases any caller-nominated expired requests, so
//! collateral freed within the same call counts toward the new lock.
//! The sufficiency check runs *after* that release; if it still fails,
//! the entire operation — including the nominated releases — has no
//! observable effect.

use chrono::{DateTime, Utc};
use openwarrant_types::{
    AccountId, Request, RequestId, RequestStatus, Result, WarrantError, WarrantEvent,
};
use rust_decimal::Decimal;

use crate::WarrantEngine;

impl WarrantEngine {
    /// Lock `amount` of `asset` behind `req_id` for the caller.
    ///
    /// Steps, in order:
    /// 1. Reject ids that were ever locked (`AlreadySubmitted`)
    /// 2. Determine which `unlockables` are releasable at `now`
    /// 3. Check the caller's balance plus what step 2 frees for this
    ///    same (caller, asset); fail `InsufficientBalance` before any
    ///    mutation
    /// 4. Commit the releases, debit the caller, insert the record with
    ///    `lock_time = now`, append to the caller's history, and emit
    ///
    /// `unlockables` may be empty and may nominate any warrantor's
    /// requests; releases always credit the original warrantor, so only
    /// the caller's own expired requests in the same asset fund the new
    /// lock. No upper bound on `amount`.
    ///
    /// # Errors
    /// - `InvalidAmount` unless `amount` is strictly positive
    /// - `AlreadySubmitted` if `req_id` was ever locked before
    /// - `InsufficientBalance` if, even after the nominated releases,
    ///   the caller's balance does not cover `amount`
    #[allow(clippy::too_many_arguments)]
    pub fn lock(
        &mut self,
        caller: AccountId,
        asset: &str,
        amount: Decimal,
        app_id: &str,
        user: AccountId,
        req_id: RequestId,
        unlockables: &[RequestId],
        now: DateTime<Utc>,
    ) -> Result<()> {
        crate::vault::require_positive(amount)?;
        if self.registry.status_of(&req_id) != RequestStatus::Uninitialized {
            return Err(WarrantError::AlreadySubmitted(req_id));
        }

        // Rolling collateral: vet the nominated releases before any
        // mutation so an insufficient balance aborts the whole call.
        let eligible = self.releasable(unlockables, now);
        let freed: Decimal = eligible
            .iter()
            .filter_map(|id| self.registry.get(id))
            .filter(|req| req.warrantor == caller && req.asset == asset)
            .map(|req| req.amount)
            .sum();

        let available = self.ledger.balance(caller, asset) + freed;
        if available < amount {
            return Err(WarrantError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        // Commit point: nothing below can fail.
        self.apply_release(&eligible);
        self.ledger.debit(caller, asset, amount)?;
        self.registry.insert(
            req_id,
            Request {
                warrantor: caller,
                asset: asset.to_string(),
                amount,
                app_id: app_id.to_string(),
                user,
                lock_time: now,
                status: RequestStatus::Locked,
                claimer: None,
            },
        )?;
        self.events.record(WarrantEvent::Locked {
            warrantor: caller,
            asset: asset.to_string(),
            amount,
            app_id: app_id.to_string(),
            user,
            request_id: req_id,
        });
        tracing::info!(request = %req_id, warrantor = %caller, asset, %amount, "collateral locked");
        Ok(())
    }
}
