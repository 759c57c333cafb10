//! Supervisor-initiated disputes and resolver adjudication.
//!
//! A dispute freezes a LOCKED request: it is no longer releasable by
//! expiry until the resolver rules. Confirmation seizes the collateral
//! to the configured seized-assets wallet and is terminal; rejection
//! returns the request to the normal expiry path, measured from the
//! *original* lock time.

use openwarrant_ledger::{AssetGateway, PermissionStore};
use openwarrant_types::{
    AccountId, RequestId, RequestStatus, Result, WarrantError, WarrantEvent,
};

use crate::WarrantEngine;

impl WarrantEngine {
    /// File a dispute against a LOCKED request.
    ///
    /// Supervisor membership is checked live against the injected store;
    /// removing the supervisor afterwards does not retroactively
    /// invalidate the dispute.
    ///
    /// # Errors
    /// - `NotLocked` unless the request's status is LOCKED
    /// - `NotSupervisor` unless the caller is an active supervisor
    pub fn dispute(
        &mut self,
        permissions: &dyn PermissionStore,
        caller: AccountId,
        req_id: RequestId,
    ) -> Result<()> {
        let status = self.registry.status_of(&req_id);
        if status != RequestStatus::Locked {
            return Err(WarrantError::NotLocked { id: req_id, status });
        }
        if !permissions.is_supervisor(caller) {
            return Err(WarrantError::NotSupervisor(caller));
        }

        if let Some(req) = self.registry.get_mut(&req_id) {
            req.transition(RequestStatus::Disputed)?;
            req.claimer = Some(caller);
        }
        self.events.record(WarrantEvent::Disputed {
            request_id: req_id,
            supervisor: caller,
        });
        tracing::warn!(request = %req_id, supervisor = %caller, "request disputed");
        Ok(())
    }

    /// Adjudicate a DISPUTED request.
    ///
    /// Confirmed: the request becomes DISPUTE_CONFIRMED (terminal — the
    /// warrantor's ledger balance is never restored) and the collateral
    /// is pushed from custody to the seized-assets wallet. Rejected: the
    /// request becomes DISPUTE_REJECTED and rejoins the expiry path.
    ///
    /// # Errors
    /// - `NotDisputeResolver` unless the caller holds the resolver role
    /// - `NotDisputed` unless the request's status is DISPUTED
    /// - `TransferFailed` if the seizure push is rejected; the status
    ///   mutation is rolled back and the operation has no effect
    pub fn resolve_dispute(
        &mut self,
        permissions: &dyn PermissionStore,
        gateway: &mut dyn AssetGateway,
        caller: AccountId,
        req_id: RequestId,
        confirmed: bool,
    ) -> Result<()> {
        if !permissions.is_dispute_resolver(caller) {
            return Err(WarrantError::NotDisputeResolver(caller));
        }
        let status = self.registry.status_of(&req_id);
        if status != RequestStatus::Disputed {
            return Err(WarrantError::NotDisputed { id: req_id, status });
        }

        if confirmed {
            let (asset, amount) = {
                let Some(req) = self.registry.get_mut(&req_id) else {
                    return Err(WarrantError::NotDisputed { id: req_id, status });
                };
                // Status flipped before the external push (effects
                // before external calls).
                req.transition(RequestStatus::DisputeConfirmed)?;
                (req.asset.clone(), req.amount)
            };
            let seized_wallet = self.config.seized_wallet;
            if let Err(err) = gateway.push(&asset, seized_wallet, amount) {
                // Failed seizure aborts the whole operation.
                if let Some(req) = self.registry.get_mut(&req_id) {
                    req.status = RequestStatus::Disputed;
                }
                return Err(err);
            }
            tracing::warn!(request = %req_id, %amount, asset, "collateral seized");
        } else if let Some(req) = self.registry.get_mut(&req_id) {
            req.transition(RequestStatus::DisputeRejected)?;
        }

        self.events.record(WarrantEvent::DisputeResolved {
            request_id: req_id,
            confirmed,
        });
        tracing::info!(request = %req_id, confirmed, "dispute resolved");
        Ok(())
    }
}
