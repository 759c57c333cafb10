//! Administrative configuration and the emergency custody escape hatch.
//!
//! Config changes take effect immediately for all subsequent calls:
//! nothing snapshots `warranty_duration` or the seized wallet at lock or
//! dispute time. Supervisor-set management lives on the permission
//! store itself (see `openwarrant_ledger::InMemoryPermissions`).

use openwarrant_ledger::{AssetGateway, PermissionStore};
use openwarrant_types::{constants, AccountId, Result, WarrantError};
use rust_decimal::Decimal;

use crate::vault::require_positive;
use crate::WarrantEngine;

impl WarrantEngine {
    /// Set the warranty window, in seconds. Admin-only.
    ///
    /// In-flight requests measure their expiry against the new value
    /// from this moment on.
    ///
    /// # Errors
    /// - `NotAdmin` if the caller does not hold the admin role
    /// - `InvalidDuration` if `duration_secs` exceeds
    ///   [`constants::MAX_WARRANTY_DURATION_SECS`]; beyond that the
    ///   chrono conversion would saturate and expiry arithmetic loses
    ///   meaning
    pub fn set_warranty_duration(
        &mut self,
        permissions: &dyn PermissionStore,
        caller: AccountId,
        duration_secs: u64,
    ) -> Result<()> {
        require_admin(permissions, caller)?;
        if duration_secs > constants::MAX_WARRANTY_DURATION_SECS {
            return Err(WarrantError::InvalidDuration(duration_secs));
        }
        self.config.warranty_duration_secs = duration_secs;
        tracing::info!(duration_secs, "warranty duration updated");
        Ok(())
    }

    /// Set the destination for seized collateral. Admin-only.
    ///
    /// # Errors
    /// Returns `NotAdmin` if the caller does not hold the admin role.
    pub fn set_seized_wallet(
        &mut self,
        permissions: &dyn PermissionStore,
        caller: AccountId,
        wallet: AccountId,
    ) -> Result<()> {
        require_admin(permissions, caller)?;
        self.config.seized_wallet = wallet;
        tracing::info!(wallet = %wallet, "seized-assets wallet updated");
        Ok(())
    }

    /// Emergency-only: push custody funds straight out to `dest`
    /// without touching any warrantor's recorded balance. Admin-only.
    ///
    /// This deliberately breaks the correspondence between custody and
    /// the sum of ledger balances for `asset`; the divergence is logged
    /// so operators can reconcile offline.
    ///
    /// # Errors
    /// - `NotAdmin` if the caller does not hold the admin role
    /// - `InvalidAmount` unless `amount` is strictly positive
    /// - `TransferFailed` if the asset mechanism rejects the push
    pub fn admin_withdraw(
        &self,
        permissions: &dyn PermissionStore,
        gateway: &mut dyn AssetGateway,
        caller: AccountId,
        asset: &str,
        amount: Decimal,
        dest: AccountId,
    ) -> Result<()> {
        require_admin(permissions, caller)?;
        require_positive(amount)?;
        gateway.push(asset, dest, amount)?;
        tracing::warn!(
            asset,
            %amount,
            dest = %dest,
            custody = %gateway.custody_balance(asset),
            ledger_total = %self.ledger.total(asset),
            held = %self.registry.held_collateral(asset),
            "emergency admin withdrawal bypassed the balance ledger"
        );
        Ok(())
    }
}

fn require_admin(permissions: &dyn PermissionStore, caller: AccountId) -> Result<()> {
    if permissions.is_admin(caller) {
        Ok(())
    } else {
        Err(WarrantError::NotAdmin(caller))
    }
}
