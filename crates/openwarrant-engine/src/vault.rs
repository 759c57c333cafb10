//! Deposit and withdrawal — the ledger's boundary with the asset
//! mechanism.
//!
//! `deposit` pulls first (the pull is the only failure point), then
//! credits. `withdraw` debits the ledger *before* the external push, so
//! a reentrant call from the asset mechanism observes the reduced
//! balance and cannot double-spend; a failed push restores the debit and
//! the whole operation has no observable effect.

use openwarrant_ledger::AssetGateway;
use openwarrant_types::{AccountId, Result, WarrantError, WarrantEvent};
use rust_decimal::Decimal;

use crate::WarrantEngine;

/// Reject non-positive amounts before any balance arithmetic. A
/// negative amount would invert a debit into a credit.
pub(crate) fn require_positive(amount: Decimal) -> Result<()> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(WarrantError::InvalidAmount(amount))
    }
}

impl WarrantEngine {
    /// Pull `amount` of `asset` from the caller into custody and credit
    /// the caller's ledger balance. No upper bound.
    ///
    /// # Errors
    /// - `InvalidAmount` unless `amount` is strictly positive
    /// - `TransferFailed` if the asset mechanism rejects the pull;
    ///   nothing is credited in that case
    pub fn deposit(
        &mut self,
        gateway: &mut dyn AssetGateway,
        caller: AccountId,
        asset: &str,
        amount: Decimal,
    ) -> Result<()> {
        require_positive(amount)?;
        gateway.pull(asset, caller, amount)?;
        self.ledger.credit(caller, asset, amount);
        self.events.record(WarrantEvent::Deposited {
            warrantor: caller,
            asset: asset.to_string(),
            amount,
        });
        tracing::debug!(warrantor = %caller, asset, %amount, "collateral deposited");
        Ok(())
    }

    /// Debit the caller's ledger balance and push the funds back out of
    /// custody to the caller.
    ///
    /// # Errors
    /// - `InvalidAmount` unless `amount` is strictly positive
    /// - `InsufficientBalance` if the caller's balance does not cover
    ///   `amount` (balance unchanged)
    /// - `TransferFailed` if the asset mechanism rejects the push; the
    ///   debit is restored
    pub fn withdraw(
        &mut self,
        gateway: &mut dyn AssetGateway,
        caller: AccountId,
        asset: &str,
        amount: Decimal,
    ) -> Result<()> {
        require_positive(amount)?;
        self.ledger.debit(caller, asset, amount)?;
        // Ledger debited before the external push (effects before
        // external calls). A push failure aborts the whole operation.
        if let Err(err) = gateway.push(asset, caller, amount) {
            self.ledger.credit(caller, asset, amount);
            return Err(err);
        }
        self.events.record(WarrantEvent::Withdrawn {
            warrantor: caller,
            asset: asset.to_string(),
            amount,
        });
        tracing::debug!(warrantor = %caller, asset, %amount, "collateral withdrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openwarrant_ledger::InMemoryGateway;
    use openwarrant_types::{EventKind, WarrantConfig, WarrantError};

    fn setup() -> (WarrantEngine, InMemoryGateway, AccountId) {
        let engine = WarrantEngine::new(WarrantConfig::new(AccountId::new()));
        let mut gateway = InMemoryGateway::new();
        let warrantor = AccountId::new();
        gateway.fund(warrantor, "USDT", Decimal::new(1000, 0));
        (engine, gateway, warrantor)
    }

    #[test]
    fn deposit_credits_ledger_and_custody() {
        let (mut engine, mut gateway, warrantor) = setup();

        engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(600, 0))
            .unwrap();

        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::new(600, 0));
        assert_eq!(gateway.custody_balance("USDT"), Decimal::new(600, 0));
        assert_eq!(
            gateway.external_balance(warrantor, "USDT"),
            Decimal::new(400, 0)
        );
        assert_eq!(engine.events().of_kind(EventKind::Deposited).count(), 1);
    }

    #[test]
    fn deposit_failed_pull_has_no_effect() {
        let (mut engine, mut gateway, warrantor) = setup();

        let err = engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(2000, 0))
            .unwrap_err();
        assert!(matches!(err, WarrantError::TransferFailed { .. }));
        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::ZERO);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn withdraw_roundtrip() {
        let (mut engine, mut gateway, warrantor) = setup();
        engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(600, 0))
            .unwrap();

        engine
            .withdraw(&mut gateway, warrantor, "USDT", Decimal::new(600, 0))
            .unwrap();

        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::ZERO);
        assert_eq!(gateway.custody_balance("USDT"), Decimal::ZERO);
        assert_eq!(
            gateway.external_balance(warrantor, "USDT"),
            Decimal::new(1000, 0)
        );
        assert_eq!(engine.events().of_kind(EventKind::Withdrawn).count(), 1);
    }

    #[test]
    fn withdraw_over_balance_fails_unchanged() {
        let (mut engine, mut gateway, warrantor) = setup();
        engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(100, 0))
            .unwrap();

        let err = engine
            .withdraw(&mut gateway, warrantor, "USDT", Decimal::new(101, 0))
            .unwrap_err();
        assert!(matches!(err, WarrantError::InsufficientBalance { .. }));
        assert!(err.is_validation());

        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::new(100, 0));
        assert_eq!(gateway.custody_balance("USDT"), Decimal::new(100, 0));
        assert_eq!(engine.events().of_kind(EventKind::Withdrawn).count(), 0);
    }

    #[test]
    fn non_positive_amounts_rejected_at_the_boundary() {
        let (mut engine, mut gateway, warrantor) = setup();
        engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(10, 0))
            .unwrap();

        // A negative deposit or withdrawal must not invert into a
        // credit of the counterparty side.
        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let err = engine
                .deposit(&mut gateway, warrantor, "USDT", amount)
                .unwrap_err();
            assert!(matches!(err, WarrantError::InvalidAmount(_)), "{err}");

            let err = engine
                .withdraw(&mut gateway, warrantor, "USDT", amount)
                .unwrap_err();
            assert!(matches!(err, WarrantError::InvalidAmount(_)), "{err}");
        }

        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::new(10, 0));
        assert_eq!(gateway.custody_balance("USDT"), Decimal::new(10, 0));
        assert_eq!(engine.events().len(), 1); // the one valid deposit
    }

    #[test]
    fn withdraw_only_touches_own_balance() {
        let (mut engine, mut gateway, warrantor) = setup();
        let other = AccountId::new();
        engine
            .deposit(&mut gateway, warrantor, "USDT", Decimal::new(500, 0))
            .unwrap();

        let err = engine
            .withdraw(&mut gateway, other, "USDT", Decimal::ONE)
            .unwrap_err();
        assert!(matches!(err, WarrantError::InsufficientBalance { .. }));
        assert_eq!(engine.balance_of(warrantor, "USDT"), Decimal::new(500, 0));
    }
}
