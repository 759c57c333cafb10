//! Collaborator contract for the external fungible-asset mechanism.
//!
//! The engine never models the asset mechanism's internal accounting —
//! it only pulls collateral into custody, pushes it back out, and can
//! query the custody balance. Because the mechanism could in principle
//! call back into the engine before a pull/push returns, every engine
//! operation mutates internal state before issuing the external call.

use openwarrant_types::{AccountId, Result};
use rust_decimal::Decimal;

/// External asset-transfer contract required by the engine.
///
/// Implementations wrap whatever actually moves value: a token contract,
/// a bank rail, a chain RPC. Errors from `pull`/`push` propagate as hard
/// failures of the enclosing engine operation.
pub trait AssetGateway {
    /// Pull `amount` of `asset` from `from` into engine custody.
    ///
    /// # Errors
    /// Returns `TransferFailed` if the mechanism rejects the pull
    /// (e.g., insufficient allowance or balance in the asset itself).
    fn pull(&mut self, asset: &str, from: AccountId, amount: Decimal) -> Result<()>;

    /// Push `amount` of `asset` out of engine custody to `to`.
    ///
    /// # Errors
    /// Returns `TransferFailed` if the mechanism rejects the push.
    fn push(&mut self, asset: &str, to: AccountId, amount: Decimal) -> Result<()>;

    /// The amount of `asset` currently held in engine custody.
    fn custody_balance(&self, asset: &str) -> Decimal;
}

/// In-memory asset mechanism for tests. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
pub use test_gateway::InMemoryGateway;

#[cfg(any(test, feature = "test-helpers"))]
mod test_gateway {
    use std::collections::HashMap;

    use openwarrant_types::{AccountId, Asset, Result, WarrantError};
    use rust_decimal::Decimal;

    use super::AssetGateway;

    /// A toy asset mechanism holding external account balances and a
    /// single custody pot per asset.
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryGateway {
        /// Balances held outside custody, per (account, asset).
        external: HashMap<(AccountId, Asset), Decimal>,
        /// Custody pot per asset.
        custody: HashMap<Asset, Decimal>,
    }

    impl InMemoryGateway {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed an external account balance (the faucet).
        pub fn fund(&mut self, account: AccountId, asset: &str, amount: Decimal) {
            *self
                .external
                .entry((account, asset.to_string()))
                .or_default() += amount;
        }

        /// An account's balance outside custody.
        #[must_use]
        pub fn external_balance(&self, account: AccountId, asset: &str) -> Decimal {
            self.external
                .get(&(account, asset.to_string()))
                .copied()
                .unwrap_or(Decimal::ZERO)
        }
    }

    impl AssetGateway for InMemoryGateway {
        fn pull(&mut self, asset: &str, from: AccountId, amount: Decimal) -> Result<()> {
            let balance = self
                .external
                .entry((from, asset.to_string()))
                .or_default();
            if *balance < amount {
                return Err(WarrantError::TransferFailed {
                    reason: format!(
                        "pull of {amount} {asset} exceeds external balance {balance}"
                    ),
                });
            }
            *balance -= amount;
            *self.custody.entry(asset.to_string()).or_default() += amount;
            Ok(())
        }

        fn push(&mut self, asset: &str, to: AccountId, amount: Decimal) -> Result<()> {
            let pot = self.custody.entry(asset.to_string()).or_default();
            if *pot < amount {
                return Err(WarrantError::TransferFailed {
                    reason: format!("push of {amount} {asset} exceeds custody {pot}"),
                });
            }
            *pot -= amount;
            *self.external.entry((to, asset.to_string())).or_default() += amount;
            Ok(())
        }

        fn custody_balance(&self, asset: &str) -> Decimal {
            self.custody.get(asset).copied().unwrap_or(Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openwarrant_types::WarrantError;

    #[test]
    fn pull_moves_external_to_custody() {
        let mut gateway = InMemoryGateway::new();
        let account = AccountId::new();
        gateway.fund(account, "USDT", Decimal::new(100, 0));

        gateway.pull("USDT", account, Decimal::new(60, 0)).unwrap();
        assert_eq!(gateway.external_balance(account, "USDT"), Decimal::new(40, 0));
        assert_eq!(gateway.custody_balance("USDT"), Decimal::new(60, 0));
    }

    #[test]
    fn pull_beyond_balance_fails() {
        let mut gateway = InMemoryGateway::new();
        let account = AccountId::new();
        gateway.fund(account, "USDT", Decimal::new(10, 0));

        let err = gateway
            .pull("USDT", account, Decimal::new(11, 0))
            .unwrap_err();
        assert!(matches!(err, WarrantError::TransferFailed { .. }));
        assert_eq!(gateway.external_balance(account, "USDT"), Decimal::new(10, 0));
    }

    #[test]
    fn push_moves_custody_to_external() {
        let mut gateway = InMemoryGateway::new();
        let depositor = AccountId::new();
        let recipient = AccountId::new();
        gateway.fund(depositor, "BTC", Decimal::ONE);
        gateway.pull("BTC", depositor, Decimal::ONE).unwrap();

        gateway.push("BTC", recipient, Decimal::ONE).unwrap();
        assert_eq!(gateway.custody_balance("BTC"), Decimal::ZERO);
        assert_eq!(gateway.external_balance(recipient, "BTC"), Decimal::ONE);
    }

    #[test]
    fn push_beyond_custody_fails() {
        let mut gateway = InMemoryGateway::new();
        let err = gateway
            .push("BTC", AccountId::new(), Decimal::ONE)
            .unwrap_err();
        assert!(matches!(err, WarrantError::TransferFailed { .. }));
    }
}
