//! Available-balance accounting for warrantors.
//!
//! Tracks per-(warrantor, asset) available balances. Locked collateral is
//! *not* tracked here — the amount behind a LOCKED/DISPUTED request lives
//! only on the request record, and re-enters this ledger at unlock time
//! or never (seizure). All mutations are atomic: either the full
//! operation succeeds or the balance is unchanged.

use std::collections::HashMap;

use openwarrant_types::{AccountId, Asset, Result, WarrantError};
use rust_decimal::Decimal;

/// Source of truth for warrantors' available balances.
///
/// Entries are created implicitly at first credit and never destroyed;
/// a drained entry simply reads zero. Balances can never go negative:
/// every debit is preconditioned on sufficiency.
#[derive(Debug, Clone, Default)]
pub struct BalanceLedger {
    /// Per-(warrantor, asset) available balances.
    balances: HashMap<(AccountId, Asset), Decimal>,
}

impl BalanceLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Credit available balance (deposit, unlock).
    pub fn credit(&mut self, warrantor: AccountId, asset: &str, amount: Decimal) {
        let entry = self
            .balances
            .entry((warrantor, asset.to_string()))
            .or_default();
        *entry += amount;
    }

    /// Debit available balance (withdraw, lock).
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if the entry does not cover `amount`;
    /// the balance is left unchanged in that case.
    pub fn debit(&mut self, warrantor: AccountId, asset: &str, amount: Decimal) -> Result<()> {
        let entry = self
            .balances
            .get_mut(&(warrantor, asset.to_string()))
            .ok_or(WarrantError::InsufficientBalance {
                needed: amount,
                available: Decimal::ZERO,
            })?;

        if *entry < amount {
            return Err(WarrantError::InsufficientBalance {
                needed: amount,
                available: *entry,
            });
        }

        *entry -= amount;
        Ok(())
    }

    /// The available balance for a (warrantor, asset) pair.
    #[must_use]
    pub fn balance(&self, warrantor: AccountId, asset: &str) -> Decimal {
        self.balances
            .get(&(warrantor, asset.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all warrantors' available balances for an asset.
    #[must_use]
    pub fn total(&self, asset: &str) -> Decimal {
        self.balances
            .iter()
            .filter(|((_, a), _)| a == asset)
            .map(|(_, amount)| *amount)
            .sum()
    }
}
