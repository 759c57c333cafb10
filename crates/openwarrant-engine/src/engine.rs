//! The engine state: ledger, registry, configuration, and event log.

use chrono::{DateTime, Utc};
use openwarrant_ledger::{BalanceLedger, RequestRegistry};
use openwarrant_types::{
    AccountId, EventLog, Request, RequestId, RequestStatus, WarrantConfig,
};
use rust_decimal::Decimal;

/// Owns all persisted state of the escrow ledger and exposes every
/// public operation as a method.
///
/// Each operation executes as a single indivisible unit against this
/// state: callers hold `&mut self` for its duration, and on any error
/// the state is exactly as before the call. External collaborators
/// (asset gateway, permission store) are injected per call, never owned,
/// so handlers stay deterministic functions of state and inputs.
#[derive(Debug)]
pub struct WarrantEngine {
    pub(crate) ledger: BalanceLedger,
    pub(crate) registry: RequestRegistry,
    pub(crate) config: WarrantConfig,
    pub(crate) events: EventLog,
}

impl WarrantEngine {
    /// Create an engine with empty ledger and registry.
    #[must_use]
    pub fn new(config: WarrantConfig) -> Self {
        Self {
            ledger: BalanceLedger::new(),
            registry: RequestRegistry::new(),
            config,
            events: EventLog::new(),
        }
    }

    /// A warrantor's available balance for an asset.
    #[must_use]
    pub fn balance_of(&self, warrantor: AccountId, asset: &str) -> Decimal {
        self.ledger.balance(warrantor, asset)
    }

    /// Look up a request record.
    #[must_use]
    pub fn request(&self, id: &RequestId) -> Option<&Request> {
        self.registry.get(id)
    }

    /// The status of a request id (`Uninitialized` if never locked).
    #[must_use]
    pub fn status_of(&self, id: &RequestId) -> RequestStatus {
        self.registry.status_of(id)
    }

    /// Every id a warrantor has ever locked, in lock order.
    #[must_use]
    pub fn history(&self, warrantor: AccountId) -> &[RequestId] {
        self.registry.history(warrantor)
    }

    /// Collateral of an asset still held behind live requests.
    #[must_use]
    pub fn held_collateral(&self, asset: &str) -> Decimal {
        self.registry.held_collateral(asset)
    }

    /// The append-only audit trail.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &WarrantConfig {
        &self.config
    }

    /// The current warranty window, read at the moment of use.
    #[must_use]
    pub(crate) fn warranty_duration(&self) -> chrono::Duration {
        self.config.warranty_duration()
    }

    /// Whether a request is releasable at `now` under the current window.
    #[must_use]
    pub fn is_releasable(&self, id: &RequestId, now: DateTime<Utc>) -> bool {
        self.registry
            .get(id)
            .is_some_and(|req| req.is_releasable(self.warranty_duration(), now))
    }
}
