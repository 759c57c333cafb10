//! Configuration for the OpenWarrant engine.
//!
//! Both knobs are shared, externally mutable configuration read at the
//! moment of use: an in-flight request measures its expiry against
//! whatever `warranty_duration` is current when `unlock` executes, not
//! the value at lock time.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{constants, AccountId};

/// Process-wide engine configuration, mutable by the admin role at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantConfig {
    /// Minimum elapsed seconds after locking before collateral becomes
    /// reclaimable, absent a dispute.
    pub warranty_duration_secs: u64,
    /// Destination receiving collateral from confirmed disputes.
    pub seized_wallet: AccountId,
}

impl WarrantConfig {
    /// Create a config with the default warranty window.
    #[must_use]
    pub fn new(seized_wallet: AccountId) -> Self {
        Self {
            warranty_duration_secs: constants::DEFAULT_WARRANTY_DURATION_SECS,
            seized_wallet,
        }
    }

    /// The warranty window as a [`chrono::Duration`].
    ///
    /// Values beyond what `chrono` can represent saturate to
    /// [`Duration::MAX`] instead of wrapping or panicking; the admin
    /// surface rejects such values before they are ever stored.
    #[must_use]
    pub fn warranty_duration(&self) -> Duration {
        i64::try_from(self.warranty_duration_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}
