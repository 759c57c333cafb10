//! # Request — the collateral commitment primitive
//!
//! A `Request` records one collateral commitment: a warrantor staked
//! `amount` of `asset` behind a data-delivery request at `lock_time`.
//!
//! ## State Machine
//!
//! ```text
//!                  ┌──────────┐
//!        unlock    │ UNLOCKED │◀─────────── unlock (after expiry)
//!       ┌─────────▶└──────────┘                  │
//!  ┌────┴───┐                          ┌─────────┴────────┐
//!  │ LOCKED │                          │ DISPUTE_REJECTED │
//!  └────┬───┘                          └──────────────────┘
//!       │ dispute                                ▲
//!       ▼                                        │ resolve(rejected)
//!  ┌──────────┐   resolve(confirmed)   ┌─────────┴─────────┐
//!  │ DISPUTED ├───────────────────────▶│ DISPUTE_CONFIRMED │
//!  └──────────┘          ▲             └───────────────────┘
//!                        └── seizes the collateral
//! ```
//!
//! ## Safety Properties
//!
//! - **Lock-once**: an id transitions out of UNINITIALIZED at most once
//! - **Monotonic**: transitions only move forward along the DAG above
//! - **Permanent**: records are history and are never deleted
//! - **Anchored expiry**: `lock_time` is set at creation and never updated;
//!   every expiry check measures from this original value

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// The lifecycle status of a request.
///
/// `Uninitialized` is the status of an id no record exists for; the
/// registry reports it for absent entries so the lock-once guard can be
/// phrased as a plain status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// No request was ever locked under this id.
    Uninitialized,
    /// Collateral is locked. Disputable; reclaimable after expiry.
    Locked,
    /// Collateral returned to the warrantor. **Terminal.**
    Unlocked,
    /// A supervisor contested the delivery; collateral is frozen.
    Disputed,
    /// The dispute stood; collateral was seized. **Terminal.**
    DisputeConfirmed,
    /// The dispute was thrown out; collateral awaits normal expiry.
    DisputeRejected,
}

impl RequestStatus {
    /// Can this status transition to the given target?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Uninitialized, Self::Locked)
                | (Self::Locked, Self::Unlocked | Self::Disputed)
                | (Self::Disputed, Self::DisputeConfirmed | Self::DisputeRejected)
                | (Self::DisputeRejected, Self::Unlocked)
        )
    }

    /// Whether no further transition is possible from this status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Unlocked | Self::DisputeConfirmed)
    }

    /// Whether the collateral behind this status is still held in custody
    /// on the warrantor's behalf (neither returned nor seized).
    #[must_use]
    pub fn holds_collateral(&self) -> bool {
        matches!(self, Self::Locked | Self::Disputed | Self::DisputeRejected)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "UNINITIALIZED"),
            Self::Locked => write!(f, "LOCKED"),
            Self::Unlocked => write!(f, "UNLOCKED"),
            Self::Disputed => write!(f, "DISPUTED"),
            Self::DisputeConfirmed => write!(f, "DISPUTE_CONFIRMED"),
            Self::DisputeRejected => write!(f, "DISPUTE_REJECTED"),
        }
    }
}

/// A single collateral commitment, keyed by a caller-chosen
/// [`RequestId`](crate::RequestId).
///
/// All fields except `status` and `claimer` are immutable once the record
/// is created. The record itself is permanent history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Identity that locked the collateral. Set once.
    pub warrantor: AccountId,
    /// Collateral asset identifier.
    pub asset: String,
    /// Quantity locked. Leaves the ledger exactly once (at lock) and
    /// returns at most once (unlock) or is seized exactly once (confirmed
    /// dispute) — never both, never twice.
    pub amount: Decimal,
    /// Opaque application context. Not interpreted by the core.
    pub app_id: String,
    /// Opaque user context. Not interpreted by the core.
    pub user: AccountId,
    /// Timestamp at creation. The expiry anchor, never updated.
    pub lock_time: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// The supervisor who filed a dispute. `None` until disputed.
    pub claimer: Option<AccountId>,
}

impl Request {
    /// Whether the warranty window has elapsed, measured from the
    /// original `lock_time` against the duration current at call time.
    /// A window so large the expiry timestamp overflows reads as never
    /// expired.
    #[must_use]
    pub fn is_expired(&self, warranty_duration: Duration, now: DateTime<Utc>) -> bool {
        self.lock_time
            .checked_add_signed(warranty_duration)
            .is_some_and(|expiry| expiry <= now)
    }

    /// Whether this request may be released back to the warrantor:
    /// LOCKED or DISPUTE_REJECTED, with the warranty window elapsed.
    #[must_use]
    pub fn is_releasable(&self, warranty_duration: Duration, now: DateTime<Utc>) -> bool {
        matches!(
            self.status,
            RequestStatus::Locked | RequestStatus::DisputeRejected
        ) && self.is_expired(warranty_duration, now)
    }

    /// Attempt a status transition, enforcing the lifecycle DAG.
    ///
    /// # Errors
    /// Returns [`WarrantError::InvalidTransition`](crate::WarrantError::InvalidTransition)
    /// if the move is not an edge of the DAG.
    pub fn transition(&mut self, target: RequestStatus) -> crate::Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(crate::WarrantError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

/// Dummy request for testing. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl Request {
    /// Create a freshly-locked dummy request for unit tests.
    pub fn dummy(warrantor: AccountId, asset: &str, amount: Decimal) -> Self {
        Self {
            warrantor,
            asset: asset.to_string(),
            amount,
            app_id: "test-app".to_string(),
            user: AccountId::new(),
            lock_time: Utc::now(),
            status: RequestStatus::Locked,
            claimer: None,
        }
    }
}
