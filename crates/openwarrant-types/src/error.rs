//! Error types for the OpenWarrant escrow ledger.
//!
//! All errors use the `WR_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by family:
//! - 1xx: Validation errors (bad state for the requested transition)
//! - 2xx: Authorization errors (missing role / capability)
//! - 3xx: External transfer errors (the asset mechanism rejected a pull/push)
//!
//! Every error is a hard failure: the triggering operation aborts with
//! zero state mutation and zero emitted event. The one deliberate
//! exception is `unlock`'s per-entry soft-skip, which never errors on an
//! ineligible id in the first place.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AccountId, RequestId, RequestStatus};

/// Central error enum for all OpenWarrant operations.
#[derive(Debug, Error)]
pub enum WarrantError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// A request with this id was already locked at some point.
    /// The id namespace is burn-on-use: this never succeeds later.
    #[error("WR_ERR_100: Request already submitted: {0}")]
    AlreadySubmitted(RequestId),

    /// Not enough available balance to perform the operation.
    #[error("WR_ERR_101: Insufficient available balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// The request is not in LOCKED status, so it cannot be disputed.
    #[error("WR_ERR_102: Request not locked: {id} is {status}")]
    NotLocked { id: RequestId, status: RequestStatus },

    /// The request is not in DISPUTED status, so it cannot be resolved.
    #[error("WR_ERR_103: Request not disputed: {id} is {status}")]
    NotDisputed { id: RequestId, status: RequestStatus },

    /// A status transition outside the lifecycle DAG was attempted.
    #[error("WR_ERR_104: Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    /// The amount is not strictly positive. A non-positive amount would
    /// turn every sufficiency check into a no-op and a debit into a
    /// credit, so it is rejected before any other validation.
    #[error("WR_ERR_105: Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// The warranty duration is outside the supported range.
    #[error("WR_ERR_106: Invalid warranty duration: {0} seconds")]
    InvalidDuration(u64),

    // =================================================================
    // Authorization Errors (2xx)
    // =================================================================
    /// The caller is not an active member of the supervisor set.
    #[error("WR_ERR_200: Not an active supervisor: {0}")]
    NotSupervisor(AccountId),

    /// The caller does not hold the dispute-resolver role.
    #[error("WR_ERR_201: Not the dispute resolver: {0}")]
    NotDisputeResolver(AccountId),

    /// The caller does not hold the admin role.
    #[error("WR_ERR_202: Not an admin: {0}")]
    NotAdmin(AccountId),

    // =================================================================
    // External Transfer Errors (3xx)
    // =================================================================
    /// The external asset mechanism rejected a pull or push.
    /// Propagates as a hard failure of the enclosing operation.
    #[error("WR_ERR_300: Asset transfer failed: {reason}")]
    TransferFailed { reason: String },
}

impl WarrantError {
    /// Whether this error belongs to the validation family (1xx).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::AlreadySubmitted(_)
                | Self::InsufficientBalance { .. }
                | Self::NotLocked { .. }
                | Self::NotDisputed { .. }
                | Self::InvalidTransition { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidDuration(_)
        )
    }

    /// Whether this error belongs to the authorization family (2xx).
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotSupervisor(_) | Self::NotDisputeResolver(_) | Self::NotAdmin(_)
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, WarrantError>;
