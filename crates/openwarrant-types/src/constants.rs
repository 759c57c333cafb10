//! System-wide constants for the OpenWarrant escrow ledger.

/// Default warranty window in seconds: how long after locking before
/// collateral becomes reclaimable, absent a dispute.
pub const DEFAULT_WARRANTY_DURATION_SECS: u64 = 600;

/// Upper bound on the configurable warranty window (ten years).
/// Keeps `lock_time + window` arithmetic far from any overflow.
pub const MAX_WARRANTY_DURATION_SECS: u64 = 315_360_000;
