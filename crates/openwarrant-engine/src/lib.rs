//! # openwarrant-engine
//!
//! The request lifecycle state machine of the OpenWarrant escrow ledger:
//! collateral locking, permissionless expiry sweeps, supervisor disputes,
//! and resolver adjudication with seizure.
//!
//! ## Architecture
//!
//! [`WarrantEngine`] owns all persisted state (balance ledger, request
//! registry, config, event log). External collaborators — the asset
//! mechanism and the permission store — are injected per call as trait
//! objects, so every handler is a deterministic function of state and
//! inputs. Operations are split by concern:
//!
//! 1. **vault**: deposit / withdraw at the custody boundary
//! 2. **lock**: new collateral commitments with rolling collateral
//! 3. **unlock**: idempotent, permissionless batch release of expirations
//! 4. **dispute**: supervisor freeze and resolver adjudication / seizure
//! 5. **admin**: config mutation and the emergency custody escape hatch
//!
//! ## Request Flow
//!
//! ```text
//! deposit → lock ──────────────────────────▶ unlock (after expiry)
//!             │                                ▲
//!             ▼                                │ resolve(rejected)
//!          dispute ──▶ resolve(confirmed) ⇒ seizure
//! ```
//!
//! Every operation mutates internal ledger/registry state before issuing
//! any external transfer, so a reentrant callback from the asset
//! mechanism can never observe stale balances or statuses.

pub mod admin;
pub mod dispute;
pub mod engine;
pub mod lock;
pub mod unlock;
pub mod vault;

pub use engine::WarrantEngine;
