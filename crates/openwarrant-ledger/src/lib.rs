//! # openwarrant-ledger
//!
//! Balance ledger, request registry, and collaborator contracts for the
//! OpenWarrant escrow engine.
//!
//! ## Architecture
//!
//! 1. **BalanceLedger**: per-(warrantor, asset) available balances —
//!    the source of truth every debit is preconditioned against
//! 2. **RequestRegistry**: insert-once request records plus per-warrantor
//!    append-only id history
//! 3. **AssetGateway**: contract to the external asset mechanism
//!    (pull-transfer-in, push-transfer-out, custody query)
//! 4. **PermissionStore**: contract to the external role store
//!    (admin / supervisor / dispute-resolver capability checks)
//!
//! The engine crate composes these into the request lifecycle state
//! machine; nothing in this crate performs a lifecycle transition on
//! its own initiative.

pub mod balance_ledger;
pub mod custody;
pub mod permissions;
pub mod registry;

pub use balance_ledger::BalanceLedger;
pub use custody::AssetGateway;
pub use permissions::{InMemoryPermissions, PermissionStore};
pub use registry::RequestRegistry;

#[cfg(any(test, feature = "test-helpers"))]
pub use custody::InMemoryGateway;
