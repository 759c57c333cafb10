//! # openwarrant-types
//!
//! Shared types, errors, and configuration for the **OpenWarrant**
//! collateral escrow and dispute-arbitration ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`RequestId`]
//! - **Request model**: [`Request`], [`RequestStatus`]
//! - **Event model**: [`WarrantEvent`], [`EventKind`], [`EventLog`]
//! - **Configuration**: [`WarrantConfig`]
//! - **Errors**: [`WarrantError`] with `WR_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod request;

// Re-export all primary types at crate root for ergonomic imports:
//   use openwarrant_types::{Request, RequestStatus, WarrantError, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use request::*;

/// Type alias for asset identifiers (e.g., "BTC", "USDT", "ETH").
pub type Asset = String;

// Constants are accessed via `openwarrant_types::constants::FOO`
// (not re-exported to avoid name collisions).
