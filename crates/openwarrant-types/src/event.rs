//! Event types for the OpenWarrant audit trail.
//!
//! Every successful state-changing operation appends a [`WarrantEvent`]
//! to an [`EventLog`]. The log is the outbound notification channel of
//! the core: append-only, never truncated, decoupled from any transport.
//! Failed operations append nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, RequestId};

/// Discriminant of a [`WarrantEvent`], for filtering and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Deposited,
    Withdrawn,
    Locked,
    Unlocked,
    Disputed,
    DisputeResolved,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposited => write!(f, "DEPOSITED"),
            Self::Withdrawn => write!(f, "WITHDRAWN"),
            Self::Locked => write!(f, "LOCKED"),
            Self::Unlocked => write!(f, "UNLOCKED"),
            Self::Disputed => write!(f, "DISPUTED"),
            Self::DisputeResolved => write!(f, "DISPUTE_RESOLVED"),
        }
    }
}

/// A single audit-trail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantEvent {
    /// A warrantor deposited collateral into custody.
    Deposited {
        warrantor: AccountId,
        asset: String,
        amount: Decimal,
    },
    /// A warrantor withdrew available balance out of custody.
    Withdrawn {
        warrantor: AccountId,
        asset: String,
        amount: Decimal,
    },
    /// Collateral was locked behind a request.
    Locked {
        warrantor: AccountId,
        asset: String,
        amount: Decimal,
        app_id: String,
        user: AccountId,
        request_id: RequestId,
    },
    /// An expired request's collateral returned to its warrantor.
    Unlocked {
        warrantor: AccountId,
        asset: String,
        amount: Decimal,
        app_id: String,
        user: AccountId,
        request_id: RequestId,
    },
    /// A supervisor contested a locked request.
    Disputed {
        request_id: RequestId,
        supervisor: AccountId,
    },
    /// The resolver adjudicated a dispute.
    DisputeResolved {
        request_id: RequestId,
        confirmed: bool,
    },
}

impl WarrantEvent {
    /// The discriminant of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Deposited { .. } => EventKind::Deposited,
            Self::Withdrawn { .. } => EventKind::Withdrawn,
            Self::Locked { .. } => EventKind::Locked,
            Self::Unlocked { .. } => EventKind::Unlocked,
            Self::Disputed { .. } => EventKind::Disputed,
            Self::DisputeResolved { .. } => EventKind::DisputeResolved,
        }
    }
}

/// Append-only audit trail the engine writes to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<WarrantEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an event. The only mutation the log supports.
    pub fn record(&mut self, event: WarrantEvent) {
        self.entries.push(event);
    }

    /// All entries, in emission order.
    #[must_use]
    pub fn entries(&self) -> &[WarrantEvent] {
        &self.entries
    }

    /// Entries of one kind, in emission order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &WarrantEvent> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
