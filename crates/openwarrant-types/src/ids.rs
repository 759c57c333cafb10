//! Globally unique identifiers used throughout OpenWarrant.
//!
//! Account identities use UUIDv7 for time-ordered lexicographic sorting.
//! `RequestId` is caller-chosen and is conventionally the SHA-256 content
//! hash of the request parameters, so two honest parties deriving the id
//! from the same parameters agree on it without coordination.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for an on-ledger identity: warrantor, supervisor,
/// resolver, admin, or the seized-assets wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RequestId
// ---------------------------------------------------------------------------

/// Caller-chosen unique identifier of a collateral request (32 bytes).
///
/// The id namespace is first-come-first-served: once a request is locked
/// under an id, that id is burned forever regardless of later transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RequestId(pub [u8; 32]);

impl RequestId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a `RequestId` as the SHA-256 hash of arbitrary request
    /// parameters. This is the conventional way callers mint ids.
    #[must_use]
    pub fn digest(params: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openwarrant:request_id:v1:");
        hasher.update(params);
        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_uniqueness() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn account_id_ordering() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert!(a < b);
    }

    #[test]
    fn request_id_digest_deterministic() {
        let a = RequestId::digest(b"app-1:user-7:payload");
        let b = RequestId::digest(b"app-1:user-7:payload");
        assert_eq!(a, b);
        let c = RequestId::digest(b"app-1:user-7:other");
        assert_ne!(a, c);
    }

    #[test]
    fn request_id_display_is_prefixed_hex() {
        let id = RequestId::from_bytes([0xAB; 32]);
        assert_eq!(format!("{id}"), "req:abababababababab");
        assert_eq!(id.short(), "abababab");
    }

    #[test]
    fn serde_roundtrips() {
        let acct = AccountId::new();
        let json = serde_json::to_string(&acct).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(acct, back);

        let req = RequestId::digest(b"x");
        let json = serde_json::to_string(&req).unwrap();
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
