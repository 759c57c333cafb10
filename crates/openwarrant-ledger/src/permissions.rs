//! Collaborator contract for the external role/permission store.
//!
//! The engine only performs capability checks: is the caller an admin,
//! an active supervisor, or the dispute resolver. Checks are live —
//! nothing is snapshotted at lock or dispute time, so removing a
//! supervisor after they file a dispute does not retroactively
//! invalidate it.

use std::collections::HashSet;

use openwarrant_types::{AccountId, Result, WarrantError};

/// Capability checks the engine requires from the permission store.
pub trait PermissionStore {
    /// Whether `id` holds the admin role.
    fn is_admin(&self, id: AccountId) -> bool;
    /// Whether `id` is currently an active supervisor.
    fn is_supervisor(&self, id: AccountId) -> bool;
    /// Whether `id` holds the dispute-resolver role.
    fn is_dispute_resolver(&self, id: AccountId) -> bool;
}

/// Reference permission store backed by in-memory role sets.
///
/// Supervisor membership is administered here, guarded by the admin
/// role; the engine consults membership live on every `dispute` call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPermissions {
    admins: HashSet<AccountId>,
    supervisors: HashSet<AccountId>,
    resolvers: HashSet<AccountId>,
}

impl InMemoryPermissions {
    /// Create a store with one initial admin.
    #[must_use]
    pub fn new(admin: AccountId) -> Self {
        let mut admins = HashSet::new();
        admins.insert(admin);
        Self {
            admins,
            supervisors: HashSet::new(),
            resolvers: HashSet::new(),
        }
    }

    /// Grant the admin role. Admin-only.
    ///
    /// # Errors
    /// Returns `NotAdmin` if `caller` does not hold the admin role.
    pub fn grant_admin(&mut self, caller: AccountId, id: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.admins.insert(id);
        Ok(())
    }

    /// Grant the dispute-resolver role. Admin-only.
    ///
    /// # Errors
    /// Returns `NotAdmin` if `caller` does not hold the admin role.
    pub fn grant_resolver(&mut self, caller: AccountId, id: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.resolvers.insert(id);
        Ok(())
    }

    /// Add a supervisor to the active set. Admin-only.
    ///
    /// # Errors
    /// Returns `NotAdmin` if `caller` does not hold the admin role.
    pub fn add_supervisor(&mut self, caller: AccountId, id: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.supervisors.insert(id);
        Ok(())
    }

    /// Remove a supervisor from the active set. Admin-only.
    ///
    /// Disputes the supervisor already filed remain valid; only future
    /// `dispute` calls are affected.
    ///
    /// # Errors
    /// Returns `NotAdmin` if `caller` does not hold the admin role.
    pub fn remove_supervisor(&mut self, caller: AccountId, id: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.supervisors.remove(&id);
        Ok(())
    }

    /// Number of active supervisors.
    #[must_use]
    pub fn supervisor_count(&self) -> usize {
        self.supervisors.len()
    }

    fn require_admin(&self, caller: AccountId) -> Result<()> {
        if self.admins.contains(&caller) {
            Ok(())
        } else {
            Err(WarrantError::NotAdmin(caller))
        }
    }
}

impl PermissionStore for InMemoryPermissions {
    fn is_admin(&self, id: AccountId) -> bool {
        self.admins.contains(&id)
    }

    fn is_supervisor(&self, id: AccountId) -> bool {
        self.supervisors.contains(&id)
    }

    fn is_dispute_resolver(&self, id: AccountId) -> bool {
        self.resolvers.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_admin_holds_role() {
        let admin = AccountId::new();
        let store = InMemoryPermissions::new(admin);
        assert!(store.is_admin(admin));
        assert!(!store.is_admin(AccountId::new()));
    }

    #[test]
    fn admin_manages_supervisor_set() {
        let admin = AccountId::new();
        let supervisor = AccountId::new();
        let mut store = InMemoryPermissions::new(admin);

        store.add_supervisor(admin, supervisor).unwrap();
        assert!(store.is_supervisor(supervisor));
        assert_eq!(store.supervisor_count(), 1);

        store.remove_supervisor(admin, supervisor).unwrap();
        assert!(!store.is_supervisor(supervisor));
        assert_eq!(store.supervisor_count(), 0);
    }

    #[test]
    fn non_admin_cannot_mutate_roles() {
        let admin = AccountId::new();
        let outsider = AccountId::new();
        let mut store = InMemoryPermissions::new(admin);

        let err = store.add_supervisor(outsider, outsider).unwrap_err();
        assert!(matches!(err, WarrantError::NotAdmin(id) if id == outsider));
        assert!(err.is_authorization());

        let err = store.grant_resolver(outsider, outsider).unwrap_err();
        assert!(matches!(err, WarrantError::NotAdmin(_)));
    }

    #[test]
    fn resolver_role_is_distinct() {
        let admin = AccountId::new();
        let resolver = AccountId::new();
        let mut store = InMemoryPermissions::new(admin);

        store.grant_resolver(admin, resolver).unwrap();
        assert!(store.is_dispute_resolver(resolver));
        assert!(!store.is_supervisor(resolver));
        assert!(!store.is_admin(resolver));
    }

    #[test]
    fn removing_absent_supervisor_is_noop() {
        let admin = AccountId::new();
        let mut store = InMemoryPermissions::new(admin);
        store.remove_supervisor(admin, AccountId::new()).unwrap();
        assert_eq!(store.supervisor_count(), 0);
    }
}
