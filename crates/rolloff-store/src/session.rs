//! # Session Store
//!
//! Holds the authenticated session and mediates admin view-switching.
//!
//! ## Why a Trait?
//! The source dashboard kept its session in a process-wide key-value
//! store with manual JSON (de)serialization and a silent fallback to
//! "not signed in" on parse failure. Here the storage mechanism is an
//! explicit capability — `get`/`set`/`clear` — injected into whatever
//! calls the authorizer, so the decision logic in rolloff-core never
//! touches storage at all. The in-memory implementation below is all a
//! single-process dashboard needs; a shell wanting real persistence
//! implements the same trait over its own storage.

use std::sync::Mutex;

use tracing::debug;

use rolloff_core::{AuthzError, Role, Session};

/// Storage capability for the current session.
pub trait SessionStore {
    /// Returns the current session, if signed in.
    fn get(&self) -> Option<Session>;

    /// Replaces the current session.
    fn set(&self, session: Session);

    /// Signs out: destroys the session, override included.
    fn clear(&self);
}

/// In-memory session store for a single-process dashboard.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        InMemorySessionStore {
            session: Mutex::new(None),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.session.lock().expect("session mutex poisoned").clone()
    }

    fn set(&self, session: Session) {
        *self.session.lock().expect("session mutex poisoned") = Some(session);
    }

    fn clear(&self) {
        *self.session.lock().expect("session mutex poisoned") = None;
    }
}

// =============================================================================
// Session Operations
// =============================================================================

/// Signs a user in, creating a fresh session with no view override.
pub fn login(store: &dyn SessionStore, role: Role) -> Session {
    debug!(?role, "login");
    let session = Session::new(role);
    store.set(session.clone());
    session
}

/// Signs the current user out.
pub fn logout(store: &dyn SessionStore) {
    debug!("logout");
    store.clear();
}

/// Switches the admin's view to another role.
///
/// Stores the updated session only when the core approves the switch;
/// a denied attempt leaves the stored session untouched.
pub fn switch_view(store: &dyn SessionStore, target: Role) -> Result<Session, AuthzError> {
    let mut session = store.get().ok_or_else(|| AuthzError::PermissionDenied {
        role: target,
        action: "switch view without a session".to_string(),
    })?;

    session.switch_view(target)?;
    debug!(?target, "view switched");
    store.set(session.clone());
    Ok(session)
}

/// Clears the admin's view override.
pub fn reset_view(store: &dyn SessionStore) {
    if let Some(mut session) = store.get() {
        session.reset_view();
        debug!("view reset");
        store.set(session);
    }
}

/// The effective role of the current session, if signed in.
pub fn effective_role(store: &dyn SessionStore) -> Option<Role> {
    store.get().map(|s| s.effective_role())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let store = InMemorySessionStore::new();
        assert!(store.get().is_none());

        login(&store, Role::OfficeStaff);
        assert_eq!(effective_role(&store), Some(Role::OfficeStaff));

        logout(&store);
        assert!(store.get().is_none());
        assert_eq!(effective_role(&store), None);
    }

    #[test]
    fn test_admin_switch_and_reset() {
        let store = InMemorySessionStore::new();
        login(&store, Role::Admin);

        let session = switch_view(&store, Role::Driver).unwrap();
        assert_eq!(session.effective_role(), Role::Driver);
        assert_eq!(effective_role(&store), Some(Role::Driver));

        reset_view(&store);
        assert_eq!(effective_role(&store), Some(Role::Admin));
    }

    #[test]
    fn test_denied_switch_leaves_store_untouched() {
        let store = InMemorySessionStore::new();
        login(&store, Role::Driver);

        assert!(switch_view(&store, Role::Admin).is_err());
        let session = store.get().unwrap();
        assert_eq!(session.view_override, None);
        assert_eq!(session.effective_role(), Role::Driver);
    }

    #[test]
    fn test_switch_without_session() {
        let store = InMemorySessionStore::new();
        assert!(switch_view(&store, Role::Driver).is_err());
    }

    #[test]
    fn test_logout_clears_override() {
        let store = InMemorySessionStore::new();
        login(&store, Role::Admin);
        switch_view(&store, Role::Customer).unwrap();

        logout(&store);
        // A fresh login starts with no override
        let session = login(&store, Role::Admin);
        assert_eq!(session.view_override, None);
    }
}
