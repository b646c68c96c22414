//! # Authorization Module
//!
//! Resolves the effective role of a session and answers allow/deny for
//! route guards and menu builders.
//!
//! ## Admin View-Switching State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Session State Machine                                 │
//! │                                                                         │
//! │            login(Admin)                login(NonAdmin)                  │
//! │                 │                            │                          │
//! │                 ▼                            ▼                          │
//! │  ┌──────────────────────┐        ┌──────────────────────┐               │
//! │  │ Admin, override=None │        │ NonAdmin (terminal   │               │
//! │  └──────────┬───────────┘        │ until logout)        │               │
//! │             │      ▲             └──────────────────────┘               │
//! │  switch_view(R)    │ reset_view / switch_view(Admin)                    │
//! │             ▼      │                                                    │
//! │  ┌──────────────────────┐                                               │
//! │  │ Admin, override=R    │   effective role = R                          │
//! │  └──────────────────────┘                                               │
//! │                                                                         │
//! │  Only Admin sessions have outgoing switch/reset transitions.            │
//! │  logout (handled by the session store) destroys the session.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Menu Gating
//! The source dashboard branched per role in every menu builder. Here the
//! role → capability mapping is a single static table, so "every role has
//! a defined entry" is a one-loop test.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AuthzError;

// =============================================================================
// Role
// =============================================================================

/// A user role in the dispatch dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, plus the ability to preview the UI as any other role.
    Admin,
    /// Office staff: customers, scheduling, invoicing, inventory.
    OfficeStaff,
    /// Drivers: assigned jobs, status updates, photo documentation.
    Driver,
    /// Customers: their own rentals and invoices.
    Customer,
}

impl Role {
    /// All roles, for exhaustive iteration (menu builders, tests).
    pub const ALL: [Role; 4] = [Role::Admin, Role::OfficeStaff, Role::Driver, Role::Customer];

    /// Checks membership of this role in an allowed set.
    ///
    /// Used by every route guard and menu-item filter: the guard lists
    /// which roles may see a route, and the session's *effective* role is
    /// checked against that list.
    #[inline]
    pub fn can_access(&self, allowed: &[Role]) -> bool {
        allowed.contains(self)
    }

    /// Returns the capabilities this role holds.
    ///
    /// A static lookup table rather than per-call-site branching; Admin
    /// holds every capability.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin => &Capability::ALL,
            Role::OfficeStaff => &[
                Capability::ManageCustomers,
                Capability::ScheduleJobs,
                Capability::ManageInvoices,
                Capability::ManageInventory,
            ],
            Role::Driver => &[
                Capability::ViewAssignedJobs,
                Capability::UpdateJobStatus,
                Capability::CapturePhotos,
            ],
            Role::Customer => &[
                Capability::ViewOwnRentals,
                Capability::ViewOwnInvoices,
                Capability::RequestService,
            ],
        }
    }

    /// Checks whether this role holds a capability.
    #[inline]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

// =============================================================================
// Capability
// =============================================================================

/// A gated feature of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Manage user accounts and roles.
    ManageUsers,
    /// Create/edit customer records.
    ManageCustomers,
    /// Schedule and dispatch jobs.
    ScheduleJobs,
    /// Create, edit, and send invoices.
    ManageInvoices,
    /// Track dumpsters and other assets.
    ManageInventory,
    /// See the jobs assigned to the signed-in driver.
    ViewAssignedJobs,
    /// Advance a job through its delivery/pickup workflow.
    UpdateJobStatus,
    /// Attach photo documentation to a job.
    CapturePhotos,
    /// Customer self-service: active and past rentals.
    ViewOwnRentals,
    /// Customer self-service: own invoices.
    ViewOwnInvoices,
    /// Customer self-service: request a new delivery or pickup.
    RequestService,
}

impl Capability {
    /// Every capability, in declaration order. Admin's grant set.
    pub const ALL: [Capability; 11] = [
        Capability::ManageUsers,
        Capability::ManageCustomers,
        Capability::ScheduleJobs,
        Capability::ManageInvoices,
        Capability::ManageInventory,
        Capability::ViewAssignedJobs,
        Capability::UpdateJobStatus,
        Capability::CapturePhotos,
        Capability::ViewOwnRentals,
        Capability::ViewOwnInvoices,
        Capability::RequestService,
    ];
}

// =============================================================================
// Session
// =============================================================================

/// An authenticated session.
///
/// ## Invariants
/// - `view_override` is only ever set on Admin sessions, and only to a
///   non-Admin role
/// - `effective_role()` defensively re-checks the admin condition, so a
///   session deserialized with a bogus override still resolves to its
///   authenticated role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The role the user actually authenticated as.
    pub authenticated_role: Role,

    /// Admin-only simulation of a lower-privilege role.
    pub view_override: Option<Role>,
}

impl Session {
    /// Creates a fresh session at login. No override.
    pub fn new(authenticated_role: Role) -> Self {
        Session {
            authenticated_role,
            view_override: None,
        }
    }

    /// Resolves the role used for all authorization decisions.
    ///
    /// The override is honored only for Admin sessions. A non-admin
    /// session with an override set (which no transition in this module
    /// produces) resolves to its authenticated role.
    pub fn effective_role(&self) -> Role {
        match (self.authenticated_role, self.view_override) {
            (Role::Admin, Some(role)) => role,
            (role, _) => role,
        }
    }

    /// Switches the admin's view to another role.
    ///
    /// ## Behavior
    /// - Non-admin sessions get `PermissionDenied` and are left untouched
    /// - Switching to `Admin` clears the override (that is the real view,
    ///   and it keeps overrides non-Admin by construction)
    pub fn switch_view(&mut self, target: Role) -> Result<(), AuthzError> {
        if self.authenticated_role != Role::Admin {
            return Err(AuthzError::PermissionDenied {
                role: self.authenticated_role,
                action: "switch view".to_string(),
            });
        }

        self.view_override = match target {
            Role::Admin => None,
            other => Some(other),
        };
        Ok(())
    }

    /// Clears the view override unconditionally.
    pub fn reset_view(&mut self) {
        self.view_override = None;
    }

    /// Checks the effective role against an allowed set.
    #[inline]
    pub fn can_access(&self, allowed: &[Role]) -> bool {
        self.effective_role().can_access(allowed)
    }

    /// Checks whether the effective role holds a capability.
    ///
    /// Note this uses the *effective* role: an admin previewing the
    /// driver view sees exactly what a driver sees.
    #[inline]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.effective_role().has_capability(capability)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_switch_and_reset_view() {
        let mut session = Session::new(Role::Admin);
        assert_eq!(session.effective_role(), Role::Admin);

        session.switch_view(Role::Driver).unwrap();
        assert_eq!(session.effective_role(), Role::Driver);

        session.reset_view();
        assert_eq!(session.effective_role(), Role::Admin);
    }

    #[test]
    fn test_non_admin_switch_view_denied() {
        let mut session = Session::new(Role::Driver);

        let result = session.switch_view(Role::Admin);
        assert!(matches!(
            result,
            Err(AuthzError::PermissionDenied {
                role: Role::Driver,
                ..
            })
        ));

        // Session untouched, effective role unchanged
        assert_eq!(session.view_override, None);
        assert_eq!(session.effective_role(), Role::Driver);
    }

    #[test]
    fn test_switch_view_to_admin_clears_override() {
        let mut session = Session::new(Role::Admin);
        session.switch_view(Role::Customer).unwrap();
        assert_eq!(session.effective_role(), Role::Customer);

        session.switch_view(Role::Admin).unwrap();
        assert_eq!(session.view_override, None);
        assert_eq!(session.effective_role(), Role::Admin);
    }

    #[test]
    fn test_effective_role_ignores_bogus_override() {
        // A non-admin session with an override (e.g. hand-built JSON)
        // must still resolve to its authenticated role
        let session = Session {
            authenticated_role: Role::Customer,
            view_override: Some(Role::Admin),
        };
        assert_eq!(session.effective_role(), Role::Customer);
    }

    #[test]
    fn test_effective_role_stays_in_known_set() {
        for role in Role::ALL {
            let mut session = Session::new(role);
            let effective = session.effective_role();
            assert!(effective == session.authenticated_role);

            if session.switch_view(Role::Driver).is_ok() {
                let effective = session.effective_role();
                assert!(
                    effective == session.authenticated_role || Some(effective) == session.view_override
                );
            }
        }
    }

    #[test]
    fn test_can_access_membership() {
        assert!(Role::Driver.can_access(&[Role::Admin, Role::Driver]));
        assert!(!Role::Driver.can_access(&[Role::Admin, Role::OfficeStaff]));

        // Reflexive over the allowed set; empty set denies everyone
        for role in Role::ALL {
            assert!(role.can_access(&[role]));
            assert!(!role.can_access(&[]));
        }
    }

    #[test]
    fn test_capability_table_defined_for_every_role() {
        for role in Role::ALL {
            assert!(
                !role.capabilities().is_empty(),
                "role {:?} has no capabilities",
                role
            );
        }
    }

    #[test]
    fn test_admin_holds_every_capability() {
        for capability in Capability::ALL {
            assert!(Role::Admin.has_capability(capability));
        }
    }

    #[test]
    fn test_override_narrows_capabilities() {
        let mut session = Session::new(Role::Admin);
        assert!(session.has_capability(Capability::ManageUsers));

        session.switch_view(Role::Driver).unwrap();
        assert!(!session.has_capability(Capability::ManageUsers));
        assert!(session.has_capability(Capability::CapturePhotos));
    }

    #[test]
    fn test_session_serde_shape() {
        let mut session = Session::new(Role::Admin);
        session.switch_view(Role::OfficeStaff).unwrap();

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["authenticatedRole"], "admin");
        assert_eq!(json["viewOverride"], "office_staff");
    }
}
