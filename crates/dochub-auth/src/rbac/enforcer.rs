//! RBAC enforcement logic: turns policy decisions into typed errors.

use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_entity::user::UserRole;

use super::policies::{FileAction, RbacPolicies};

/// Enforces role and ownership rules for file operations.
///
/// The policy table itself is pure; this wrapper translates denials into
/// `AppError::forbidden` so services can propagate them with `?`.
#[derive(Debug, Clone)]
pub struct PolicyEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl PolicyEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role may perform the action.
    ///
    /// Returns `Ok(())` if allowed, or `Err(AppError::Forbidden)` if denied.
    pub fn require_action(&self, role: &UserRole, action: FileAction) -> Result<(), AppError> {
        if self.policies.has_permission(role, &action) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{role}' does not have permission '{action:?}'"
            )))
        }
    }

    /// Checks the ownership rule for saves: the principal must be the
    /// file's author, unless they are an admin.
    pub fn require_owner_or_admin(
        &self,
        role: &UserRole,
        principal_id: Uuid,
        author_id: Uuid,
    ) -> Result<(), AppError> {
        if role.is_admin() || principal_id == author_id {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only the file's author or an admin may save this file",
            ))
        }
    }

    /// Checks whether the role may perform the action (returns bool).
    pub fn has_permission(&self, role: &UserRole, action: &FileAction) -> bool {
        self.policies.has_permission(role, action)
    }

    /// Returns whether the role is an admin.
    pub fn is_admin(&self, role: &UserRole) -> bool {
        role.is_admin()
    }
}

impl Default for PolicyEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_action_denies_viewer_create() {
        let enforcer = PolicyEnforcer::new();
        let err = enforcer
            .require_action(&UserRole::Viewer, FileAction::Create)
            .unwrap_err();
        assert_eq!(err.kind, dochub_core::error::ErrorKind::Forbidden);
    }

    #[test]
    fn test_owner_or_admin_rule() {
        let enforcer = PolicyEnforcer::new();
        let author = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(
            enforcer
                .require_owner_or_admin(&UserRole::Editor, author, author)
                .is_ok()
        );
        assert!(
            enforcer
                .require_owner_or_admin(&UserRole::Editor, other, author)
                .is_err()
        );
        // Admin bypasses ownership entirely
        assert!(
            enforcer
                .require_owner_or_admin(&UserRole::Admin, other, author)
                .is_ok()
        );
    }
}
