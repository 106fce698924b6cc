//! Role-to-action mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use dochub_entity::user::UserRole;

/// An operation on files that the policy table gates by role.
///
/// Ownership constraints (an editor may only save files they authored)
/// are layered on top by [`super::enforcer::PolicyEnforcer`]; this enum
/// covers the pure role dimension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    /// Read a single file or the approved listing.
    Read,
    /// List one's own files, approved or not.
    ListMine,
    /// Create a new file.
    Create,
    /// Save content (and optionally rename), subject to ownership.
    Save,
    /// Overwrite content with no ownership check.
    ForceUpdate,
    /// Delete a file and its dependent records.
    Delete,
}

/// Defines the mapping from each role to its set of allowed actions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of actions.
    policies: HashMap<UserRole, HashSet<FileAction>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    ///
    /// Note the deliberate asymmetry inherited from the product spec:
    /// `Delete` is granted to every editor with no ownership restriction,
    /// while `Save` on someone else's file is not. Editors act as
    /// moderators and can remove documents they do not own.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // Viewer: read-only access
        let mut viewer = HashSet::new();
        viewer.insert(FileAction::Read);
        viewer.insert(FileAction::ListMine);
        policies.insert(UserRole::Viewer, viewer);

        // Editor: everything except the admin-only force update
        let mut editor = HashSet::new();
        editor.insert(FileAction::Read);
        editor.insert(FileAction::ListMine);
        editor.insert(FileAction::Create);
        editor.insert(FileAction::Save);
        editor.insert(FileAction::Delete);
        policies.insert(UserRole::Editor, editor);

        // Admin: all actions
        let mut admin = HashSet::new();
        admin.insert(FileAction::Read);
        admin.insert(FileAction::ListMine);
        admin.insert(FileAction::Create);
        admin.insert(FileAction::Save);
        admin.insert(FileAction::ForceUpdate);
        admin.insert(FileAction::Delete);
        policies.insert(UserRole::Admin, admin);

        Self { policies }
    }

    /// Checks whether the given role may perform the action.
    pub fn has_permission(&self, role: &UserRole, action: &FileAction) -> bool {
        self.policies
            .get(role)
            .map(|actions| actions.contains(action))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
