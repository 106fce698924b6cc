//! Role-based access control: policy table and enforcement.

pub mod enforcer;
pub mod policies;

pub use enforcer::PolicyEnforcer;
pub use policies::{FileAction, RbacPolicies};
