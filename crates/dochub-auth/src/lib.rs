//! # dochub-auth
//!
//! Access control for DocHub: the pure role-to-action policy table, the
//! enforcer that turns decisions into typed errors, and JWT encode/decode
//! for the transport layer.

pub mod jwt;
pub mod rbac;

pub use rbac::enforcer::PolicyEnforcer;
pub use rbac::policies::{FileAction, RbacPolicies};
