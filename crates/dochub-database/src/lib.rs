//! # dochub-database
//!
//! Persistence layer for DocHub. Repository traits live in
//! [`repositories`], with PostgreSQL implementations alongside them and
//! single-node in-memory implementations in [`memory`] (used by tests
//! and `backend = "memory"` deployments).

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
