//! # dochub-entity
//!
//! Domain entity models for DocHub: users, files with their embedded
//! version history, and the dependent edit/notification records.

pub mod edit;
pub mod file;
pub mod notification;
pub mod user;
