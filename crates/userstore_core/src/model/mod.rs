//! Domain model for the user store.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `UserId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod user;
