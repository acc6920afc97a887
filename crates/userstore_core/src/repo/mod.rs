//! Repository layer over the `users` table.
//!
//! # Responsibility
//! - Define the user data-access contract.
//! - Keep SQLite query details inside the persistence boundary.
//!
//! # Invariants
//! - Public repository operations never return errors; failures are logged
//!   and collapse into empty sentinels.

pub mod user_repo;
