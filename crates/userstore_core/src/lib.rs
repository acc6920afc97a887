//! Data-access layer over a single SQLite `users` table.
//!
//! Each repository call opens its own connection, runs its statement, and
//! closes the connection before returning.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserFields, UserId};
pub use repo::user_repo::{
    DeleteStatus, RepoError, RepoResult, SchemaStatus, SqliteUserRepository, UserRepository,
};
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
