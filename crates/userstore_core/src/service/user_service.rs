//! User use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for callers.
//! - Delegate persistence to a `UserRepository` implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Service layer remains storage-agnostic.

use crate::model::user::{User, UserFields, UserId};
use crate::repo::user_repo::{DeleteStatus, SchemaStatus, UserRepository};

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn initialize_schema(&self) -> SchemaStatus {
        self.repo.initialize_schema()
    }

    /// Creates a user and returns the stored record.
    pub fn create_user(&self, fields: &UserFields) -> Option<User> {
        self.repo.insert(fields)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repo.list_all()
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.repo.get_by_id(id)
    }

    pub fn update_user(&self, user: &User) -> Option<User> {
        self.repo.update(user)
    }

    /// Replaces every field of user `id` with `fields`.
    ///
    /// # Contract
    /// - `id` is kept as-is; only the five text fields change.
    /// - Returns `None` when `id` does not exist or the write fails.
    pub fn replace_fields(&self, id: UserId, fields: UserFields) -> Option<User> {
        self.repo.update(&User::from_fields(id, fields))
    }

    pub fn delete_user(&self, id: UserId) -> DeleteStatus {
        self.repo.delete(id)
    }
}
