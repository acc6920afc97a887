//! User record model.
//!
//! # Responsibility
//! - Define the persisted `User` record and its id-less insert shape.
//!
//! # Invariants
//! - `user_id` is assigned by the store and never rewritten by updates.
//! - All five text fields are required; there is no optional field.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier (SQLite rowid of `users`).
pub type UserId = i64;

/// The five caller-supplied text fields of a user.
///
/// Used as insert input and as the replacement payload for updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            country: country.into(),
        }
    }
}

/// One row of the `users` table.
///
/// Field names match column names so the serialized form mirrors the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl User {
    /// Builds a record from an existing id and a full set of fields.
    ///
    /// Typical use is preparing the argument of an update.
    pub fn from_fields(user_id: UserId, fields: UserFields) -> Self {
        Self {
            user_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            country: fields.country,
        }
    }

    /// Returns the replaceable part of this record.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            country: self.country.clone(),
        }
    }
}
