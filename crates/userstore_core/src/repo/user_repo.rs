//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the single `users` table.
//! - Map every storage failure to an empty result at the boundary.
//!
//! # Invariants
//! - Each operation opens its own connection and drops it before returning.
//! - Writes run inside a transaction; an uncommitted transaction rolls back
//!   when dropped.
//! - "Not found" and "storage error" share the same returned shape.
//! - Record contents are never logged, only ids and counts.

use crate::db::schema::{create_users_table, table_exists, USERS_TABLE};
use crate::db::{open_db, DbError};
use crate::model::user::{User, UserFields, UserId};
use log::{debug, error, info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const USER_SELECT_SQL: &str = "SELECT
    user_id,
    name,
    email,
    phone,
    address,
    country
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Internal failure of a repository step.
///
/// Never crosses the `UserRepository` boundary; it only feeds log lines.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    TableExists(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::TableExists(table) => write!(f, "table `{table}` already exists"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::TableExists(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of `UserRepository::initialize_schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The `users` table was created by this call.
    Created,
    /// Creation failed, most commonly because the table already exists.
    NotCreated,
}

/// Outcome of `UserRepository::delete`.
///
/// Deleting an id that does not exist is `Deleted`; only storage-level
/// failures produce `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    Failed,
}

impl DeleteStatus {
    /// Human-readable status line for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => "User deleted successfully",
            Self::Failed => "Cannot delete user",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl Display for DeleteStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Repository interface for user CRUD operations.
///
/// Every method swallows storage failures and reports them through an empty
/// sentinel (`None`, an empty `Vec`, `NotCreated` or `Failed`).
pub trait UserRepository {
    /// Creates the `users` table. Fails (non-fatally) when it already exists.
    fn initialize_schema(&self) -> SchemaStatus;
    /// Inserts a row and returns it re-read by its assigned id.
    fn insert(&self, fields: &UserFields) -> Option<User>;
    /// Returns every row in storage order.
    fn list_all(&self) -> Vec<User>;
    /// Returns the row with `id`, if any.
    fn get_by_id(&self, id: UserId) -> Option<User>;
    /// Overwrites every field except `user_id` and returns the re-read row.
    fn update(&self, user: &User) -> Option<User>;
    /// Hard-deletes the row with `id`; absent ids are a successful no-op.
    fn delete(&self, id: UserId) -> DeleteStatus;
}

/// SQLite-backed user repository bound to one database file.
///
/// Holds only the path; connections are opened per call.
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    db_path: PathBuf,
}

impl SqliteUserRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> RepoResult<Connection> {
        Ok(open_db(&self.db_path)?)
    }

    fn create_schema(&self) -> RepoResult<()> {
        let conn = self.connect()?;
        if let Err(err) = create_users_table(&conn) {
            if table_exists(&conn, USERS_TABLE)? {
                return Err(RepoError::TableExists(USERS_TABLE));
            }
            return Err(err.into());
        }
        Ok(())
    }

    fn insert_row(&self, fields: &UserFields) -> RepoResult<Option<User>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO users (
                name,
                email,
                phone,
                address,
                country
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                fields.name.as_str(),
                fields.email.as_str(),
                fields.phone.as_str(),
                fields.address.as_str(),
                fields.country.as_str(),
            ],
        )?;
        let user_id = tx.last_insert_rowid();
        tx.commit()?;

        fetch_user(&conn, user_id)
    }

    fn list_rows(&self) -> RepoResult<Vec<User>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(USER_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn get_row(&self, id: UserId) -> RepoResult<Option<User>> {
        let conn = self.connect()?;
        fetch_user(&conn, id)
    }

    fn update_row(&self, user: &User) -> RepoResult<Option<User>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE users
             SET
                name = ?1,
                email = ?2,
                phone = ?3,
                address = ?4,
                country = ?5
             WHERE user_id = ?6;",
            params![
                user.name.as_str(),
                user.email.as_str(),
                user.phone.as_str(),
                user.address.as_str(),
                user.country.as_str(),
                user.user_id,
            ],
        )?;
        tx.commit()?;

        if changed == 0 {
            debug!(
                "event=user_update module=repo status=noop user_id={}",
                user.user_id
            );
        }

        fetch_user(&conn, user.user_id)
    }

    fn delete_row(&self, id: UserId) -> RepoResult<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let deleted = tx.execute("DELETE FROM users WHERE user_id = ?1;", [id])?;
        tx.commit()?;
        Ok(deleted)
    }
}

impl UserRepository for SqliteUserRepository {
    fn initialize_schema(&self) -> SchemaStatus {
        match self.create_schema() {
            Ok(()) => {
                info!("event=schema_init module=repo status=ok table={USERS_TABLE}");
                SchemaStatus::Created
            }
            Err(err @ RepoError::TableExists(_)) => {
                warn!(
                    "event=schema_init module=repo status=skipped error_code=table_exists error={err}"
                );
                SchemaStatus::NotCreated
            }
            Err(err) => {
                error!(
                    "event=schema_init module=repo status=error error_code=schema_create_failed error={err}"
                );
                SchemaStatus::NotCreated
            }
        }
    }

    fn insert(&self, fields: &UserFields) -> Option<User> {
        match self.insert_row(fields) {
            Ok(Some(user)) => {
                info!(
                    "event=user_insert module=repo status=ok user_id={}",
                    user.user_id
                );
                Some(user)
            }
            Ok(None) => {
                error!(
                    "event=user_insert module=repo status=error error_code=readback_missing"
                );
                None
            }
            Err(err) => {
                error!(
                    "event=user_insert module=repo status=error error_code=insert_failed rolled_back=true error={err}"
                );
                None
            }
        }
    }

    fn list_all(&self) -> Vec<User> {
        match self.list_rows() {
            Ok(users) => {
                debug!(
                    "event=user_list module=repo status=ok count={}",
                    users.len()
                );
                users
            }
            Err(err) => {
                error!(
                    "event=user_list module=repo status=error error_code=list_failed error={err}"
                );
                Vec::new()
            }
        }
    }

    fn get_by_id(&self, id: UserId) -> Option<User> {
        match self.get_row(id) {
            Ok(found) => {
                debug!(
                    "event=user_get module=repo status=ok user_id={id} found={}",
                    found.is_some()
                );
                found
            }
            Err(err) => {
                error!(
                    "event=user_get module=repo status=error error_code=get_failed user_id={id} error={err}"
                );
                None
            }
        }
    }

    fn update(&self, user: &User) -> Option<User> {
        match self.update_row(user) {
            Ok(updated) => {
                info!(
                    "event=user_update module=repo status=ok user_id={} found={}",
                    user.user_id,
                    updated.is_some()
                );
                updated
            }
            Err(err) => {
                error!(
                    "event=user_update module=repo status=error error_code=update_failed user_id={} rolled_back=true error={err}",
                    user.user_id
                );
                None
            }
        }
    }

    fn delete(&self, id: UserId) -> DeleteStatus {
        match self.delete_row(id) {
            Ok(deleted) => {
                info!(
                    "event=user_delete module=repo status=ok user_id={id} deleted_rows={deleted}"
                );
                DeleteStatus::Deleted
            }
            Err(err) => {
                error!(
                    "event=user_delete module=repo status=error error_code=delete_failed user_id={id} rolled_back=true error={err}"
                );
                DeleteStatus::Failed
            }
        }
    }
}

fn fetch_user(conn: &Connection, id: UserId) -> RepoResult<Option<User>> {
    let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} WHERE user_id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_user_row(row)?));
    }

    Ok(None)
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        user_id: row.get("user_id")?,
        name: required_text(row, "name")?,
        email: required_text(row, "email")?,
        phone: required_text(row, "phone")?,
        address: required_text(row, "address")?,
        country: required_text(row, "country")?,
    })
}

// The schema declares NOT NULL, but a store created elsewhere may not.
fn required_text(row: &Row<'_>, column: &str) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL value in users.{column}")))
}
