//! `users` table definition.

use super::DbResult;
use rusqlite::Connection;

/// Name of the single table owned by the store.
pub const USERS_TABLE: &str = "users";

/// DDL for the `users` table.
///
/// Deliberately a plain `CREATE TABLE`: running it against a store that
/// already has the table fails.
pub const USERS_TABLE_SQL: &str = include_str!("users.sql");

/// Creates the `users` table on `conn`.
pub fn create_users_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(USERS_TABLE_SQL)?;
    Ok(())
}

/// Returns whether a table named `table_name` exists on `conn`.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{create_users_table, table_exists, USERS_TABLE};
    use rusqlite::Connection;

    #[test]
    fn create_users_table_fails_when_table_already_exists() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, USERS_TABLE).unwrap());

        create_users_table(&conn).unwrap();
        assert!(table_exists(&conn, USERS_TABLE).unwrap());

        let err = create_users_table(&conn).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn users_table_rejects_null_text_fields() {
        let conn = Connection::open_in_memory().unwrap();
        create_users_table(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO users (name, email, phone, address, country)
             VALUES ('a', NULL, 'p', 'addr', 'c');",
            [],
        );
        assert!(result.is_err());
    }
}
