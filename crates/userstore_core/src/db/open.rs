//! Connection bootstrap for the file-backed store.
//!
//! # Responsibility
//! - Open one SQLite connection per repository call.
//! - Apply the connection settings every call relies on.
//!
//! # Invariants
//! - Returned connections have a busy timeout configured.
//! - Opening never creates tables.

use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite database file at `path`, creating the file if absent.
///
/// # Errors
/// - `DbError::EmptyPath` when `path` is empty.
/// - `DbError::Sqlite` when the file cannot be opened or configured.
///
/// # Side effects
/// - Emits `db_open` debug events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        error!("event=db_open module=db status=error error_code=db_path_empty");
        return Err(DbError::EmptyPath);
    }

    let started_at = Instant::now();
    debug!("event=db_open module=db status=start");

    match Connection::open(path).and_then(configure_connection) {
        Ok(conn) => {
            debug!(
                "event=db_open module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

fn configure_connection(conn: Connection) -> rusqlite::Result<Connection> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}
