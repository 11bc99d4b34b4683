//! SQLite access for profiling databases

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::model::{Record, Table};

use super::{LoadError, Result};

/// Open a database without write access.
///
/// Fails if the file does not exist; SQLite is never asked to create it.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    debug!("Opening {} read-only", path.display());
    Connection::open_with_flags(path, flags).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that `table` exists. This is also the first statement run on the
/// connection, so a file that is not a database fails here.
fn ensure_table(conn: &Connection, path: &Path, table: &'static str) -> Result<()> {
    let found: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    if found == 0 {
        return Err(LoadError::MissingTable {
            path: path.to_path_buf(),
            table,
        });
    }
    Ok(())
}

/// Read every row of `R::TABLE`, mapping each key through `map_key`
pub fn read_table<R: Record>(
    conn: &Connection,
    path: &Path,
    map_key: impl Fn(String) -> String,
) -> Result<Table<R>> {
    ensure_table(conn, path, R::TABLE)?;

    let malformed = |source: rusqlite::Error| LoadError::MalformedTable {
        path: path.to_path_buf(),
        table: R::TABLE,
        source,
    };

    let sql = format!(
        "SELECT {}, {} FROM {}",
        R::KEY_COLUMN,
        R::VALUE_COLUMNS.join(", "),
        R::TABLE
    );
    let mut stmt = conn.prepare(&sql).map_err(malformed)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, R::from_row(row)?)))
        .map_err(malformed)?;

    let mut table = Table::new();
    for row in rows {
        let (key, record) = row.map_err(malformed)?;
        table.insert(map_key(key), record);
    }
    Ok(table)
}
