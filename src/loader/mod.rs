//! Loader layer for reading profiling databases

mod sqlite;

use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::model::{Dataset, InstantiationRecord, ObjectRecord, Record, SourceRecord};

pub use self::sqlite::{open_read_only, read_table};

/// Errors raised while loading a database.
///
/// Every variant means the file cannot be used as a profiling dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open database {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("cannot resolve directory of {}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("database {} has no `{table}` table", .path.display())]
    MissingTable { path: PathBuf, table: &'static str },
    #[error("cannot read table `{table}` from {}: {source}", .path.display())]
    MalformedTable {
        path: PathBuf,
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Load the objects, source and instantiate_class tables of a database.
///
/// The connection is read-only and closed before returning.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let conn = open_read_only(path)?;

    let base_dir = database_dir(path).map_err(|source| LoadError::Path {
        path: path.to_path_buf(),
        source,
    })?;
    let prefix = source_prefix(&base_dir);
    debug!("Database {} lives in {}", path.display(), base_dir.display());

    let objects = read_table::<ObjectRecord>(&conn, path, |key| key)?;
    let sources = read_table::<SourceRecord>(&conn, path, |key| strip_dir_prefix(key, prefix))?;
    let instantiations = read_table::<InstantiationRecord>(&conn, path, |key| key)?;

    log_loaded::<ObjectRecord>(path, objects.len());
    log_loaded::<SourceRecord>(path, sources.len());
    log_loaded::<InstantiationRecord>(path, instantiations.len());

    drop(conn);

    Ok(Dataset::new(path, objects, sources, instantiations))
}

fn log_loaded<R: Record>(path: &Path, count: usize) {
    debug!("Loaded {} rows from {}.{}", count, path.display(), R::TABLE);
}

/// Absolute, lexically normalized directory containing the database file
pub fn database_dir(path: &Path) -> io::Result<PathBuf> {
    let absolute = normalize_lexically(&std::path::absolute(path)?);
    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(absolute))
}

/// Resolve `.` and `..` components without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Directory string stripped from source keys, if it can be compared as text
fn source_prefix(base_dir: &Path) -> Option<&str> {
    let prefix = base_dir.to_str();
    if prefix.is_none() {
        warn!(
            "database directory {} is not valid UTF-8, source paths are kept unchanged",
            base_dir.display()
        );
    }
    prefix
}

/// Drop a leading directory string from a source key.
///
/// This is a plain string prefix test: `/proj/build` also matches
/// `/proj/buildx/a.cc`.
pub fn strip_dir_prefix(key: String, prefix: Option<&str>) -> String {
    match prefix.and_then(|p| key.strip_prefix(p)) {
        Some(rest) => rest.to_string(),
        None => key,
    }
}
