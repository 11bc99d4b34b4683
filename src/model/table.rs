//! Keyed tables and the loaded dataset

use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

use super::record::{InstantiationRecord, ObjectRecord, Record, SourceRecord};

/// Insertion-ordered map hashed with FxHasher
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered set hashed with FxHasher
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Records of one kind, keyed by their natural identifier
#[derive(Debug, Clone)]
pub struct Table<R> {
    records: FxIndexMap<String, R>,
}

impl<R: Record> Table<R> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: FxIndexMap::default(),
        }
    }

    /// Insert a record; a later record with the same key replaces the earlier one
    pub fn insert(&mut self, key: String, record: R) {
        self.records.insert(key, record);
    }

    /// Look up a record by key
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Iterate over keys in load order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Iterate over `(key, record)` pairs in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> FromIterator<(String, R)> for Table<R> {
    fn from_iter<I: IntoIterator<Item = (String, R)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// The three profiling tables of one database.
///
/// Object keys are full paths. Source keys have the database directory
/// stripped when they start with it, so the two path-keyed tables are not
/// normalized the same way.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// File the dataset was loaded from
    pub path: PathBuf,
    pub objects: Table<ObjectRecord>,
    pub sources: Table<SourceRecord>,
    pub instantiations: Table<InstantiationRecord>,
}

impl Dataset {
    pub fn new(
        path: impl AsRef<Path>,
        objects: Table<ObjectRecord>,
        sources: Table<SourceRecord>,
        instantiations: Table<InstantiationRecord>,
    ) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            objects,
            sources,
            instantiations,
        }
    }

    /// Total number of records across all tables
    pub fn record_count(&self) -> usize {
        self.objects.len() + self.sources.len() + self.instantiations.len()
    }
}
