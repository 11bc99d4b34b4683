//! Key matching and per-field deltas for one table

use std::marker::PhantomData;

use crate::model::{
    Delta, FxIndexMap, FxIndexSet, InstantiationRecord, ObjectRecord, Record, SourceRecord, Table,
};

use super::DiffStats;

/// Difference between the same table in two datasets
#[derive(Debug, Clone)]
pub struct TableDiff<R> {
    /// Keys present only in the first dataset
    pub only_in_first: FxIndexSet<String>,
    /// Keys present only in the second dataset
    pub only_in_second: FxIndexSet<String>,
    /// `first - second` for every key present in both, zero deltas included
    pub deltas: FxIndexMap<String, Delta>,
    kind: PhantomData<R>,
}

impl<R: Record> TableDiff<R> {
    /// Deltas with at least one field strictly above `threshold`
    pub fn significant(&self, threshold: i64) -> impl Iterator<Item = (&str, &Delta)> {
        self.deltas
            .iter()
            .filter(move |(_, delta)| delta.is_significant(threshold))
            .map(|(key, delta)| (key.as_str(), delta))
    }

    /// Counts for this table
    pub fn stats(&self, threshold: i64) -> DiffStats {
        DiffStats {
            only_in_first: self.only_in_first.len(),
            only_in_second: self.only_in_second.len(),
            common: self.deltas.len(),
            significant: self.significant(threshold).count(),
        }
    }
}

/// Compare two tables of the same kind
pub fn diff_tables<R: Record>(first: &Table<R>, second: &Table<R>) -> TableDiff<R> {
    let mut only_in_first = FxIndexSet::default();
    let mut deltas = FxIndexMap::default();

    for (key, record) in first.iter() {
        match second.get(key) {
            Some(other) => {
                deltas.insert(key.to_string(), record.delta(other));
            }
            None => {
                only_in_first.insert(key.to_string());
            }
        }
    }

    let only_in_second = second
        .keys()
        .filter(|key| !first.contains_key(key))
        .map(str::to_string)
        .collect();

    TableDiff {
        only_in_first,
        only_in_second,
        deltas,
        kind: PhantomData,
    }
}

pub fn compare_objects(
    first: &Table<ObjectRecord>,
    second: &Table<ObjectRecord>,
) -> TableDiff<ObjectRecord> {
    diff_tables(first, second)
}

pub fn compare_sources(
    first: &Table<SourceRecord>,
    second: &Table<SourceRecord>,
) -> TableDiff<SourceRecord> {
    diff_tables(first, second)
}

pub fn compare_instantiations(
    first: &Table<InstantiationRecord>,
    second: &Table<InstantiationRecord>,
) -> TableDiff<InstantiationRecord> {
    diff_tables(first, second)
}
