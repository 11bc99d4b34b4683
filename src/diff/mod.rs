//! Diff engine for comparing datasets

mod table_diff;

use log::info;

use crate::model::{Dataset, InstantiationRecord, ObjectRecord, Record, SourceRecord};

pub use table_diff::{
    compare_instantiations, compare_objects, compare_sources, diff_tables, TableDiff,
};

/// Counts describing one table diff
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub only_in_first: usize,
    pub only_in_second: usize,
    pub common: usize,
    pub significant: usize,
}

impl DiffStats {
    /// Check if anything would be reported
    pub fn has_changes(&self) -> bool {
        self.only_in_first > 0 || self.only_in_second > 0 || self.significant > 0
    }
}

/// Result of comparing two datasets
#[derive(Debug, Clone)]
pub struct DatasetDiff {
    pub objects: TableDiff<ObjectRecord>,
    pub sources: TableDiff<SourceRecord>,
    pub instantiations: TableDiff<InstantiationRecord>,
}

impl DatasetDiff {
    /// Log per-table counts at info level
    pub fn log_stats(&self, threshold: i64) {
        log_table_stats(&self.objects, threshold);
        log_table_stats(&self.sources, threshold);
        log_table_stats(&self.instantiations, threshold);
    }
}

fn log_table_stats<R: Record>(diff: &TableDiff<R>, threshold: i64) {
    let stats = diff.stats(threshold);
    info!(
        "{}: {} only in first, {} only in second, {} common ({} significant)",
        R::TABLE,
        stats.only_in_first,
        stats.only_in_second,
        stats.common,
        stats.significant
    );
}

/// Compare all three tables of two datasets
pub fn compare_datasets(first: &Dataset, second: &Dataset) -> DatasetDiff {
    DatasetDiff {
        objects: compare_objects(&first.objects, &second.objects),
        sources: compare_sources(&first.sources, &second.sources),
        instantiations: compare_instantiations(&first.instantiations, &second.instantiations),
    }
}
