//! Data model for profiling databases

mod record;
mod table;

pub use record::{Delta, InstantiationRecord, Metric, ObjectRecord, Record, SourceRecord};
pub use table::{Dataset, FxIndexMap, FxIndexSet, Table};
