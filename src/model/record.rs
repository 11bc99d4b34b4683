//! Typed records for the three profiling tables

use std::fmt;

/// A single numeric field of a record, tagged with how it is reported.
///
/// Values are `i128` so that the difference of any two SQLite INTEGERs fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Time in micro-units
    Time(i128),
    /// Number of occurrences
    Count(i128),
}

impl Metric {
    /// Raw integer value
    pub fn value(&self) -> i128 {
        match self {
            Metric::Time(v) | Metric::Count(v) => *v,
        }
    }

    /// Check whether the magnitude is strictly above `threshold`
    pub fn exceeds(&self, threshold: i64) -> bool {
        self.value().unsigned_abs() > u128::from(threshold.unsigned_abs())
    }

    /// `self - other`, keeping the kind of `self`
    fn minus(self, other: Metric) -> Metric {
        let value = self.value() - other.value();
        match self {
            Metric::Time(_) => Metric::Time(value),
            Metric::Count(_) => Metric::Count(value),
        }
    }
}

/// Field-wise difference between two records of the same kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    metrics: Vec<Metric>,
}

impl Delta {
    /// Difference `first - second`
    pub fn between<R: Record>(first: &R, second: &R) -> Self {
        Self {
            metrics: first
                .metrics()
                .into_iter()
                .zip(second.metrics())
                .map(|(a, b)| a.minus(b))
                .collect(),
        }
    }

    /// Fields in reporting order
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Check whether any field's magnitude is strictly above `threshold`
    pub fn is_significant(&self, threshold: i64) -> bool {
        self.metrics.iter().any(|m| m.exceeds(threshold))
    }

    /// Check whether every field is zero
    pub fn is_zero(&self) -> bool {
        self.metrics.iter().all(|m| m.value() == 0)
    }
}

impl<R: Record> From<&R> for Delta {
    fn from(record: &R) -> Self {
        Self {
            metrics: record.metrics(),
        }
    }
}

/// Behaviour shared by every table kind
pub trait Record: Clone + fmt::Debug {
    /// SQL table the records are read from
    const TABLE: &'static str;
    /// Column holding the natural key
    const KEY_COLUMN: &'static str;
    /// Numeric columns, in reporting order
    const VALUE_COLUMNS: &'static [&'static str];
    /// Noun used in the one-sided key headings
    const LABEL: &'static str;
    /// Heading of the differences section
    const DIFF_HEADING: &'static str;

    /// Build a record from a row shaped `key, VALUE_COLUMNS...`
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self>;

    /// Numeric fields in reporting order
    fn metrics(&self) -> Vec<Metric>;

    /// Field-wise difference `self - other`
    fn delta(&self, other: &Self) -> Delta {
        Delta::between(self, other)
    }
}

/// Timing of one compiled object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectRecord {
    pub total_time: i64,
    pub frontend_time: i64,
    pub backend_time: i64,
}

impl ObjectRecord {
    pub fn new(total_time: i64, frontend_time: i64, backend_time: i64) -> Self {
        Self {
            total_time,
            frontend_time,
            backend_time,
        }
    }
}

impl Record for ObjectRecord {
    const TABLE: &'static str = "objects";
    const KEY_COLUMN: &'static str = "path";
    const VALUE_COLUMNS: &'static [&'static str] = &["total_time", "frontend", "backend"];
    const LABEL: &'static str = "Objects";
    const DIFF_HEADING: &'static str = "Objects differences";

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            total_time: row.get(1)?,
            frontend_time: row.get(2)?,
            backend_time: row.get(3)?,
        })
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::Time(self.total_time.into()),
            Metric::Time(self.frontend_time.into()),
            Metric::Time(self.backend_time.into()),
        ]
    }
}

/// Aggregate time spent on one source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceRecord {
    pub duration: i64,
    pub count: i64,
}

impl SourceRecord {
    pub fn new(duration: i64, count: i64) -> Self {
        Self { duration, count }
    }
}

impl Record for SourceRecord {
    const TABLE: &'static str = "source";
    const KEY_COLUMN: &'static str = "path";
    const VALUE_COLUMNS: &'static [&'static str] = &["duration", "count"];
    const LABEL: &'static str = "Sources";
    const DIFF_HEADING: &'static str = "Source differences";

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            duration: row.get(1)?,
            count: row.get(2)?,
        })
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::Time(self.duration.into()),
            Metric::Count(self.count.into()),
        ]
    }
}

/// Aggregate time spent instantiating one class template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantiationRecord {
    pub duration: i64,
    pub count: i64,
}

impl InstantiationRecord {
    pub fn new(duration: i64, count: i64) -> Self {
        Self { duration, count }
    }
}

impl Record for InstantiationRecord {
    const TABLE: &'static str = "instantiate_class";
    const KEY_COLUMN: &'static str = "name";
    const VALUE_COLUMNS: &'static [&'static str] = &["duration", "count"];
    const LABEL: &'static str = "Instantiate class";
    const DIFF_HEADING: &'static str = "Instantiate class differences";

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            duration: row.get(1)?,
            count: row.get(2)?,
        })
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::Time(self.duration.into()),
            Metric::Count(self.count.into()),
        ]
    }
}
