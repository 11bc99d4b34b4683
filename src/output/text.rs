//! Plain-text report

use std::io::Write;

use anyhow::Result;

use crate::diff::{DatasetDiff, TableDiff};
use crate::model::{Delta, Metric, Record};

use super::{SIGNIFICANT_DIFF, TIME_SCALE};

/// Width of the right-aligned key column
const KEY_WIDTH: usize = 80;
/// Width of each numeric column, sign included
const VALUE_WIDTH: usize = 10;
const SEPARATOR: &str = "    ";

/// Text report printing one-sided keys and significant deltas per table
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl TextReport {
    pub fn new() -> Self {
        Self
    }

    /// Write the objects, sources and instantiations sections in that order
    pub fn render(&self, diff: &DatasetDiff, writer: &mut dyn Write) -> Result<()> {
        self.write_table(&diff.objects, writer)?;
        self.write_table(&diff.sources, writer)?;
        self.write_table(&diff.instantiations, writer)?;
        Ok(())
    }

    /// Write the three sections for one table
    pub fn write_table<R: Record>(
        &self,
        diff: &TableDiff<R>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        writeln!(writer, "{} in Database 1 only:", R::LABEL)?;
        for key in &diff.only_in_first {
            writeln!(writer, "\t{}", key)?;
        }

        writeln!(writer, "{} in Database 2 only:", R::LABEL)?;
        for key in &diff.only_in_second {
            writeln!(writer, "\t{}", key)?;
        }

        writeln!(writer, "{}", R::DIFF_HEADING)?;
        for (key, delta) in diff.significant(SIGNIFICANT_DIFF) {
            writeln!(writer, "{}", format_delta_line(key, delta))?;
        }
        Ok(())
    }
}

/// Format one difference line: the key right-aligned, then each field
pub fn format_delta_line(key: &str, delta: &Delta) -> String {
    let mut line = format!("{}{:>width$}", SEPARATOR, key, width = KEY_WIDTH);
    for &metric in delta.metrics() {
        line.push_str(SEPARATOR);
        line.push_str(&format_metric(metric));
    }
    line
}

/// Time is scaled to whole units with six decimals, counts stay integers.
/// Non-negative values carry a leading space where a minus sign would go.
pub fn format_metric(metric: Metric) -> String {
    let value = metric.value();
    let magnitude = match metric {
        Metric::Time(v) => format!("{:.6}", v.unsigned_abs() as f64 / TIME_SCALE),
        Metric::Count(v) => v.unsigned_abs().to_string(),
    };
    let sign = if value < 0 { '-' } else { ' ' };
    format!("{:>width$}", format!("{}{}", sign, magnitude), width = VALUE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_tables;
    use crate::model::{InstantiationRecord, ObjectRecord, SourceRecord, Table};

    fn render_table<R: Record>(diff: &TableDiff<R>) -> String {
        let mut out = Vec::new();
        TextReport::new().write_table(diff, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Metric::Time(200_000)), "  0.200000");
        assert_eq!(format_metric(Metric::Time(-1_500_000)), " -1.500000");
        assert_eq!(format_metric(Metric::Time(0)), "  0.000000");
        assert_eq!(format_metric(Metric::Count(3)), "         3");
        assert_eq!(format_metric(Metric::Count(-12)), "       -12");
        assert_eq!(
            format_metric(Metric::Count(i128::from(i64::MAX) + 1)),
            " 9223372036854775808"
        );
    }

    #[test]
    fn test_object_line() {
        let line = format_delta_line(
            "/x/a.cc",
            &Delta::from(&ObjectRecord::new(200_000, 0, 200_000)),
        );
        let expected = format!(
            "    {}/x/a.cc      0.200000      0.000000      0.200000",
            " ".repeat(80 - "/x/a.cc".len())
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_long_key_not_truncated() {
        let key = "k".repeat(100);
        let line = format_delta_line(&key, &Delta::from(&SourceRecord::new(-300_000, 1)));
        assert_eq!(line, format!("    {key}     -0.300000             1"));
    }

    #[test]
    fn test_sections_and_threshold() {
        let first: Table<ObjectRecord> = [
            ("/x/a.cc".to_string(), ObjectRecord::new(5_000_000, 2_000_000, 3_000_000)),
            ("/x/b.cc".to_string(), ObjectRecord::new(1_000_000, 500_000, 500_000)),
            ("/x/only1.cc".to_string(), ObjectRecord::default()),
        ]
        .into_iter()
        .collect();
        let second: Table<ObjectRecord> = [
            ("/x/a.cc".to_string(), ObjectRecord::new(4_800_000, 2_000_000, 2_800_000)),
            ("/x/b.cc".to_string(), ObjectRecord::new(900_000, 450_000, 450_000)),
            ("/x/only2.cc".to_string(), ObjectRecord::default()),
        ]
        .into_iter()
        .collect();

        let out = render_table(&diff_tables(&first, &second));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Objects in Database 1 only:");
        assert_eq!(lines[1], "\t/x/only1.cc");
        assert_eq!(lines[2], "Objects in Database 2 only:");
        assert_eq!(lines[3], "\t/x/only2.cc");
        assert_eq!(lines[4], "Objects differences");
        assert_eq!(lines.len(), 6);
        assert!(lines[5].trim_start().starts_with("/x/a.cc"));
        // b.cc moved by exactly 100_000 in total_time, which is not above the threshold
        assert!(!out.contains("/x/b.cc"));
    }

    #[test]
    fn test_identical_instantiation_omitted() {
        let table: Table<InstantiationRecord> =
            [("std::vector<int>".to_string(), InstantiationRecord::new(900_000, 4))]
                .into_iter()
                .collect();
        let out = render_table(&diff_tables(&table, &table));
        assert_eq!(
            out,
            "Instantiate class in Database 1 only:\n\
             Instantiate class in Database 2 only:\n\
             Instantiate class differences\n"
        );
    }

    #[test]
    fn test_count_alone_is_significant() {
        let first: Table<SourceRecord> =
            [("/a.cc".to_string(), SourceRecord::new(0, 200_001))].into_iter().collect();
        let second: Table<SourceRecord> =
            [("/a.cc".to_string(), SourceRecord::new(0, 1))].into_iter().collect();
        let out = render_table(&diff_tables(&first, &second));
        assert!(out.contains("    200000"));
    }
}
