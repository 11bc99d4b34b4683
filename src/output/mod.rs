//! Output formatting for diff results

mod text;

use std::io::Write;

use anyhow::Result;

use crate::diff::DatasetDiff;

pub use text::{format_delta_line, format_metric, TextReport};

/// A delta is reported only when some field's magnitude is above this,
/// in micro-units. Each field is tested on its own.
pub const SIGNIFICANT_DIFF: i64 = 100_000;

/// Micro-units per reported time unit
pub const TIME_SCALE: f64 = 1e6;

/// Render the report to stdout
pub fn render_to_stdout(diff: &DatasetDiff) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    TextReport::new().render(diff, &mut handle)?;
    handle.flush()?;
    Ok(())
}
