//! Configuration handling for dbcompare

use std::path::PathBuf;

/// Configuration for a comparison run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the first database
    pub first_db: PathBuf,
    /// Path to the second database
    pub second_db: PathBuf,
}

impl Config {
    /// Create a new Config with database paths
    pub fn new(first_db: PathBuf, second_db: PathBuf) -> Self {
        Self {
            first_db,
            second_db,
        }
    }
}
