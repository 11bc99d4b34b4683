//! dbcompare - Compare build-time profiling databases
//!
//! Loads two profiling databases (objects, sources and class instantiations
//! with their timings), computes per-key differences and prints the ones
//! that are significant.

pub mod config;
pub mod diff;
pub mod loader;
pub mod model;
pub mod output;

pub use config::Config;
pub use diff::{compare_datasets, DatasetDiff};
pub use loader::{load_dataset, LoadError};
pub use model::Dataset;
