//! Partition module
//!
//! Maps raw batch folders onto curated `year=/month=/day=` partitions.
//!
//! # Overview
//!
//! - [`extract_process_date`] reads the `YYYY-MM-DDT` stamp out of a raw
//!   folder name, falling back to the [`Clock`] when none is present
//! - [`CuratedPartition`] renders the Hive-style destination path for a
//!   dataset and process date

mod date;
mod types;

pub use date::{extract_process_date, find_date_stamp, Clock, FixedClock, SystemClock};
pub use types::CuratedPartition;

#[cfg(test)]
mod tests;
