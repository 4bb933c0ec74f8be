//! Curated partition paths

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A date partition of one curated dataset
///
/// Renders as `<prefix>/<subfolder>/year=YYYY/month=MM/day=DD/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedPartition {
    /// Curated bucket
    pub bucket: String,
    /// Key prefix inside the curated bucket
    pub prefix: String,
    /// Dataset subfolder, e.g. `salesforce-data-cleaned`
    pub subfolder: String,
    /// Process date
    pub date: NaiveDate,
}

impl CuratedPartition {
    /// Create a new partition
    pub fn new(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        subfolder: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            subfolder: subfolder.into(),
            date,
        }
    }

    /// Hive-style date segments: `year=YYYY/month=MM/day=DD`
    pub fn date_segments(&self) -> String {
        format!(
            "year={}/month={:02}/day={:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }

    /// Key of the partition folder within the curated bucket, with trailing `/`
    pub fn key(&self) -> String {
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}/{}/", self.subfolder, self.date_segments())
        } else {
            format!("{prefix}/{}/{}/", self.subfolder, self.date_segments())
        }
    }

    /// Key of a file inside the partition folder
    pub fn file_key(&self, filename: &str) -> String {
        format!("{}{filename}", self.key())
    }

    /// Bucket-qualified path, e.g. `curated-bc/bc-curatedzone-sf/x-cleaned/year=2024/month=01/day=05/`
    pub fn path(&self) -> String {
        format!("{}/{}", self.bucket.trim_end_matches('/'), self.key())
    }
}

impl fmt::Display for CuratedPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
