//! Configuration types for the curation job
//!
//! The job is driven by a static mapping from dataset name to the single
//! column that gets dropped, plus the bucket layout of both zones. The
//! defaults reproduce the built-in Salesforce mapping; a YAML file can
//! replace any part of it (see [`crate::loader`]).

use crate::types::{CompressionCodec, MissingDatePolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Top-Level Job Config
// ============================================================================

/// Complete job configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Bucket holding the raw zone
    #[serde(default = "default_raw_bucket")]
    pub raw_bucket: String,

    /// Bucket holding the curated zone
    #[serde(default = "default_curated_bucket")]
    pub curated_bucket: String,

    /// Key prefix inside the curated bucket
    #[serde(default = "default_curated_prefix")]
    pub curated_prefix: String,

    /// Object store scheme for both buckets (s3, gs, az, memory)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// When set, buckets are directories under this local root instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_root: Option<PathBuf>,

    /// Behaviour for folders without a date stamp
    #[serde(default)]
    pub missing_date: MissingDatePolicy,

    /// Datasets to curate, processed in declaration order
    #[serde(default = "default_datasets")]
    pub datasets: Vec<DatasetConfig>,

    /// Parquet writer settings
    #[serde(default)]
    pub parquet: ParquetSettings,
}

fn default_raw_bucket() -> String {
    "salesforce-objects-rawzone".to_string()
}

fn default_curated_bucket() -> String {
    "curated-bc".to_string()
}

fn default_curated_prefix() -> String {
    "bc-curatedzone-sf".to_string()
}

fn default_scheme() -> String {
    "s3".to_string()
}

fn default_datasets() -> Vec<DatasetConfig> {
    vec![
        DatasetConfig::new("salesforce-data", "No_of_demo_calls__c"),
        DatasetConfig::new("salesforce-data1", "Planned_DCR__c"),
    ]
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            raw_bucket: default_raw_bucket(),
            curated_bucket: default_curated_bucket(),
            curated_prefix: default_curated_prefix(),
            scheme: default_scheme(),
            local_root: None,
            missing_date: MissingDatePolicy::default(),
            datasets: default_datasets(),
            parquet: ParquetSettings::default(),
        }
    }
}

impl JobConfig {
    /// URL of the raw zone, suitable for [`crate::storage::StorageZone::parse`]
    pub fn raw_zone_url(&self) -> String {
        self.zone_url(&self.raw_bucket)
    }

    /// URL of the curated zone, suitable for [`crate::storage::StorageZone::parse`]
    pub fn curated_zone_url(&self) -> String {
        self.zone_url(&self.curated_bucket)
    }

    fn zone_url(&self, bucket: &str) -> String {
        match &self.local_root {
            Some(root) => root.join(bucket).to_string_lossy().into_owned(),
            None => format!("{}://{bucket}", self.scheme),
        }
    }

    /// Look up a dataset by name
    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| d.name == name)
    }
}

// ============================================================================
// Dataset Config
// ============================================================================

/// One dataset and the column removed from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name, also the top-level folder in the raw zone
    pub name: String,

    /// Column removed before writing to the curated zone
    pub drop_column: String,
}

impl DatasetConfig {
    /// Create a new dataset entry
    pub fn new(name: impl Into<String>, drop_column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            drop_column: drop_column.into(),
        }
    }

    /// Listing prefix in the raw zone (`<name>/`)
    pub fn raw_prefix(&self) -> String {
        format!("{}/", self.name)
    }

    /// Subfolder under the curated prefix (`<name>-cleaned`)
    pub fn target_subfolder(&self) -> String {
        format!("{}-cleaned", self.name)
    }
}

// ============================================================================
// Parquet Settings
// ============================================================================

/// Parquet output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParquetSettings {
    /// Compression codec
    #[serde(default)]
    pub compression: CompressionCodec,

    /// Maximum rows per row group
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,

    /// Dictionary encoding
    #[serde(default = "default_true")]
    pub dictionary: bool,

    /// Column statistics in the file footer
    #[serde(default = "default_true")]
    pub statistics: bool,
}

fn default_row_group_size() -> usize {
    1024 * 1024
}

fn default_true() -> bool {
    true
}

impl Default for ParquetSettings {
    fn default() -> Self {
        Self {
            compression: CompressionCodec::default(),
            row_group_size: default_row_group_size(),
            dictionary: true,
            statistics: true,
        }
    }
}
