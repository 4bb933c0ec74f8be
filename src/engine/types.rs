//! Engine types
//!
//! Loaded datasets and the outcome records produced by a run.

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// All Parquet data of one raw folder, held in memory
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Schema shared by every file
    pub schema: SchemaRef,
    /// Batches in file order
    pub batches: Vec<RecordBatch>,
    /// Keys of the files that were read
    pub files: Vec<String>,
}

impl Dataset {
    /// Total rows across all batches
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }
}

/// Result of processing one raw folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderOutcome {
    /// Raw folder URI
    pub source: String,
    /// Curated partition URI
    pub destination: String,
    /// Partition date
    pub process_date: NaiveDate,
    /// Number of raw files read
    pub files_read: usize,
    /// Rows written
    pub rows: usize,
    /// Whether the configured column existed and was removed
    pub column_dropped: bool,
    /// Objects deleted from the destination before writing
    pub replaced_objects: usize,
}

/// A folder the job would process, without touching data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFolder {
    /// Dataset name
    pub dataset: String,
    /// Raw folder key
    pub folder: String,
    /// Partition date
    pub process_date: NaiveDate,
    /// Curated partition URI
    pub destination: String,
}

/// Per-dataset section of a job summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Dataset name
    pub dataset: String,
    /// Column that was dropped
    pub drop_column: String,
    /// One entry per processed folder, in processing order
    pub folders: Vec<FolderOutcome>,
}

impl DatasetSummary {
    /// Create an empty summary for a dataset
    pub fn new(dataset: impl Into<String>, drop_column: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            drop_column: drop_column.into(),
            folders: Vec::new(),
        }
    }

    /// Rows written for this dataset
    pub fn rows(&self) -> usize {
        self.folders.iter().map(|f| f.rows).sum()
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    /// Job name given at init
    pub job_name: String,
    /// When the job was initialised
    pub started_at: DateTime<Utc>,
    /// When the job was committed
    pub committed_at: Option<DateTime<Utc>>,
    /// Datasets in processing order
    pub datasets: Vec<DatasetSummary>,
}

impl JobSummary {
    /// Create an empty summary
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            started_at: Utc::now(),
            committed_at: None,
            datasets: Vec::new(),
        }
    }

    /// Folders processed across all datasets
    pub fn total_folders(&self) -> usize {
        self.datasets.iter().map(|d| d.folders.len()).sum()
    }

    /// Rows written across all datasets
    pub fn total_rows(&self) -> usize {
        self.datasets.iter().map(DatasetSummary::rows).sum()
    }

    /// Whether the job has been committed
    pub fn is_committed(&self) -> bool {
        self.committed_at.is_some()
    }
}
