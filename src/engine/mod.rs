//! Execution engine module
//!
//! Folder processing and job orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Processor` - reads one raw folder, drops a column, overwrites a curated partition
//! - `CurationJob` - init / run / commit lifecycle over every configured dataset
//! - Summary types describing what a run did

mod job;
mod processor;
mod types;

pub use job::CurationJob;
pub use processor::{is_data_file, Processor, SUCCESS_MARKER};
pub use types::{Dataset, DatasetSummary, FolderOutcome, JobSummary, PlannedFolder};
