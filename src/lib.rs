// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # zone-curator
//!
//! Batch job that moves Parquet batches from a raw storage zone into a
//! date-partitioned curated zone, dropping one configured column per dataset.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use zone_curator::{CurationJob, JobConfig, StorageZone, SystemClock, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = JobConfig::default();
//!     let raw = StorageZone::parse(&config.raw_zone_url())?;
//!     let curated = StorageZone::parse(&config.curated_zone_url())?;
//!
//!     let mut job = CurationJob::init("nightly", config, raw, curated, Arc::new(SystemClock))?;
//!     job.run().await?;
//!     let summary = job.commit();
//!     println!("{} folders curated", summary.total_folders());
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! ```text
//!  raw-bucket/<dataset>/<batch>T.../*.parquet
//!          │  list_folders (delimiter "/")
//!          ▼
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │ date extract │──▶│  read folder │──▶│ drop column  │
//!  └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                               │ overwrite
//!                                               ▼
//!  curated-bucket/<prefix>/<dataset>-cleaned/year=YYYY/month=MM/day=DD/
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Job configuration
pub mod config;

/// YAML loader for job configuration
pub mod loader;

/// Object store zones
pub mod storage;

/// Process dates and curated partition paths
pub mod partition;

/// Column removal
pub mod transform;

/// Parquet encoding and decoding
pub mod output;

/// Folder processor and job lifecycle
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{DatasetConfig, JobConfig};
pub use engine::{CurationJob, JobSummary, Processor};
pub use error::{Error, Result};
pub use partition::{Clock, CuratedPartition, FixedClock, SystemClock};
pub use storage::StorageZone;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
