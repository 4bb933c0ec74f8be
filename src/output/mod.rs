//! Output module
//!
//! Parquet encoding and decoding for the curation job.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Decoding raw-zone Parquet objects into Arrow RecordBatches
//! - Encoding RecordBatches into a single in-memory Parquet file
//! - Writer tuning (compression, row groups, dictionary, statistics)

mod reader;
mod writer;

pub use reader::{decode_parquet, ParquetData};
pub use writer::{encode_parquet, ParquetWriter, ParquetWriterConfig};
