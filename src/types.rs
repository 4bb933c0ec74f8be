//! Common types used throughout zone-curator
//!
//! Shared enums for configuration and output that are used across
//! multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Missing Date Policy
// ============================================================================

/// What to do when a raw folder name carries no `YYYY-MM-DDT` stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDatePolicy {
    /// Partition the folder under the current date
    #[default]
    Today,
    /// Abort the run
    Fail,
}

// ============================================================================
// Parquet Compression
// ============================================================================

/// Compression codec for curated Parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// Snappy (fast, moderate ratio)
    #[default]
    Snappy,
    /// Zstandard
    Zstd,
    /// Gzip
    Gzip,
    /// No compression
    None,
}

impl CompressionCodec {
    /// File name infix used by Parquet writers, e.g. `part-00000.snappy.parquet`
    pub fn file_infix(self) -> Option<&'static str> {
        match self {
            Self::Snappy => Some("snappy"),
            Self::Zstd => Some("zstd"),
            Self::Gzip => Some("gz"),
            Self::None => None,
        }
    }
}

impl From<CompressionCodec> for parquet::basic::Compression {
    fn from(codec: CompressionCodec) -> Self {
        match codec {
            CompressionCodec::Snappy => parquet::basic::Compression::SNAPPY,
            CompressionCodec::Zstd => {
                parquet::basic::Compression::ZSTD(parquet::basic::ZstdLevel::default())
            }
            CompressionCodec::Gzip => {
                parquet::basic::Compression::GZIP(parquet::basic::GzipLevel::default())
            }
            CompressionCodec::None => parquet::basic::Compression::UNCOMPRESSED,
        }
    }
}
