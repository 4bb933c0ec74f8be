//! Parquet encoding
//!
//! Provides utilities for writing Arrow RecordBatches to in-memory Parquet
//! files that are then uploaded to the curated zone.

use crate::config::ParquetSettings;
use crate::error::{Error, Result};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;

/// Configuration for Parquet writer
#[derive(Debug, Clone)]
pub struct ParquetWriterConfig {
    compression: Compression,
    row_group_size: usize,
    dictionary_enabled: bool,
    statistics_enabled: bool,
}

impl ParquetWriterConfig {
    /// Get dictionary encoding enabled
    #[must_use]
    pub fn is_dictionary_enabled(&self) -> bool {
        self.dictionary_enabled
    }

    /// Get statistics enabled
    #[must_use]
    pub fn is_statistics_enabled(&self) -> bool {
        self.statistics_enabled
    }

    /// Get row group size
    #[must_use]
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Get compression codec
    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: 1024 * 1024, // 1M rows
            dictionary_enabled: true,
            statistics_enabled: true,
        }
    }
}

impl From<ParquetSettings> for ParquetWriterConfig {
    fn from(settings: ParquetSettings) -> Self {
        Self::default()
            .with_compression(settings.compression.into())
            .with_row_group_size(settings.row_group_size)
            .with_dictionary(settings.dictionary)
            .with_statistics(settings.statistics)
    }
}

impl ParquetWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression algorithm
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set row group size
    #[must_use]
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Enable or disable dictionary encoding
    #[must_use]
    pub fn with_dictionary(mut self, enabled: bool) -> Self {
        self.dictionary_enabled = enabled;
        self
    }

    /// Enable or disable statistics
    #[must_use]
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.statistics_enabled = enabled;
        self
    }

    /// Build writer properties
    fn build_properties(&self) -> WriterProperties {
        let mut builder = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size);

        if !self.dictionary_enabled {
            builder = builder.set_dictionary_enabled(false);
        }

        if !self.statistics_enabled {
            builder =
                builder.set_statistics_enabled(parquet::file::properties::EnabledStatistics::None);
        }

        builder.build()
    }
}

/// Parquet writer over any byte sink
pub struct ParquetWriter<W: Write + Send> {
    /// Arrow writer
    writer: ArrowWriter<W>,
    /// Number of rows written
    rows_written: usize,
}

impl<W: Write + Send> ParquetWriter<W> {
    /// Create a new Parquet writer
    pub fn new(sink: W, schema: SchemaRef, config: &ParquetWriterConfig) -> Result<Self> {
        let props = config.build_properties();
        let writer = ArrowWriter::try_new(sink, schema, Some(props))
            .map_err(|e| Error::output(format!("Failed to create Parquet writer: {e}")))?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Write a RecordBatch
    pub fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer
            .write(batch)
            .map_err(|e| Error::output(format!("Failed to write batch: {e}")))?;

        self.rows_written += batch.num_rows();
        Ok(())
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Close the writer and finalize the file
    pub fn close(self) -> Result<usize> {
        let rows = self.rows_written;
        self.writer
            .close()
            .map_err(|e| Error::output(format!("Failed to close Parquet writer: {e}")))?;
        Ok(rows)
    }
}

/// Encode batches sharing `schema` into a single in-memory Parquet file
///
/// An empty batch list still produces a valid file carrying the schema.
/// Returns the file bytes and the number of rows written.
pub fn encode_parquet(
    schema: SchemaRef,
    batches: &[RecordBatch],
    config: &ParquetWriterConfig,
) -> Result<(Bytes, usize)> {
    let mut buf = Vec::new();
    let mut writer = ParquetWriter::new(&mut buf, schema, config)?;
    for batch in batches {
        writer.write(batch)?;
    }
    let rows = writer.close()?;
    Ok((Bytes::from(buf), rows))
}
