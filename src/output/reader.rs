//! Parquet decoding

use crate::error::Result;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

/// Contents of one decoded Parquet file
#[derive(Debug, Clone)]
pub struct ParquetData {
    /// File schema, present even when the file has no rows
    pub schema: SchemaRef,
    /// Decoded record batches
    pub batches: Vec<RecordBatch>,
}

impl ParquetData {
    /// Total rows across all batches
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }
}

/// Decode a whole in-memory Parquet file
pub fn decode_parquet(data: Bytes) -> Result<ParquetData> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(data)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ParquetData { schema, batches })
}
