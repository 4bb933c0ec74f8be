//! Folder processor: read, drop one column, overwrite a curated partition

use super::types::{Dataset, FolderOutcome};
use crate::config::JobConfig;
use crate::error::{Error, Result, ResultExt};
use crate::output::{decode_parquet, encode_parquet, ParquetWriterConfig};
use crate::partition::CuratedPartition;
use crate::storage::StorageZone;
use crate::transform::{
    conform_batch, drop_column, drop_column_from_schema, retained_columns, unify_schemas,
};
use bytes::Bytes;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Marker written next to the data once a partition is complete
pub const SUCCESS_MARKER: &str = "_SUCCESS";

/// Processes raw folders into curated partitions
#[derive(Debug, Clone)]
pub struct Processor {
    raw: StorageZone,
    curated: StorageZone,
    curated_prefix: String,
    writer_config: ParquetWriterConfig,
    data_file: String,
}

impl Processor {
    /// Create a processor for the given zones
    pub fn new(raw: StorageZone, curated: StorageZone, config: &JobConfig) -> Self {
        let data_file = match config.parquet.compression.file_infix() {
            Some(infix) => format!("part-00000.{infix}.parquet"),
            None => "part-00000.parquet".to_string(),
        };

        Self {
            raw,
            curated,
            curated_prefix: config.curated_prefix.clone(),
            writer_config: config.parquet.into(),
            data_file,
        }
    }

    /// Raw zone
    pub fn raw(&self) -> &StorageZone {
        &self.raw
    }

    /// Curated zone
    pub fn curated(&self) -> &StorageZone {
        &self.curated
    }

    /// Name of the data file written into each partition
    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    /// Destination partition for a subfolder and date
    pub fn partition(&self, target_subfolder: &str, date: NaiveDate) -> CuratedPartition {
        CuratedPartition::new(
            self.curated.bucket(),
            &self.curated_prefix,
            target_subfolder,
            date,
        )
    }

    /// Read every data file under a raw folder
    ///
    /// Anything below a hidden path segment (`_*`, `.*`) is skipped. Files
    /// must agree on column names and types; nullability is widened.
    pub async fn read_folder(&self, folder: &str) -> Result<Dataset> {
        let keys = self.raw.list_objects(folder).await?;
        let files: Vec<String> = keys
            .into_iter()
            .filter(|k| is_data_file(k.strip_prefix(folder).unwrap_or(k)))
            .collect();

        if files.is_empty() {
            return Err(Error::EmptyDataset {
                path: self.raw.uri(folder),
            });
        }

        let mut schema: Option<arrow::datatypes::SchemaRef> = None;
        let mut batches = Vec::new();

        for key in &files {
            let data = decode_parquet(self.raw.read_bytes(key).await?)?;
            debug!("Read {} rows from {}", data.num_rows(), self.raw.uri(key));

            let unified = match &schema {
                None => data.schema.clone(),
                Some(current) => unify_schemas(current, &data.schema)
                    .map(Arc::new)
                    .ok_or_else(|| {
                        Error::schema_mismatch(
                            self.raw.uri(key),
                            format!("expected {current:?}, found {:?}", data.schema),
                        )
                    })?,
            };
            schema = Some(unified);
            batches.extend(data.batches);
        }

        let schema = schema.ok_or_else(|| Error::EmptyDataset {
            path: self.raw.uri(folder),
        })?;
        let batches = batches
            .iter()
            .map(|batch| conform_batch(batch, &schema))
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset {
            schema,
            batches,
            files,
        })
    }

    /// Process one raw folder
    ///
    /// Reads the whole folder, removes `drop_column`, and replaces the
    /// contents of the `year=/month=/day=` partition under `target_subfolder`.
    pub async fn process(
        &self,
        source_folder: &str,
        column: &str,
        target_subfolder: &str,
        process_date: NaiveDate,
    ) -> Result<FolderOutcome> {
        let source = self.raw.uri(source_folder);
        info!("Processing: {source}");

        let dataset = self.read_folder(source_folder).await?;
        let column_dropped = retained_columns(&dataset.schema, column).is_some();

        let schema = drop_column_from_schema(&dataset.schema, column)?;
        let batches = dataset
            .batches
            .iter()
            .map(|batch| drop_column(batch, column))
            .collect::<Result<Vec<_>>>()?;

        let (data, rows) = encode_parquet(schema, &batches, &self.writer_config)
            .with_context(|| format!("Failed to encode {source}"))?;

        let partition = self.partition(target_subfolder, process_date);
        let partition_key = partition.key();

        // overwrite: nothing from an earlier run may survive in the partition
        let replaced_objects = self.curated.delete_prefix(&partition_key).await?;
        self.curated
            .put_bytes(&partition.file_key(&self.data_file), data)
            .await?;
        self.curated
            .put_bytes(&partition.file_key(SUCCESS_MARKER), Bytes::new())
            .await?;

        let destination = self.curated.uri(&partition_key);
        info!("Written to: {destination}");

        Ok(FolderOutcome {
            source,
            destination,
            process_date,
            files_read: dataset.files.len(),
            rows,
            column_dropped,
            replaced_objects,
        })
    }
}

/// Whether a key, relative to its batch folder, names a data file
///
/// Every segment is checked, so files under `_temporary/` or
/// `.spark-staging/` are ignored. `_` segments holding `=` are partition
/// folders and stay visible.
pub fn is_data_file(relative: &str) -> bool {
    !relative.is_empty()
        && !relative.ends_with('/')
        && relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .all(|segment| !is_hidden_segment(segment))
}

fn is_hidden_segment(segment: &str) -> bool {
    segment.starts_with('.') || (segment.starts_with('_') && !segment.contains('='))
}
