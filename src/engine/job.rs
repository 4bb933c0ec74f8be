//! Job lifecycle: init, run every dataset, commit

use super::processor::Processor;
use super::types::{DatasetSummary, JobSummary, PlannedFolder};
use crate::config::{DatasetConfig, JobConfig};
use crate::error::{Error, Result};
use crate::loader::validate_job_config;
use crate::partition::{extract_process_date, Clock};
use crate::storage::StorageZone;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// One curation run over every configured dataset
#[derive(Debug)]
pub struct CurationJob {
    config: JobConfig,
    processor: Processor,
    clock: Arc<dyn Clock>,
    summary: JobSummary,
}

impl CurationJob {
    /// Initialise a job
    ///
    /// Fails when the job name is blank or the configuration is invalid.
    pub fn init(
        job_name: impl Into<String>,
        config: JobConfig,
        raw: StorageZone,
        curated: StorageZone,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let job_name = job_name.into();
        if job_name.trim().is_empty() {
            return Err(Error::job("Job name cannot be empty"));
        }
        validate_job_config(&config)?;

        info!(
            "Initialised job {job_name}: {} -> {}",
            raw.uri(""),
            curated.uri(&config.curated_prefix)
        );

        let processor = Processor::new(raw, curated, &config);
        Ok(Self {
            config,
            processor,
            clock,
            summary: JobSummary::new(job_name),
        })
    }

    /// Job name
    pub fn name(&self) -> &str {
        &self.summary.job_name
    }

    /// Effective configuration
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Folder processor used by the job
    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    /// Summary accumulated so far
    pub fn summary(&self) -> &JobSummary {
        &self.summary
    }

    /// Raw folders of one dataset, one level below `<dataset>/`
    pub async fn list_raw_folders(&self, dataset: &DatasetConfig) -> Result<Vec<String>> {
        self.processor
            .raw()
            .list_folders(&dataset.raw_prefix())
            .await
    }

    /// Enumerate every folder and its destination without reading or writing data
    pub async fn plan(&self) -> Result<Vec<PlannedFolder>> {
        let mut planned = Vec::new();

        for dataset in &self.config.datasets {
            let target = dataset.target_subfolder();
            for folder in self.list_raw_folders(dataset).await? {
                let process_date =
                    extract_process_date(&folder, self.clock.as_ref(), self.config.missing_date)?;
                let partition = self.processor.partition(&target, process_date);
                planned.push(PlannedFolder {
                    dataset: dataset.name.clone(),
                    folder,
                    process_date,
                    destination: self.processor.curated().uri(&partition.key()),
                });
            }
        }

        Ok(planned)
    }

    /// Process every folder of every dataset, strictly in order
    ///
    /// The first failure aborts the run; partitions written before it stay
    /// in place.
    pub async fn run(&mut self) -> Result<&JobSummary> {
        let start = Instant::now();

        for dataset in &self.config.datasets {
            let folders = self.list_raw_folders(dataset).await?;
            info!(
                "Dataset {}: {} raw folders, dropping column {}",
                dataset.name,
                folders.len(),
                dataset.drop_column
            );

            let target = dataset.target_subfolder();
            let mut dataset_summary = DatasetSummary::new(&dataset.name, &dataset.drop_column);

            for folder in &folders {
                let process_date =
                    extract_process_date(folder, self.clock.as_ref(), self.config.missing_date)?;
                let outcome = self
                    .processor
                    .process(folder, &dataset.drop_column, &target, process_date)
                    .await?;
                dataset_summary.folders.push(outcome);
            }

            self.summary.datasets.push(dataset_summary);
        }

        info!(
            "Job {} processed {} folders ({} rows) in {:?}",
            self.summary.job_name,
            self.summary.total_folders(),
            self.summary.total_rows(),
            start.elapsed()
        );
        Ok(&self.summary)
    }

    /// Commit the job and hand back its summary
    pub fn commit(mut self) -> JobSummary {
        self.summary.committed_at = Some(Utc::now());
        info!(
            "Committed job {}: {} folders, {} rows",
            self.summary.job_name,
            self.summary.total_folders(),
            self.summary.total_rows()
        );
        self.summary
    }
}
