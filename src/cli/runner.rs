//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::JobConfig;
use crate::engine::{CurationJob, JobSummary, PlannedFolder};
use crate::error::{Error, Result};
use crate::loader::{load_job_config, validate_job_config};
use crate::partition::{Clock, SystemClock};
use crate::storage::StorageZone;
use serde_json::{json, Value};
use std::sync::Arc;

/// Job name used by read-only commands when none is given
const DEFAULT_JOB_NAME: &str = "zone-curator";

/// CLI runner
pub struct Runner {
    cli: Cli,
    clock: Arc<dyn Clock>,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for undated folders
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run => self.run_job().await,
            Commands::Plan => self.plan().await,
            Commands::Folders { dataset } => self.folders(dataset).await,
            Commands::Config => self.show_config(),
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<JobConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_job_config(path)?,
            None => JobConfig::default(),
        };

        if let Some(root) = &self.cli.local_root {
            config.local_root = Some(root.clone());
        }

        validate_job_config(&config)?;
        Ok(config)
    }

    /// Build the job with zones parsed from the configuration
    fn init_job(&self, job_name: &str) -> Result<CurationJob> {
        let config = self.load_config()?;
        let raw = StorageZone::parse(&config.raw_zone_url())?;
        let curated = StorageZone::parse(&config.curated_zone_url())?;
        CurationJob::init(job_name, config, raw, curated, self.clock.clone())
    }

    /// Run the job end to end and commit it
    async fn run_job(&self) -> Result<()> {
        let job_name = self
            .cli
            .job_name
            .as_deref()
            .ok_or_else(|| Error::config("Job name not specified (use --job-name)"))?;

        let mut job = self.init_job(job_name)?;
        job.run().await?;
        let summary = job.commit();

        self.output_summary(&summary)
    }

    /// Print the planned folder → partition mapping
    async fn plan(&self) -> Result<()> {
        let job = self.init_job(self.cli.job_name.as_deref().unwrap_or(DEFAULT_JOB_NAME))?;
        let planned = job.plan().await?;

        match self.cli.format {
            OutputFormat::Json => {
                for entry in &planned {
                    self.output_message(&json!({ "type": "PLAN", "plan": entry }))?;
                }
            }
            OutputFormat::Pretty => {
                if planned.is_empty() {
                    println!("No raw folders found.");
                }
                for PlannedFolder {
                    dataset,
                    folder,
                    process_date,
                    destination,
                } in &planned
                {
                    println!("[{dataset}] {folder} ({process_date}) -> {destination}");
                }
            }
        }
        Ok(())
    }

    /// Print the raw folders of one dataset
    async fn folders(&self, dataset_name: &str) -> Result<()> {
        let job = self.init_job(self.cli.job_name.as_deref().unwrap_or(DEFAULT_JOB_NAME))?;
        let dataset = job
            .config()
            .dataset(dataset_name)
            .ok_or_else(|| {
                Error::invalid_value("dataset", format!("'{dataset_name}' is not configured"))
            })?
            .clone();

        let folders = job.list_raw_folders(&dataset).await?;

        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!({
                "type": "FOLDERS",
                "dataset": dataset.name,
                "folders": folders,
            }))?,
            OutputFormat::Pretty => {
                for folder in &folders {
                    println!("{folder}");
                }
            }
        }
        Ok(())
    }

    /// Print the effective configuration
    fn show_config(&self) -> Result<()> {
        let config = self.load_config()?;
        print!("{}", serde_yaml::to_string(&config)?);
        Ok(())
    }

    /// Output the summary of a committed job
    fn output_summary(&self, summary: &JobSummary) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                self.output_message(&json!({ "type": "SUMMARY", "summary": summary }))?;
            }
            OutputFormat::Pretty => {
                println!("Job: {}", summary.job_name);
                for dataset in &summary.datasets {
                    println!(
                        "  {} (dropped {}): {} folders, {} rows",
                        dataset.dataset,
                        dataset.drop_column,
                        dataset.folders.len(),
                        dataset.rows()
                    );
                    for folder in &dataset.folders {
                        println!("    {} -> {}", folder.source, folder.destination);
                    }
                }
                println!(
                    "Total: {} folders, {} rows",
                    summary.total_folders(),
                    summary.total_rows()
                );
            }
        }
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) -> Result<()> {
        println!("{}", serde_json::to_string(msg)?);
        Ok(())
    }
}
