//! YAML parser for job configuration
//!
//! Parses and validates job YAML files. Fields left out of the file fall
//! back to the built-in defaults.

use crate::config::{DatasetConfig, JobConfig};
use crate::error::{Error, Result, ResultExt};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a job configuration from a YAML file
pub fn load_job_config(path: impl AsRef<Path>) -> Result<JobConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    load_job_config_from_str(&content)
}

/// Load a job configuration from a YAML string
pub fn load_job_config_from_str(yaml: &str) -> Result<JobConfig> {
    let config: JobConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse job YAML: {e}")))?;

    validate_job_config(&config)?;
    Ok(config)
}

/// Validate a job configuration
pub fn validate_job_config(config: &JobConfig) -> Result<()> {
    if config.raw_bucket.is_empty() {
        return Err(Error::missing_field("raw_bucket"));
    }

    if config.curated_bucket.is_empty() {
        return Err(Error::missing_field("curated_bucket"));
    }

    if config.scheme.is_empty() && config.local_root.is_none() {
        return Err(Error::missing_field("scheme"));
    }

    if config.parquet.row_group_size == 0 {
        return Err(Error::invalid_value(
            "parquet.row_group_size",
            "must be greater than zero",
        ));
    }

    if config.datasets.is_empty() {
        return Err(Error::config("Job must have at least one dataset"));
    }

    let names: HashSet<_> = config.datasets.iter().map(|d| &d.name).collect();
    if names.len() != config.datasets.len() {
        return Err(Error::config("Duplicate dataset names found"));
    }

    for dataset in &config.datasets {
        validate_dataset(dataset)?;
    }

    Ok(())
}

/// Validate a dataset entry
fn validate_dataset(dataset: &DatasetConfig) -> Result<()> {
    if dataset.name.is_empty() {
        return Err(Error::config("Dataset name cannot be empty"));
    }

    // the name is used verbatim as a listing prefix
    if dataset.name.contains('/') {
        return Err(Error::invalid_value(
            "datasets.name",
            format!("'{}' must not contain '/'", dataset.name),
        ));
    }

    if dataset.drop_column.is_empty() {
        return Err(Error::config(format!(
            "Dataset '{}' drop_column cannot be empty",
            dataset.name
        )));
    }

    Ok(())
}
