//! Error types for zone-curator
//!
//! This module defines the error hierarchy for the whole job.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for zone-curator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Object store error: {0}")]
    Storage(#[from] object_store::Error),

    #[error("Invalid storage path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("No Parquet data found under '{path}'")]
    EmptyDataset { path: String },

    #[error("Schema mismatch in '{path}': {message}")]
    SchemaMismatch { path: String, message: String },

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Partition Errors
    // ============================================================================
    #[error("No process date found in folder '{path}'")]
    MissingProcessDate { path: String },

    #[error("Invalid process date '{value}'")]
    InvalidProcessDate { value: String },

    // ============================================================================
    // Job Errors
    // ============================================================================
    #[error("Job error: {message}")]
    Job { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create a job lifecycle error
    pub fn job(message: impl Into<String>) -> Self {
        Self::Job {
            message: message.into(),
        }
    }
}

/// Result type alias for zone-curator
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
