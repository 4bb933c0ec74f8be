//! YAML Loader module
//!
//! Parse job configuration from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_job_config` - read and validate a YAML file
//! - `load_job_config_from_str` - same, from an in-memory string
//! - `validate_job_config` - checks applied to every loaded config

mod parser;

pub use parser::{load_job_config, load_job_config_from_str, validate_job_config};
