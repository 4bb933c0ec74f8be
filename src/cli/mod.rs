//! CLI module
//!
//! Command-line interface for running the curation job.
//!
//! # Commands
//!
//! - `run` - Curate every dataset and commit
//! - `plan` - Show folder → partition mapping without writing
//! - `folders` - List raw folders of one dataset
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
