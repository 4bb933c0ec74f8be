//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Raw-to-curated zone curation job
#[derive(Parser, Debug)]
#[command(name = "zone-curator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job name recorded at init and commit
    #[arg(long = "job-name", visible_alias = "JOB_NAME", global = true)]
    pub job_name: Option<String>,

    /// Job configuration file (YAML); built-in mapping when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat buckets as directories under this local root
    #[arg(long, global = true)]
    pub local_root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Curate every configured dataset and commit the job
    Run,

    /// Show each raw folder with its curated destination, without writing
    Plan,

    /// List the raw folders of one dataset
    Folders {
        /// Dataset name from the configuration
        #[arg(long)]
        dataset: String,
    },

    /// Print the effective configuration as YAML
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
