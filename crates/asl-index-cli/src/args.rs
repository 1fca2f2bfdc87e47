use std::path::PathBuf;

use asl_index_core::config::DEFAULT_REGISTRY_URL;
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "asl-index",
    version,
    about = "Build a static catalogue page of LiveSplit autosplitter scripts"
)]
pub struct Args {
    /// Registry XML to download
    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Read the registry from a local file instead of downloading it
    #[arg(long, conflicts_with = "registry_url")]
    pub registry_file: Option<PathBuf>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to a file [html default: docs/index.html, others: stdout]
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}
