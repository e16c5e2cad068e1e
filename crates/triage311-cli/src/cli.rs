//! Command-line argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Classify a Memphis 311 service request with Azure AI and write result.json
#[derive(Debug, Parser)]
#[command(name = "triage311", version, about)]
pub struct Cli {
    /// Index into the sample requests file; omit to use the built-in complaint
    pub sample: Option<usize>,

    /// Path to the sample requests JSON array
    #[arg(long, default_value = "data/sample_requests.json")]
    pub data: PathBuf,

    /// Where to write the result record
    #[arg(long, default_value = "result.json")]
    pub output: PathBuf,

    /// Print detailed progress output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the final ticket
    #[arg(short, long)]
    pub quiet: bool,
}
