use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cgpa",
    version,
    about = "CGPA calculator over semester grade transcripts"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the CGPA of a transcript file
    Compute(ComputeCommand),
    /// Report every entry the aggregation would exclude
    Check(CheckCommand),
    /// Print the grade scale
    Scale,
    /// Write a starter transcript file
    Init(InitCommand),
}

#[derive(Args)]
pub struct ComputeCommand {
    /// Transcript file (.toml or .json)
    pub file: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Transcript file (.toml or .json)
    pub file: PathBuf,
    /// Treat skipped entries as blocking
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct InitCommand {
    /// Destination path for the template
    pub file: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}
