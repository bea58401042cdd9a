use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "visa-score",
    version,
    about = "Rule-based visa application approval scoring"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read scoring configuration from this file instead of the layered search
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one application record
    Assess(AssessCommand),
    /// Score every JSON application under a directory
    Batch(BatchCommand),
    /// Check only the required documents of an application record
    Documents(DocumentsCommand),
    /// Print the active required-documents table
    Requirements(RequirementsCommand),
}

#[derive(Args)]
pub struct AssessCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Append the scoring trace to the result
    #[arg(long)]
    pub explain: bool,
    /// Archive the assessment under .visa-score/assessments
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DocumentsCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RequirementsCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
