use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Answer engine readiness scoring for marketing copy"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file layered over readiness.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score copy and print the full report
    Score(ScoreCommand),
    /// List what's missing for accurate recommendations
    Gaps(InputArgs),
    /// List quick wins
    Suggest(InputArgs),
    /// Score every .txt and .md file under a directory
    Batch(BatchCommand),
}

#[derive(Args, Clone)]
pub struct InputArgs {
    /// File to read, or "-" for stdin
    pub input: Option<PathBuf>,
    /// Score this text instead of reading a file
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub source: InputArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Write the rendered report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Exit with code 2 when the score is below this value
    #[arg(long)]
    pub fail_under: Option<f32>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(long)]
    pub fail_under: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
