use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "forms2sql",
    about = "Convert a Google Forms member registration export into batched SQL insert scripts",
    version
)]
pub struct Cli {
    /// CSV export to convert
    #[arg(default_value = "Data.csv")]
    pub input: PathBuf,

    /// Directory the batch files are written to
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Rows per batch file [default: from config, 100]
    #[arg(short, long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Config file [default: ./.forms2sql/config.toml, fallback ~/.config/forms2sql/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show the per-batch table and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
