//! `forms2sql` — turn a Google Forms member registration export into SQL batch files.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load output config ([`config::load_config`]).
//! 3. Read the whole CSV into memory ([`reader::read_rows`]).
//! 4. Split rows into fixed-size batches ([`batch::plan_batches`]).
//! 5. Normalize each row into member, spouse and child records ([`normalize`]).
//! 6. Render and write one SQL script per batch ([`sql`], [`batch::write_batches`]).
//! 7. Print the manifest and load order ([`report`]).
//!
//! Only I/O and configuration problems are errors. Unusable answers in the
//! export become `NULL` / `FALSE` in the output.

mod batch;
mod cli;
mod config;
mod field;
mod models;
mod normalize;
mod reader;
mod report;
mod sql;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, ReportFormat};
use config::load_config;
use models::Manifest;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let (mut config, source) = load_config(&std::env::current_dir()?, cli.config.as_deref())?;
    if let Some(size) = cli.batch_size {
        config.output.batch_size = size;
    }
    config.validate()?;
    info!("config: {}", source);

    let rows = reader::read_rows(&cli.input)?;
    info!("read {} rows from {}", rows.len(), cli.input.display());

    let plan = batch::plan_batches(rows.len(), config.output.batch_size);
    debug!(
        batches = plan.len(),
        batch_size = config.output.batch_size,
        "planned batches"
    );

    let show_progress = !cli.quiet && cli.report == ReportFormat::Terminal && !plan.is_empty();
    let pb = if show_progress {
        let pb = ProgressBar::new(plan.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let batches = batch::write_batches(&rows, &config.output, &cli.out_dir, pb.as_ref())?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let manifest = Manifest {
        input: cli.input.clone(),
        schema_file: config.output.schema_file.clone(),
        batches,
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&manifest, cli.verbose, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&manifest)?),
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the manifest.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "forms2sql=debug"
    } else if quiet {
        "forms2sql=warn"
    } else {
        "forms2sql=info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
