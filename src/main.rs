//! markdown-to-snippet: generate VSCode snippet files from structured markdown.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use markdown_to_snippet::config;
use markdown_to_snippet::error::Error;
use markdown_to_snippet::formats::markdown::MarkdownFormat;
use markdown_to_snippet::input::{self, Job};
use markdown_to_snippet::pipeline::{Outcome, Pipeline};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "markdown-to-snippet")]
#[command(
    about = "Generate VSCode snippet files from structured markdown",
    long_about = None
)]
struct Args {
    /// Markdown inputs, optionally followed by one output file per input
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Print the generated snippets instead of writing them
    #[arg(long)]
    stdout: bool,

    /// Zone marker id restricting extraction
    #[arg(long, value_name = "ID")]
    zone: Option<String>,

    /// Configuration file to load instead of markdown-to-snippet.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debugging detail
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MARKDOWN_TO_SNIPPET_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose);

    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(config::Config::load, config::Config::load_from);

    // Override config with command line args
    if let Some(zone) = args.zone {
        cfg.zone_id = zone;
    }

    let jobs = match input::pair_paths(&args.paths, &cfg) {
        Ok(jobs) => jobs,
        Err(e) => {
            eprintln!("✖ {e}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = Arc::new(Pipeline::new(MarkdownFormat, cfg.zone_id));
    let outcomes = pipeline.run_jobs(jobs, !args.stdout).await;

    let mut failed = false;
    for Outcome { job, result } in outcomes {
        match result {
            Ok(json) if args.stdout => println!("{json}"),
            Ok(_) => {
                info!(
                    input = %job.input.display(),
                    output = %job.output.display(),
                    "wrote snippets"
                );
                eprintln!("✔ Snippets have been written to {}", job.output.display());
            }
            Err(e) => {
                report(&job, &e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report(job: &Job, e: &Error) {
    if e.is_known() {
        eprintln!("✖ {e}");
        return;
    }
    error!(input = %job.input.display(), error = %e, "unexpected failure");
    eprintln!(
        "An unexpected error occurred while processing {}",
        job.input.display()
    );
    eprintln!(
        "Please file an issue at {}/issues with your markdown file's content",
        env!("CARGO_PKG_REPOSITORY")
    );
    eprintln!("Cause: {e:?}");
}
